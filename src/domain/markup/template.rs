//! Generic toast template built from plain fields

use crate::domain::error::RequestError;

use super::document::{Element, MarkupDocument};

/// Field values for the generic toast template.
///
/// Title and body are required and non-empty; the decorative fields
/// default to empty strings and are still emitted as empty elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastFields {
    title: String,
    body: String,
    pub attribution: String,
    pub logo: String,
    pub hero: String,
    pub inline_image: String,
}

impl ToastFields {
    /// Create fields with the two required text lines
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, RequestError> {
        let title = title.into();
        let body = body.into();

        if title.is_empty() {
            return Err(RequestError::EmptyField("title"));
        }
        if body.is_empty() {
            return Err(RequestError::EmptyField("body"));
        }

        Ok(Self {
            title,
            body,
            ..Default::default()
        })
    }

    /// Set the attribution line
    pub fn attribution(mut self, text: impl Into<String>) -> Self {
        self.attribution = text.into();
        self
    }

    /// Set the circular app logo shown in place of the app icon
    pub fn logo(mut self, src: impl Into<String>) -> Self {
        self.logo = src.into();
        self
    }

    /// Set the hero image shown across the top
    pub fn hero(mut self, src: impl Into<String>) -> Self {
        self.hero = src.into();
        self
    }

    /// Set the inline image shown below the text
    pub fn inline_image(mut self, src: impl Into<String>) -> Self {
        self.inline_image = src.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Build the generic toast document:
    ///
    /// ```xml
    /// <toast>
    ///   <visual>
    ///     <binding template="ToastGeneric">
    ///       <text>title</text>
    ///       <text>body</text>
    ///       <text placement="attribution">attribution</text>
    ///       <image placement="appLogoOverride" hint-crop="circle" src="logo"/>
    ///       <image placement="hero" src="hero"/>
    ///       <image src="inline"/>
    ///     </binding>
    ///   </visual>
    /// </toast>
    /// ```
    pub fn to_document(&self) -> MarkupDocument {
        let binding = Element::new("binding")
            .with_attr("template", "ToastGeneric")
            .with_child(Element::new("text").with_text(&self.title))
            .with_child(Element::new("text").with_text(&self.body))
            .with_child(
                Element::new("text")
                    .with_attr("placement", "attribution")
                    .with_text(&self.attribution),
            )
            .with_child(
                Element::new("image")
                    .with_attr("placement", "appLogoOverride")
                    .with_attr("hint-crop", "circle")
                    .with_attr("src", &self.logo),
            )
            .with_child(
                Element::new("image")
                    .with_attr("placement", "hero")
                    .with_attr("src", &self.hero),
            )
            .with_child(Element::new("image").with_attr("src", &self.inline_image));

        MarkupDocument::new(
            Element::new("toast").with_child(Element::new("visual").with_child(binding)),
        )
    }
}
