//! Freedesktop notification adapter using notify-rust
//!
//! Used where WinRT toasts are unavailable. The toast markup is reduced to
//! what a desktop notification can carry: the first text line becomes the
//! summary, the remaining non-empty lines the body.

use async_trait::async_trait;

use crate::application::ports::{PlatformError, ToastPlatform};
use crate::domain::identity::AppIdentity;
use crate::domain::markup::MarkupDocument;

/// Desktop notification fallback for non-Windows hosts
#[derive(Debug, Default)]
pub struct NotifyRustPlatform;

impl NotifyRustPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Split a document's text lines into summary and body
    fn summary_and_body(document: &MarkupDocument) -> (String, String) {
        let mut texts = document
            .texts()
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let summary = texts.next().unwrap_or_default();
        let body = texts.collect::<Vec<_>>().join("\n");
        (summary, body)
    }
}

#[async_trait]
impl ToastPlatform for NotifyRustPlatform {
    async fn initialize(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn bind(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn show(
        &self,
        document: &MarkupDocument,
        identity: &AppIdentity,
    ) -> Result<(), PlatformError> {
        let (summary, body) = Self::summary_and_body(document);
        let app_name = identity.as_str().to_owned();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&summary)
                .body(&body)
                .show()
                .map_err(|e| PlatformError::ShowFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| PlatformError::TaskFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup::ToastFields;

    #[test]
    fn first_text_is_summary() {
        let doc = ToastFields::new("Hello", "World")
            .unwrap()
            .attribution("via CI")
            .to_document();

        let (summary, body) = NotifyRustPlatform::summary_and_body(&doc);
        assert_eq!(summary, "Hello");
        assert_eq!(body, "World\nvia CI");
    }

    #[test]
    fn empty_lines_are_skipped() {
        let doc = ToastFields::new("Hello", "World").unwrap().to_document();

        let (_, body) = NotifyRustPlatform::summary_and_body(&doc);
        assert_eq!(body, "World");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let doc = MarkupDocument::parse("<toast><text>  Hello </text><text>\n  </text></toast>")
            .unwrap();
        assert_eq!(
            NotifyRustPlatform::summary_and_body(&doc),
            ("Hello".to_string(), String::new())
        );
    }

    #[test]
    fn document_without_text() {
        let doc = MarkupDocument::parse("<toast/>").unwrap();
        assert_eq!(
            NotifyRustPlatform::summary_and_body(&doc),
            (String::new(), String::new())
        );
    }
}
