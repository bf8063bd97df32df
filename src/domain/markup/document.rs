//! Notification markup document

use std::borrow::Cow;
use std::fmt;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Errors when parsing notification markup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("Malformed markup: {0}")]
    Syntax(String),

    #[error("Markup has no root element")]
    Empty,

    #[error("Markup has more than one root element")]
    MultipleRoots,

    #[error("Text outside the root element: \"{0}\"")]
    TextOutsideRoot(String),

    #[error("Element <{0}> is never closed")]
    Unclosed(String),

    #[error("Markup is not valid {0}")]
    Encoding(&'static str),
}

/// A node inside an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its attributes (in document order) and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing one with the same name
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text node. Empty text adds nothing.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of the direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// All descendant elements with the given name, in document order.
    /// Includes `self` when it matches.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_named(name, found);
        }
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_xml(out),
                Node::Text(t) => out.push_str(&escape(t.as_str())),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Parsed notification markup.
///
/// Owns a single root element. Text and attribute values are stored
/// unescaped and escaped again by [`MarkupDocument::to_xml`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument {
    root: Element,
}

impl MarkupDocument {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse markup text into a document.
    ///
    /// Declarations, comments and processing instructions are skipped.
    /// Whitespace-only text between elements is dropped; any other text
    /// is kept exactly as written.
    pub fn parse(source: &str) -> Result<Self, MarkupError> {
        let mut reader = Reader::from_str(source);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| MarkupError::Syntax(e.to_string()))?;

            match event {
                Event::Start(start) => open.push(element_from(&start)?),
                Event::Empty(start) => {
                    let element = element_from(&start)?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| MarkupError::Syntax("unexpected closing tag".into()))?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| MarkupError::Syntax(e.to_string()))?;
                    push_text(&mut open, text.into_owned())?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    push_text(&mut open, text)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(MarkupError::Unclosed(unclosed.name));
        }

        root.map(Self::new).ok_or(MarkupError::Empty)
    }

    /// Parse a markup file's raw bytes.
    ///
    /// A UTF-8, UTF-16LE or UTF-16BE byte order mark selects the encoding;
    /// without one the bytes must be UTF-8.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, MarkupError> {
        Self::parse(&decode_text(bytes)?)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialize to compact XML text
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.root.write_xml(&mut out);
        out
    }

    /// Contents of every `<text>` element, in document order
    pub fn texts(&self) -> Vec<String> {
        self.root
            .descendants_named("text")
            .into_iter()
            .map(Element::text)
            .collect()
    }

    /// Every `<image>` element, in document order
    pub fn images(&self) -> Vec<&Element> {
        self.root.descendants_named("image")
    }
}

impl fmt::Display for MarkupDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, MarkupError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| MarkupError::Syntax(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| MarkupError::Syntax(e.to_string()))?;
        element.set_attr(key, value.into_owned());
    }

    Ok(element)
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), MarkupError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(MarkupError::MultipleRoots);
    }
    *root = Some(element);
    Ok(())
}

fn push_text(open: &mut [Element], text: String) -> Result<(), MarkupError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None => Err(MarkupError::TextOutsideRoot(text.trim().to_string())),
    }
}

fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>, MarkupError> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => utf8(rest),
        [0xFF, 0xFE, rest @ ..] => utf16(rest, u16::from_le_bytes).map(Cow::Owned),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, u16::from_be_bytes).map(Cow::Owned),
        _ => utf8(bytes),
    }
}

fn utf8(bytes: &[u8]) -> Result<Cow<'_, str>, MarkupError> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|_| MarkupError::Encoding("UTF-8"))
}

fn utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, MarkupError> {
    let units = bytes.chunks_exact(2);
    if !units.remainder().is_empty() {
        return Err(MarkupError::Encoding("UTF-16"));
    }
    char::decode_utf16(units.map(|pair| unit([pair[0], pair[1]])))
        .collect::<Result<String, _>>()
        .map_err(|_| MarkupError::Encoding("UTF-16"))
}
