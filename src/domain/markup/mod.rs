//! Notification markup: parsed documents and the generic template

mod document;
mod template;

pub use document::{Element, MarkupDocument, MarkupError, Node};
pub use template::ToastFields;
