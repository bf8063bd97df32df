//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod identity;
pub mod markup;
pub mod request;
pub mod result_code;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use identity::{AppIdentity, RegisteredApp, DEFAULT_APP_NAME};
pub use markup::{Element, MarkupDocument, MarkupError, Node, ToastFields};
pub use request::{DebugOptions, ToastRequest, ToastSource};
pub use result_code::ResultCode;
