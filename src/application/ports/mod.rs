//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod identity;
pub mod platform;

// Re-export common types
pub use config::ConfigStore;
pub use identity::{IdentityError, IdentityResolver};
pub use platform::{PlatformError, ToastPlatform};
