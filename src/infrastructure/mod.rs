//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with PowerShell, WinRT and the desktop notification daemon.

pub mod config;
pub mod identity;
pub mod platform;

// Re-export adapters
pub use config::UserConfigStore;
pub use identity::{create_identity_resolver, AppNameResolver, StartAppsResolver};
pub use platform::create_platform;
