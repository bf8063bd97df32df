//! Identity lookup infrastructure module
//!
//! Windows resolves app names through the Start menu registry of apps;
//! other platforms use the app name as the identity.

mod app_name;
mod start_apps;

pub use app_name::AppNameResolver;
pub use start_apps::StartAppsResolver;

use crate::application::ports::IdentityResolver;

/// Create the default identity resolver for the current platform
pub fn create_identity_resolver() -> Box<dyn IdentityResolver> {
    if cfg!(windows) {
        Box::new(StartAppsResolver::new())
    } else {
        Box::new(AppNameResolver::new())
    }
}
