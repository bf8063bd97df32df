//! Identity resolver for hosts where the app name is the identity

use async_trait::async_trait;

use crate::application::ports::{IdentityError, IdentityResolver};
use crate::domain::identity::{AppIdentity, RegisteredApp};

/// Uses the requested display name itself as the identity.
///
/// Freedesktop notification daemons have no registry of app identities;
/// the app name sent with each notification is all there is.
#[derive(Debug, Default)]
pub struct AppNameResolver;

impl AppNameResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IdentityResolver for AppNameResolver {
    async fn list(&self) -> Result<Vec<RegisteredApp>, IdentityError> {
        Ok(Vec::new())
    }

    async fn resolve(&self, app_name: &str) -> Result<Option<AppIdentity>, IdentityError> {
        Ok(AppIdentity::new(app_name))
    }
}
