//! Application identity port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::identity::{AppIdentity, RegisteredApp};

/// Identity lookup errors.
///
/// These describe failures of the lookup mechanism itself. A name with no
/// registered app is not an error; resolvers return `Ok(None)` for it.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("App lookup failed: {0}")]
    LookupFailed(String),

    #[error("Unexpected app lookup output: {0}")]
    InvalidOutput(String),
}

/// Port for resolving app display names to identity tokens
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// List every registered app.
    async fn list(&self) -> Result<Vec<RegisteredApp>, IdentityError>;

    /// Resolve a display name to the identity of the app with exactly
    /// that name.
    ///
    /// # Returns
    /// `Ok(None)` when no registered app has that name
    async fn resolve(&self, app_name: &str) -> Result<Option<AppIdentity>, IdentityError> {
        let apps = self.list().await?;
        Ok(apps
            .into_iter()
            .find(|app| app.name == app_name)
            .and_then(|app| AppIdentity::new(app.app_id)))
    }
}

/// Blanket implementation for boxed resolver types
#[async_trait]
impl IdentityResolver for Box<dyn IdentityResolver> {
    async fn list(&self) -> Result<Vec<RegisteredApp>, IdentityError> {
        self.as_ref().list().await
    }

    async fn resolve(&self, app_name: &str) -> Result<Option<AppIdentity>, IdentityError> {
        self.as_ref().resolve(app_name).await
    }
}
