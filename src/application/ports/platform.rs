//! Toast platform port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::identity::AppIdentity;
use crate::domain::markup::MarkupDocument;

/// Platform notification errors
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    #[error("Failed to initialize notification runtime: {0}")]
    InitFailed(String),

    #[error("Failed to bind {facility}: {message}")]
    BindFailed {
        facility: &'static str,
        message: String,
    },

    #[error("Failed to show notification: {0}")]
    ShowFailed(String),

    #[error("Notification task failed: {0}")]
    TaskFailed(String),
}

/// Port for the host notification system.
///
/// The three calls are made in order by the toast pipeline; `show`
/// returns once the platform accepted the request, not when the toast
/// is rendered or dismissed.
#[async_trait]
pub trait ToastPlatform: Send + Sync {
    /// Prepare the runtime the notification APIs need.
    async fn initialize(&self) -> Result<(), PlatformError>;

    /// Bind the notification manager, the notification constructor and
    /// the platform markup parser.
    async fn bind(&self) -> Result<(), PlatformError>;

    /// Request display of a document under an app identity.
    async fn show(
        &self,
        document: &MarkupDocument,
        identity: &AppIdentity,
    ) -> Result<(), PlatformError>;
}

/// Blanket implementation for boxed platform types
#[async_trait]
impl ToastPlatform for Box<dyn ToastPlatform> {
    async fn initialize(&self) -> Result<(), PlatformError> {
        self.as_ref().initialize().await
    }

    async fn bind(&self) -> Result<(), PlatformError> {
        self.as_ref().bind().await
    }

    async fn show(
        &self,
        document: &MarkupDocument,
        identity: &AppIdentity,
    ) -> Result<(), PlatformError> {
        self.as_ref().show(document, identity).await
    }
}
