//! Configuration port interface

use async_trait::async_trait;
use std::path::Path;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted toastmaker settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored settings.
    ///
    /// A missing file is not an error; it loads as an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored settings.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file.
    fn path(&self) -> &Path;

    /// Write the default settings. Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
