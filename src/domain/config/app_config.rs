//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::identity::DEFAULT_APP_NAME;
use crate::domain::request::DebugOptions;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name of the app toasts are shown under
    pub app_name: Option<String>,
    /// Write pipeline diagnostics to stderr
    pub debug: Option<bool>,
    /// Append pipeline diagnostics to this file
    pub log_file: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            debug: Some(false),
            log_file: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            debug: other.debug.or(self.debug),
            log_file: other.log_file.or(self.log_file),
        }
    }

    /// Get the app name, or the default identity name if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get debug setting, or false if not set
    pub fn debug_or_default(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Debug options for a pipeline invocation.
    ///
    /// A configured log file turns diagnostics on even without `debug`.
    pub fn debug_options(&self) -> DebugOptions {
        let log_file = self
            .log_file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        DebugOptions {
            enabled: self.debug_or_default() || log_file.is_some(),
            log_file,
        }
    }
}
