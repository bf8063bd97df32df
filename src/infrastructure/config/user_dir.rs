//! Config store in the per-user configuration directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "toastmaker";
const FILE_NAME: &str = "config.toml";

/// How an existing settings file is treated on write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Replace,
    CreateNew,
}

/// TOML settings file under the platform config directory
/// (`%APPDATA%` on Windows, `$XDG_CONFIG_HOME` on Linux).
///
/// Presence is decided by the filesystem call itself, never by a
/// separate existence check.
pub struct UserConfigStore {
    path: PathBuf,
}

impl UserConfigStore {
    /// Store at `<config_dir>/toastmaker/config.toml`, or relative to the
    /// working directory when the platform has no config directory
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_default();
        Self::with_path(base.join(APP_DIR).join(FILE_NAME))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File contents, or `None` when there is no file
    async fn read(&self) -> Result<Option<String>, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::ReadError(format!("{}: {e}", self.path.display()))),
        }
    }

    async fn write(&self, config: &AppConfig, mode: WriteMode) -> Result<(), ConfigError> {
        let content = encode(config)?;
        let write_error = |e: std::io::Error| {
            ConfigError::WriteError(format!("{}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        match mode {
            WriteMode::Replace => options.create(true).truncate(true),
            WriteMode::CreateNew => options.create_new(true),
        };

        let mut file = options.open(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                ConfigError::AlreadyExists(self.path.display().to_string())
            } else {
                write_error(e)
            }
        })?;

        file.write_all(content.as_bytes()).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)
    }
}

impl Default for UserConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn encode(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
}

#[async_trait]
impl ConfigStore for UserConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match self.read().await? {
            Some(content) => decode(&content),
            None => Ok(AppConfig::empty()),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.write(config, WriteMode::Replace).await
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn init(&self) -> Result<(), ConfigError> {
        self.write(&AppConfig::defaults(), WriteMode::CreateNew).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_config_dir() {
        let store = UserConfigStore::new();
        assert!(store.path().ends_with(Path::new("toastmaker").join("config.toml")));
    }

    #[test]
    fn custom_path() {
        let store = UserConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), Path::new("/custom/path/config.toml"));
    }

    #[test]
    fn decode_flat_format() {
        let content = r#"
app_name = "Mail"
debug = true
log_file = "C:/Temp/toast.log"
"#;

        let config = decode(content).unwrap();
        assert_eq!(config.app_name, Some("Mail".to_string()));
        assert_eq!(config.debug, Some(true));
        assert_eq!(config.log_file, Some("C:/Temp/toast.log".to_string()));
    }

    #[test]
    fn decode_rejects_wrong_types() {
        let err = decode("debug = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn unreadable_path_is_a_read_error() {
        // A directory where the file should be is not "missing"
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path().join("nested").join("config.toml"));
        let config = AppConfig {
            app_name: Some("Mail".to_string()),
            debug: Some(true),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn save_replaces_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&AppConfig {
                app_name: Some("A much longer application name".to_string()),
                log_file: Some("C:/Temp/toast.log".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let short = AppConfig {
            debug: Some(false),
            ..Default::default()
        };
        store.save(&short).await.unwrap();
        assert_eq!(store.load().await.unwrap(), short);
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());
        assert!(matches!(
            store.init().await.unwrap_err(),
            ConfigError::AlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn init_keeps_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_name = \"Mail\"\n").unwrap();

        let store = UserConfigStore::with_path(&path);
        assert!(store.init().await.is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "app_name = \"Mail\"\n"
        );
    }
}
