//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(config_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, config_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Current value of a key, formatted for display
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "app_name" => config.app_name.clone(),
        "debug" => config.debug.map(|b| b.to_string()),
        "log_file" => config.log_file.clone(),
        _ => None,
    }
}

/// Validate a value and store it under `key`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "app_name" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "App name must not be empty".to_string(),
                });
            }
            config.app_name = Some(value.to_string());
        }
        "debug" => {
            config.debug = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?);
        }
        "log_file" => {
            // An empty value clears the log file
            config.log_file = Some(value.to_string()).filter(|v| !v.is_empty());
        }
        _ => return check_key(key),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::UserConfigStore;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn apply_app_name() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "app_name", "Mail").unwrap();
        assert_eq!(config.app_name, Some("Mail".to_string()));
    }

    #[test]
    fn apply_rejects_blank_app_name() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "app_name", "  ").is_err());
        assert!(config.app_name.is_none());
    }

    #[test]
    fn apply_debug_requires_boolean() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "debug", "maybe").is_err());
        apply_value(&mut config, "debug", "yes").unwrap();
        assert_eq!(config.debug, Some(true));
    }

    #[test]
    fn apply_empty_log_file_clears_it() {
        let mut config = AppConfig {
            log_file: Some("toast.log".to_string()),
            ..Default::default()
        };
        apply_value(&mut config, "log_file", "").unwrap();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Valid keys: app_name, debug, log_file"));
    }

    #[test]
    fn config_value_formats_fields() {
        let config = AppConfig {
            debug: Some(false),
            ..Default::default()
        };
        assert_eq!(config_value(&config, "debug"), Some("false".to_string()));
        assert_eq!(config_value(&config, "app_name"), None);
    }

    #[tokio::test]
    async fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "app_name".to_string(),
                value: "Mail".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.app_name, Some("Mail".to_string()));
    }
}
