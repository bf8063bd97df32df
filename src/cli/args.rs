//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::error::RequestError;
use crate::domain::markup::ToastFields;
use crate::domain::request::ToastSource;

/// toastmaker - Windows 10 toast notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "toastmaker")]
#[command(version)]
#[command(about = "Show Windows 10 toast notifications from markup or plain fields")]
#[command(long_about = None)]
pub struct Cli {
    /// Display name of the app to show the toast under (default: Windows PowerShell)
    #[arg(short = 'a', long, global = true, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Print pipeline diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Append pipeline diagnostics to a file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a toast from a markup document
    Xml {
        /// Path to the toast markup document
        #[arg(value_name = "PATH", value_parser = existing_markup_file)]
        path: PathBuf,
    },
    /// Show a toast built from plain fields
    Text {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Print the markup built from plain fields without showing it
    Render {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// List apps toasts can be shown under
    Apps {
        /// Only list apps whose name contains this text (case-insensitive)
        #[arg(short, long, value_name = "TEXT")]
        filter: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Fields of the generic toast template
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    /// First text line
    #[arg(short, long, value_parser = non_empty)]
    pub title: String,

    /// Second text line
    #[arg(short, long, value_parser = non_empty)]
    pub body: String,

    /// Attribution line shown below the body
    #[arg(long, value_name = "TEXT")]
    pub attribution: Option<String>,

    /// Circular logo shown in place of the app icon
    #[arg(long, value_name = "URI")]
    pub logo: Option<String>,

    /// Hero image shown across the top
    #[arg(long, value_name = "URI")]
    pub hero: Option<String>,

    /// Inline image shown below the text
    #[arg(long = "image", value_name = "URI")]
    pub inline_image: Option<String>,
}

impl FieldArgs {
    /// Convert to template fields
    pub fn to_fields(&self) -> Result<ToastFields, RequestError> {
        Ok(ToastFields::new(&self.title, &self.body)?
            .attribution(self.attribution.clone().unwrap_or_default())
            .logo(self.logo.clone().unwrap_or_default())
            .hero(self.hero.clone().unwrap_or_default())
            .inline_image(self.inline_image.clone().unwrap_or_default()))
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "debug", "log_file"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

fn existing_markup_file(value: &str) -> Result<PathBuf, String> {
    ToastSource::markup_file(value)
        .map(|_| PathBuf::from(value))
        .map_err(|e| e.to_string())
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_xml_command() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["toastmaker", "xml", path]);
        assert!(cli.app_name.is_none());
        assert!(!cli.debug);
        assert!(matches!(cli.command, Commands::Xml { path: p } if p == file.path()));
    }

    #[test]
    fn cli_rejects_missing_markup_file() {
        let result = Cli::try_parse_from(["toastmaker", "xml", "/no/such/toast.xml"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn cli_parses_text_command() {
        let cli = Cli::parse_from([
            "toastmaker",
            "text",
            "--title",
            "Hello",
            "--body",
            "World",
            "--hero",
            "https://example.com/hero.png",
        ]);
        let Commands::Text { fields } = cli.command else {
            panic!("Expected Text command");
        };
        assert_eq!(fields.title, "Hello");
        assert_eq!(fields.body, "World");
        assert_eq!(fields.hero.as_deref(), Some("https://example.com/hero.png"));
        assert!(fields.logo.is_none());
    }

    #[test]
    fn cli_rejects_empty_title() {
        let result = Cli::try_parse_from(["toastmaker", "text", "-t", "", "-b", "World"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_body() {
        let result = Cli::try_parse_from(["toastmaker", "text", "-t", "Hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "toastmaker",
            "text",
            "-t",
            "Hello",
            "-b",
            "World",
            "--app-name",
            "Mail",
            "--debug",
            "--log-file",
            "toast.log",
        ]);
        assert_eq!(cli.app_name.as_deref(), Some("Mail"));
        assert!(cli.debug);
        assert_eq!(cli.log_file, Some(PathBuf::from("toast.log")));
    }

    #[test]
    fn cli_parses_apps_filter() {
        let cli = Cli::parse_from(["toastmaker", "apps", "--filter", "power"]);
        assert!(matches!(cli.command, Commands::Apps { filter: Some(ref f) } if f == "power"));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["toastmaker", "config", "set", "app_name", "Mail"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "app_name");
            assert_eq!(value, "Mail");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn field_args_convert_to_fields() {
        let args = FieldArgs {
            title: "Hello".to_string(),
            body: "World".to_string(),
            attribution: Some("via CI".to_string()),
            logo: None,
            hero: None,
            inline_image: Some("file:///C:/chart.png".to_string()),
        };
        let fields = args.to_fields().unwrap();
        assert_eq!(fields.title(), "Hello");
        assert_eq!(fields.attribution, "via CI");
        assert_eq!(fields.logo, "");
        assert_eq!(fields.inline_image, "file:///C:/chart.png");
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("app_name"));
        assert!(is_valid_config_key("debug"));
        assert!(is_valid_config_key("log_file"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
