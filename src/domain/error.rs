//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when a toast request violates its input preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Markup file does not exist: {}", .0.display())]
    MissingMarkupFile(PathBuf),

    #[error("Markup path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("The {0} must not be empty")]
    EmptyField(&'static str),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
