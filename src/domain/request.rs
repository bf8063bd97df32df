//! Toast request entity

use std::path::{Path, PathBuf};

use super::error::RequestError;
use super::markup::ToastFields;

/// Where the markup for a toast comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastSource {
    /// A caller-supplied markup document on disk
    MarkupFile(PathBuf),
    /// Fields for the generic template
    Fields(ToastFields),
}

impl ToastSource {
    /// Source from a markup file. The path must exist and be a file.
    pub fn markup_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RequestError::MissingMarkupFile(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(RequestError::NotAFile(path.to_path_buf()));
        }
        Ok(Self::MarkupFile(path.to_path_buf()))
    }
}

impl From<ToastFields> for ToastSource {
    fn from(fields: ToastFields) -> Self {
        Self::Fields(fields)
    }
}

/// Diagnostic output for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugOptions {
    /// Write stage diagnostics to stderr
    pub enabled: bool,
    /// Also append diagnostics to this file
    pub log_file: Option<PathBuf>,
}

impl DebugOptions {
    pub fn verbose() -> Self {
        Self {
            enabled: true,
            log_file: None,
        }
    }
}

/// Everything one pipeline invocation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub source: ToastSource,
    /// Display name of the app to show the toast under; `None` or empty
    /// selects the default identity.
    pub app_name: Option<String>,
    pub debug: DebugOptions,
}

impl ToastRequest {
    pub fn new(source: impl Into<ToastSource>) -> Self {
        Self {
            source: source.into(),
            app_name: None,
            debug: DebugOptions::default(),
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_debug(mut self, debug: DebugOptions) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_file_must_exist() {
        let err = ToastSource::markup_file("/definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, RequestError::MissingMarkupFile(_)));
    }

    #[test]
    fn markup_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ToastSource::markup_file(dir.path()).unwrap_err();
        assert!(matches!(err, RequestError::NotAFile(_)));
    }

    #[test]
    fn markup_file_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = ToastSource::markup_file(file.path()).unwrap();
        assert_eq!(source, ToastSource::MarkupFile(file.path().to_path_buf()));
    }

    #[test]
    fn request_builder() {
        let fields = ToastFields::new("Hello", "World").unwrap();
        let request = ToastRequest::new(fields)
            .with_app_name("Mail")
            .with_debug(DebugOptions::verbose());
        assert_eq!(request.app_name.as_deref(), Some("Mail"));
        assert!(request.debug.enabled);
        assert!(matches!(request.source, ToastSource::Fields(_)));
    }
}
