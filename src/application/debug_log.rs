//! Per-invocation diagnostic output

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::*;
use thiserror::Error;

use crate::domain::request::DebugOptions;

/// Error when the diagnostic channel cannot be set up
#[derive(Debug, Error)]
pub enum DebugSetupError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DebugSetup,
    Initialize,
    Bind,
    ResolveIdentity,
    LoadMarkup,
    Display,
}

impl Stage {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DebugSetup => "debug",
            Self::Initialize => "init",
            Self::Bind => "bind",
            Self::ResolveIdentity => "identity",
            Self::LoadMarkup => "markup",
            Self::Display => "display",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Diagnostic channel owned by one pipeline invocation.
///
/// Silent unless enabled. Verbosity lives here instead of in process
/// state, so concurrent or repeated invocations never see each other's
/// settings.
#[derive(Debug, Default)]
pub struct DebugLog {
    enabled: bool,
    file: Option<LogFile>,
    /// Set after the first failed file write; later lines go to stderr only
    write_failed: AtomicBool,
}

#[derive(Debug)]
struct LogFile {
    path: PathBuf,
    file: File,
}

impl DebugLog {
    /// Build the log described by `options`, opening the log file in
    /// append mode when one is given.
    pub fn open(options: &DebugOptions) -> Result<Self, DebugSetupError> {
        let file = match &options.log_file {
            Some(path) => Some(LogFile {
                path: path.clone(),
                file: OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| DebugSetupError::LogFile {
                        path: path.clone(),
                        source,
                    })?,
            }),
            None => None,
        };

        Ok(Self {
            enabled: options.enabled || file.is_some(),
            file,
            write_failed: AtomicBool::new(false),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a message for a stage
    pub fn stage(&self, stage: Stage, message: &str) {
        if !self.enabled {
            return;
        }

        eprintln!(
            "{} {} {}",
            "·".dimmed(),
            format!("[{stage}]").cyan(),
            message.dimmed()
        );

        if let Some(log_file) = &self.file {
            self.append(log_file, &format!("[{stage}] {message}"));
        }
    }

    /// Whether a write to the log file has failed
    pub fn write_failed(&self) -> bool {
        self.write_failed.load(Ordering::Relaxed)
    }

    fn append(&self, log_file: &LogFile, line: &str) {
        if self.write_failed() {
            return;
        }
        if let Err(e) = writeln!(&log_file.file, "{line}") {
            self.write_failed.store(true, Ordering::Relaxed);
            eprintln!(
                "{} {}",
                "⚠".yellow(),
                format!(
                    "Failed to write log file {}: {e}; further diagnostics go to stderr only",
                    log_file.path.display()
                )
            );
        }
    }

    /// Record a failure with its source chain
    pub fn failure(&self, stage: Stage, error: &(dyn std::error::Error + 'static)) {
        if !self.enabled {
            return;
        }

        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!(" (caused by: {cause})"));
            source = cause.source();
        }
        self.stage(stage, &format!("failed: {message}"));
    }
}
