//! CLI presenter for output formatting

use colored::*;

use crate::domain::identity::RegisteredApp;
use crate::domain::result_code::ResultCode;

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr; stdout only carries command output (markup,
/// app lists, config values and result codes) so it can be piped.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output the numeric result code of a pipeline run
    pub fn result_code(&self, code: ResultCode) {
        self.output(&code.code().to_string());
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a registered app
    pub fn app(&self, app: &RegisteredApp) {
        println!("{}", Self::format_app(app));
    }

    /// Format a registered app as `name<TAB>app id`
    pub fn format_app(app: &RegisteredApp) -> String {
        format!("{}\t{}", app.name, app.app_id)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
