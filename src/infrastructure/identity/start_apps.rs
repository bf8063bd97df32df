//! Start menu app lookup through PowerShell's Get-StartApps

use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::application::ports::{IdentityError, IdentityResolver};
use crate::domain::identity::RegisteredApp;

const LIST_APPS_SCRIPT: &str =
    "Get-StartApps | Select-Object Name, AppID | ConvertTo-Json -Compress";

/// Identity resolver backed by `Get-StartApps`.
///
/// Every call runs a fresh lookup; results are never cached.
pub struct StartAppsResolver {
    /// PowerShell executable to run
    program: String,
}

impl StartAppsResolver {
    /// Create a resolver using Windows PowerShell
    pub fn new() -> Self {
        Self {
            program: "powershell.exe".to_string(),
        }
    }

    /// Create with a custom PowerShell executable (e.g. `pwsh`)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Parse `ConvertTo-Json` output, which is empty for no apps, a bare
    /// object for one app and an array otherwise.
    fn parse_apps(output: &str) -> Result<Vec<RegisteredApp>, IdentityError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(RegisteredApp),
            Many(Vec<RegisteredApp>),
        }

        let output = output.trim();
        if output.is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<OneOrMany>(output) {
            Ok(OneOrMany::One(app)) => Ok(vec![app]),
            Ok(OneOrMany::Many(apps)) => Ok(apps),
            Err(e) => Err(IdentityError::InvalidOutput(e.to_string())),
        }
    }
}

impl Default for StartAppsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityResolver for StartAppsResolver {
    async fn list(&self) -> Result<Vec<RegisteredApp>, IdentityError> {
        let output = Command::new(&self.program)
            .args(["-NoProfile", "-NonInteractive", "-Command", LIST_APPS_SCRIPT])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    IdentityError::ToolNotFound(self.program.clone())
                } else {
                    IdentityError::LookupFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IdentityError::LookupFailed(format!(
                "{} exited with status {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Self::parse_apps(&String::from_utf8_lossy(&output.stdout))
    }
}
