//! Application identity value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name resolved when the caller does not ask for a specific app.
///
/// Every Windows 10 installation registers the PowerShell host under this
/// name, so toasts without an explicit app appear under its identity.
pub const DEFAULT_APP_NAME: &str = "Windows PowerShell";

/// Platform identity token a toast is displayed under
/// (an AppUserModelID on Windows).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppIdentity(String);

impl AppIdentity {
    /// Wrap a token. Blank tokens are not identities.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered application as reported by the identity lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredApp {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "AppID")]
    pub app_id: String,
}

/// Pick the app name to resolve: the override, or the default when the
/// override is absent or empty.
pub fn requested_app_name(app_name: Option<&str>) -> &str {
    match app_name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_APP_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_not_an_identity() {
        assert!(AppIdentity::new("").is_none());
        assert!(AppIdentity::new("   ").is_none());
    }

    #[test]
    fn identity_keeps_token() {
        let id = AppIdentity::new("Microsoft.WindowsTerminal_8wekyb3d8bbwe!App").unwrap();
        assert_eq!(id.as_str(), "Microsoft.WindowsTerminal_8wekyb3d8bbwe!App");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn requested_name_defaults() {
        assert_eq!(requested_app_name(None), DEFAULT_APP_NAME);
        assert_eq!(requested_app_name(Some("")), DEFAULT_APP_NAME);
        assert_eq!(requested_app_name(Some("Mail")), "Mail");
    }
}
