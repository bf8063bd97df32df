//! App runners for the toast and app listing commands

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, IdentityResolver};
use crate::application::ShowToastUseCase;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::identity::RegisteredApp;
use crate::domain::request::ToastRequest;
use crate::domain::result_code::ResultCode;
use crate::infrastructure::{create_identity_resolver, create_platform};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Process exit status for a pipeline result
pub fn exit_code_for(code: ResultCode) -> ExitCode {
    if code.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Run the toast pipeline against the host platform and report its result code
pub async fn run_toast(request: ToastRequest) -> ExitCode {
    let presenter = Presenter::new();
    let use_case = ShowToastUseCase::new(create_identity_resolver(), create_platform());

    let code = match use_case.run(&request).await {
        Ok(receipt) => {
            presenter.success(&format!("Toast shown under {}", receipt.identity));
            ResultCode::Success
        }
        Err(e) => {
            presenter.error(&e.to_string());
            e.result_code()
        }
    };

    presenter.result_code(code);
    exit_code_for(code)
}

/// List registered apps, optionally filtered by name
pub async fn run_list_apps(filter: Option<&str>) -> ExitCode {
    let presenter = Presenter::new();
    let resolver = create_identity_resolver();

    let apps = match resolver.list().await {
        Ok(apps) => apps,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let apps = filter_apps(apps, filter);
    if apps.is_empty() {
        presenter.warn("No registered apps found");
    }
    for app in &apps {
        presenter.app(app);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Keep apps whose name contains `filter`, ignoring case
pub fn filter_apps(apps: Vec<RegisteredApp>, filter: Option<&str>) -> Vec<RegisteredApp> {
    match filter {
        Some(filter) if !filter.is_empty() => {
            let filter = filter.to_lowercase();
            apps.into_iter()
                .filter(|app| app.name.to_lowercase().contains(&filter))
                .collect()
        }
        _ => apps,
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    // Merge: defaults < file < cli
    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}
