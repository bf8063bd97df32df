//! toastmaker CLI entry point

use std::process::ExitCode;

use clap::Parser;

use toastmaker::cli::{
    app::{load_merged_config, run_list_apps, run_toast, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use toastmaker::domain::config::AppConfig;
use toastmaker::domain::request::{ToastRequest, ToastSource};
use toastmaker::domain::result_code::ResultCode;
use toastmaker::infrastructure::UserConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = UserConfigStore::new();

    let source = match cli.command {
        Commands::Config { action } => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Commands::Render { fields } => {
            return match fields.to_fields() {
                Ok(fields) => {
                    presenter.output(&fields.to_document().to_xml());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
            };
        }
        Commands::Apps { filter } => return run_list_apps(filter.as_deref()).await,
        Commands::Xml { path } => ToastSource::markup_file(&path),
        Commands::Text { fields } => fields.to_fields().map(ToastSource::from),
    };

    let source = match source {
        Ok(source) => source,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: cli.app_name,
        debug: if cli.debug { Some(true) } else { None },
        log_file: cli.log_file.map(|p| p.to_string_lossy().into_owned()),
    };

    // Merge config
    let config = match load_merged_config(&store, cli_config).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.result_code(ResultCode::ModuleLoadFailed);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let request = ToastRequest::new(source)
        .with_app_name(config.app_name_or_default())
        .with_debug(config.debug_options());

    run_toast(request).await
}
