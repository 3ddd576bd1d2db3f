//! devtoolbox-keys - inspect and exercise the devtoolbox keyboard shortcuts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load keyboard settings and build the shortcut engine.
//! - List shortcuts, simulate single presses, or dispatch live terminal input.
//!
//! Does NOT handle:
//! - Shortcut semantics (see `crates/keyboard`).
//! - Settings file format or validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide defaults.
//! - `listen` logs to a file; every other command logs to stderr.

mod args;
mod clipboard;
mod commands;
mod engine;
mod error;
mod host;
mod logging;
mod metrics_exporter;
mod run;

use anyhow::Context;
use args::{Cli, Commands};
use clap::Parser;
use devtoolbox_config::{ConfigError, KeyboardSettings, SettingsLoader};
use error::{ExitCode, ExitCodeExt};
use metrics_exporter::MetricsExporter;
use run::run_command;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so env defaults can read .env values
    if let Err(e) = SettingsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();
    let listening = matches!(cli.command, Commands::Listen { .. });

    if !listening {
        logging::init_stderr();
    }

    let settings = match load_settings(&cli).context("Failed to load keyboard settings") {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    // The guard must outlive the listener so buffered log lines are flushed
    let log_guard = if listening {
        match logging::init_file(&settings.log_dir) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!(
                    "Failed to open log directory {}: {}",
                    settings.log_dir.display(),
                    e
                );
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::debug!(addr = %exporter.bind_addr(), "Metrics exporter ready");
                Some(exporter)
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let exit_code = match run_command(cli, settings).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    // process::exit skips destructors
    drop(log_guard);
    std::process::exit(exit_code.as_i32());
}

/// Merge settings: CLI flags > environment > settings file > defaults.
fn load_settings(cli: &Cli) -> Result<KeyboardSettings, ConfigError> {
    let mut loader = SettingsLoader::new();

    // Blank values are ignored to allow fallback to the env var
    if let Some(ref path) = cli.settings
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_settings_path(path.clone());
    }
    if let Some(platform) = cli.platform {
        loader = loader.with_platform(platform);
    }
    // --metrics-bind implies telemetry
    if cli.telemetry || cli.metrics_bind.is_some() {
        loader = loader.with_telemetry_enabled(true);
    }
    if let Some(ref dir) = cli.log_dir {
        loader = loader.with_log_dir(dir.clone());
    }

    loader.from_env()?.build()
}
