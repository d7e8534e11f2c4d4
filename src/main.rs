//! Pagewise - page digests and stable selectors for browser-driving agents.
//!
//! Main entry point for the Pagewise CLI. Every command runs the browser
//! tools against a local HTML file.

mod cli;
mod commands;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pagewise_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig, ValidationResult};

use crate::cli::Cli;

/// Console logging on stderr, plus a daily file when `logging.directory` is set.
///
/// `RUST_LOG` wins over the configured level. The returned guard flushes the
/// file writer on drop.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("Invalid log level '{}'", logging.level))?,
    };

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("pagewise")
                .filename_suffix("log")
                .max_log_files(14)
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Load and validate configuration. Validation warnings are returned for
/// logging once tracing is up.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, ValidationResult)> {
    let config = ConfigLoader::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    let validation = ConfigValidator::validate(&config);
    if !validation.is_valid() {
        let problems: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        bail!("Invalid configuration:\n  {}", problems.join("\n  "));
    }
    Ok((config, validation))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, validation) = load_config(&cli)?;
    let _guard = init_tracing(&config.logging)?;
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    debug!(?config, "Configuration loaded");

    match commands::execute(cli.command, &config).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Command failed");
            Err(e)
        }
    }
}
