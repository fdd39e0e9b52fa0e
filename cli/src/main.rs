//! CLI entrypoint for roster-admin
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod app;

use anyhow::{Result, anyhow};
use app::App;
use clap::Parser;
use roster_application::{
    DoctorRepository, LoadDashboardUseCase, MutationLogger, NoMutationLogger, SpecialtyDirectory,
};
use roster_infrastructure::{ConfigLoader, FileConfig, JsonlMutationLogger, connect};
use roster_presentation::{Cli, Command, OutputConfig};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.directory.as_deref())?;

    info!("Starting roster-admin");
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    output.apply_color();

    // === Dependency Injection ===
    let app = build_app(&config, output).await;
    let command = cli.command.unwrap_or(Command::Dashboard);

    Ok(app.run(command).await)
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging(verbose: u8, directory: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "roster-admin.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}

async fn build_app(config: &FileConfig, output: OutputConfig) -> App {
    let connection = connect(&config.store).await;

    let logger: Arc<dyn MutationLogger> = match config
        .logging
        .audit_log
        .as_ref()
        .and_then(|path| JsonlMutationLogger::open(path))
    {
        Some(logger) => {
            info!("Audit log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoMutationLogger),
    };

    let specialties =
        Arc::new(SpecialtyDirectory::new(connection.clone()).with_logger(Arc::clone(&logger)));
    let doctors =
        Arc::new(DoctorRepository::new(connection, Arc::clone(&specialties)).with_logger(logger));
    let dashboard = LoadDashboardUseCase::new(Arc::clone(&doctors), Arc::clone(&specialties))
        .with_config(config.dashboard.to_dashboard_config());

    App {
        doctors,
        specialties,
        dashboard,
        output,
    }
}
