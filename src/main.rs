//! Binary entry point: parse the command line, route logs to a rolling file
//! (the terminal belongs to the UI), and hand control to the Ratatui loop.
use anyhow::{Context, Result};
use clap::Parser;
use course_catalog::{run_app, App, Cli, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory.
const LOG_FILE_NAME: &str = "course-catalog.log";

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    std::fs::create_dir_all(&config.log_dir).context("failed to create log directory")?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("course_catalog=info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(source = %config.source, "course-catalog v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(config.category_labels.clone());
    run_app(&mut app, &config.source)
}
