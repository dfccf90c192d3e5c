use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod models;
mod prompt;
mod tui;

use cli::Cli;

/// Where log lines go
pub enum LogTarget<'a> {
    /// Headless commands
    Stderr,
    /// Interactive mode, so the alternate screen stays clean
    File(&'a Path),
}

#[tokio::main]
async fn main() {
    // Set up panic hook for graceful error recovery
    std::panic::set_hook(Box::new(|panic_info| {
        // Leave the TUI so the message is readable
        let _ = tui::reset_terminal();
        error!("Application panicked: {}", panic_info);
        eprintln!("promptcraft panicked: {}", panic_info);
        std::process::exit(1);
    }));

    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file found or error loading it: {}", e);
    }

    // Execute CLI command
    if let Err(e) = Cli::parse().execute().await {
        error!("Application error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the defaults.
pub fn init_logging(debug: bool, target: LogTarget<'_>) -> Result<()> {
    let default_filter = if debug { "promptcraft=debug" } else { "promptcraft=info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let path = dir.join("promptcraft.log");
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
