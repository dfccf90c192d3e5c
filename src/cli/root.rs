use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use super::generate::GenerateCommand;
use super::models::ModelsCommand;
use crate::config::Config;
use crate::tui::{self, Route};
use crate::{init_logging, LogTarget};

/// PromptCraft - build structured prompts for your favourite model
#[derive(Parser, Debug)]
#[command(
    name = "promptcraft",
    version,
    about = "Build structured AI prompts from a short form",
    long_about = r#"PromptCraft lets you pick a model from the catalog, fill in a role, task and
context, and turns them into a ready-to-use prompt.

Examples:
  promptcraft                                  # Open the catalog
  promptcraft --route /build/shisa-v2          # Jump straight to a builder
  promptcraft models --json                    # List models as JSON
  promptcraft generate --model shisa-v2 --role "Data Analyst" --task "Summarize Q3""#
)]
pub struct Cli {
    /// Current working directory
    #[arg(short = 'c', long = "cwd", global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Route to open on start, e.g. / or /build/llama4-maverick
    #[arg(short = 'r', long = "route", default_value = "/")]
    pub route: Route,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available models
    Models(ModelsCommand),

    /// Generate a prompt without opening the interface
    Generate(GenerateCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // Change working directory if specified
        if let Some(cwd) = &self.cwd {
            std::env::set_current_dir(cwd).map_err(|e| {
                anyhow::anyhow!("Failed to change directory to {}: {}", cwd.display(), e)
            })?;
        }

        // Initialize configuration
        let config = Config::init().await?;
        config.validate()?;

        let target = match self.command {
            Some(_) => LogTarget::Stderr,
            None => LogTarget::File(&config.data_dir),
        };
        init_logging(self.debug, target)?;
        debug!("Configuration initialized: {:?}", config);

        match self.command {
            Some(Commands::Models(cmd)) => cmd.execute(),
            Some(Commands::Generate(cmd)) => cmd.execute(&config).await,
            None => {
                info!("Starting interactive mode at {}", self.route);
                tui::run(&config, self.route).await
            }
        }
    }
}
