use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::models;
use crate::prompt::{
    save_prompt, Complexity, PromptFormInput, PromptGenerator, SystemClipboard, Tone,
};

#[cfg(target_os = "linux")]
const COPY_NOTICE: &str =
    "Copying to clipboard; keeping it available until another application takes it over";
#[cfg(not(target_os = "linux"))]
const COPY_NOTICE: &str = "Prompt copied to clipboard";

/// Generate a prompt non-interactively
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Model id, see `promptcraft models`
    #[arg(short = 'm', long = "model")]
    pub model: String,

    /// Role the assistant should take
    #[arg(long = "role")]
    pub role: String,

    /// What the prompt should ask for
    #[arg(long = "task")]
    pub task: String,

    /// Area of expertise
    #[arg(long = "domain", default_value = "")]
    pub domain: String,

    /// Background information
    #[arg(long = "context", default_value = "")]
    pub context: String,

    #[arg(long = "tone", value_enum, default_value_t = Tone::default())]
    pub tone: Tone,

    #[arg(long = "complexity", value_enum, default_value_t = Complexity::default())]
    pub complexity: Complexity,

    /// Also save the prompt into this directory
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Also copy the prompt to the clipboard. On Linux the command then
    /// stays running until another application takes over the clipboard.
    #[arg(long = "copy")]
    pub copy: bool,

    /// Skip the simulated generation delay
    #[arg(long = "no-delay")]
    pub no_delay: bool,
}

impl GenerateCommand {
    pub async fn execute(&self, config: &Config) -> Result<()> {
        let model = models::lookup(&self.model)
            .ok_or_else(|| anyhow!("Model not found: {}", self.model))?;

        let input = self.form_input();
        input.validate()?;

        let delay = if self.no_delay {
            Duration::ZERO
        } else {
            config.generation_delay()
        };
        debug!("Generating for {} with delay {:?}", model.id, delay);
        let prompt = PromptGenerator::new(delay).start(input).wait().await?;

        println!("{}", prompt);

        if let Some(dir) = &self.output {
            let path = save_prompt(dir, model.name, &prompt)?;
            info!("Saved prompt to {}", path.display());
            eprintln!("Saved {}", path.display());
        }

        if self.copy {
            eprintln!("{}", COPY_NOTICE);
            tokio::task::spawn_blocking(move || SystemClipboard::new().set_text_and_wait(&prompt))
                .await??;
            debug!("Clipboard handed over");
        }

        Ok(())
    }

    fn form_input(&self) -> PromptFormInput {
        PromptFormInput::new()
            .with_role(self.role.as_str())
            .with_domain(self.domain.as_str())
            .with_task(self.task.as_str())
            .with_context(self.context.as_str())
            .with_tone(self.tone)
            .with_complexity(self.complexity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(model: &str, role: &str, task: &str) -> GenerateCommand {
        GenerateCommand {
            model: model.to_string(),
            role: role.to_string(),
            task: task.to_string(),
            domain: String::new(),
            context: String::new(),
            tone: Tone::default(),
            complexity: Complexity::default(),
            output: None,
            copy: false,
            no_delay: true,
        }
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected() {
        let err = command("gpt-4", "Analyst", "Summarize")
            .execute(&Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Model not found"));
    }

    #[tokio::test]
    async fn test_blank_role_is_rejected() {
        let err = command("shisa-v2", "   ", "Summarize")
            .execute(&Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("role"));
    }

    #[tokio::test]
    async fn test_saves_into_output_dir() {
        let dir = TempDir::new().unwrap();
        let mut cmd = command("llama4-maverick", "Analyst", "Summarize Q3");
        cmd.output = Some(dir.path().to_path_buf());

        cmd.execute(&Config::default()).await.unwrap();

        let saved =
            std::fs::read_to_string(dir.path().join("llama-4-maverick-prompt.txt")).unwrap();
        assert!(saved.starts_with("You are an expert Analyst specializing in general tasks."));
        assert!(saved.contains("Summarize Q3"));
    }

    #[test]
    fn test_copy_help_describes_clipboard_lifetime() {
        use crate::cli::Cli;
        use clap::CommandFactory;

        let mut command = Cli::command();
        let generate = command.find_subcommand_mut("generate").unwrap();
        let help = generate.render_long_help().to_string();
        assert!(help.contains("stays running until another application takes over"));
    }
}
