use crate::prompt::DEFAULT_GENERATION_DELAY;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const MAX_GENERATION_DELAY_MS: u64 = 60_000;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated generation latency in milliseconds
    pub generation_delay_ms: u64,

    /// Where saved prompts are written
    pub download_dir: PathBuf,

    /// Directory for the log file
    pub data_dir: PathBuf,

    /// UI tick interval in milliseconds
    pub tick_rate_ms: u64,

    /// Enable mouse capture in the TUI
    pub mouse_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_delay_ms: DEFAULT_GENERATION_DELAY.as_millis() as u64,
            download_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            data_dir: dirs::data_local_dir()
                .map(|dir| dir.join("promptcraft"))
                .unwrap_or_else(|| PathBuf::from("./.promptcraft")),
            tick_rate_ms: 100,
            mouse_enabled: false,
        }
    }
}

/// Values a config file may set; absent keys leave the current value alone
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    generation_delay_ms: Option<u64>,
    download_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    tick_rate_ms: Option<u64>,
    mouse_enabled: Option<bool>,
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        // Try to load from configuration files
        if let Some(path) = Self::find_config_file() {
            debug!("Loading configuration from: {}", path.display());
            let file_config = Self::load_from_file(&path).await?;
            config.merge_with(file_config);
        }

        // Environment wins over files
        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Overlay `PROMPTCRAFT_*` values; unparseable numbers are ignored
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let number = |key: &str| var(key).and_then(|value| value.trim().parse::<u64>().ok());

        if let Some(delay) = number("PROMPTCRAFT_DELAY_MS") {
            self.generation_delay_ms = delay;
        }

        if let Some(dir) = var("PROMPTCRAFT_DOWNLOAD_DIR") {
            self.download_dir = PathBuf::from(dir);
        }

        if let Some(dir) = var("PROMPTCRAFT_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(tick) = number("PROMPTCRAFT_TICK_RATE_MS") {
            self.tick_rate_ms = tick;
        }

        if let Some(mouse) = var("PROMPTCRAFT_MOUSE") {
            self.mouse_enabled = mouse.trim().eq_ignore_ascii_case("true");
        }
    }

    /// First existing config file, in priority order:
    /// 1. ./.promptcraft.json
    /// 2. ./promptcraft.json
    /// 3. $CONFIG_DIR/promptcraft/promptcraft.json
    fn find_config_file() -> Option<PathBuf> {
        let mut config_paths = vec![
            PathBuf::from("./.promptcraft.json"),
            PathBuf::from("./promptcraft.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("promptcraft").join("promptcraft.json"));
        }

        config_paths.into_iter().find(|path| path.exists())
    }

    async fn load_from_file(path: &Path) -> Result<FileConfig> {
        let content = tokio::fs::read_to_string(path).await?;
        let config = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    fn merge_with(&mut self, other: FileConfig) {
        if let Some(delay) = other.generation_delay_ms {
            self.generation_delay_ms = delay;
        }
        if let Some(dir) = other.download_dir {
            self.download_dir = dir;
        }
        if let Some(dir) = other.data_dir {
            self.data_dir = dir;
        }
        if let Some(tick) = other.tick_rate_ms {
            self.tick_rate_ms = tick;
        }
        if let Some(mouse) = other.mouse_enabled {
            self.mouse_enabled = mouse;
        }
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(anyhow::anyhow!("tick_rate_ms must be greater than 0"));
        }

        if self.generation_delay_ms > MAX_GENERATION_DELAY_MS {
            return Err(anyhow::anyhow!(
                "generation_delay_ms must be at most {}",
                MAX_GENERATION_DELAY_MS
            ));
        }

        if self.download_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("download_dir must not be empty"));
        }

        Ok(())
    }
}
