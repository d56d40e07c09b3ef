use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::{CronError, Result};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User-configurable settings for the cron-explain CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainConfig {
    /// Print the expression next to its translation (default: true)
    #[serde(default = "default_show_original")]
    pub show_original: bool,

    /// Rewrite scanned text inline instead of listing hits (default: false)
    #[serde(default)]
    pub show_inline: bool,

    /// Scan sources whose path contains any of these are skipped
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_show_original() -> bool {
    true
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            show_original: default_show_original(),
            show_inline: false,
            exclude: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

impl ExplainConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&dirs::config_path())
    }

    /// Load configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CronError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: ExplainConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Whether `source` matches an exclude entry (case-insensitive substring).
    pub fn is_excluded(&self, source: &str) -> bool {
        let source = source.to_lowercase();
        self.exclude
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .any(|pattern| source.contains(&pattern.to_lowercase()))
    }
}
