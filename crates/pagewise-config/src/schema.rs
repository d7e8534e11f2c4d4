//! Configuration schema definitions.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

impl Config {
    /// `~/.config/pagewise/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pagewise").join("config.toml"))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// When set, logs are also written to a daily rolling file here.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Browser tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Upper bound on a single driver call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Parent levels shown by selector inspection when the caller gives none.
    #[serde(default = "default_context_size")]
    pub context_size: usize,
}

impl BrowserConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            context_size: default_context_size(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_context_size() -> usize {
    2
}
