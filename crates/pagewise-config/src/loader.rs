//! Configuration loader.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variable overriding `browser.timeout_secs`.
pub const TIMEOUT_ENV_VAR: &str = "PAGEWISE_BROWSER_TIMEOUT";

static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env reference regex"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading config");
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = toml::from_str(&expanded)?;
        if let Some(directory) = config.logging.directory.take() {
            let expanded = Self::expand_path(&directory.to_string_lossy());
            config.logging.directory = Some(expanded.into());
        }
        Self::apply_timeout_override(&mut config, std::env::var(TIMEOUT_ENV_VAR).ok())?;
        Ok(config)
    }

    /// Load `path` when given, else the default location if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Config::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                let mut config = Config::default();
                Self::apply_timeout_override(&mut config, std::env::var(TIMEOUT_ENV_VAR).ok())?;
                Ok(config)
            }
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_REFERENCE.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    fn apply_timeout_override(config: &mut Config, value: Option<String>) -> Result<(), ConfigError> {
        let Some(value) = value else {
            return Ok(());
        };
        let secs = value.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
            field: TIMEOUT_ENV_VAR.to_string(),
            message: e.to_string(),
        })?;
        config.browser.timeout_secs = secs;
        Ok(())
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}
