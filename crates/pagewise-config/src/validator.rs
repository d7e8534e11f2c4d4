//! Configuration validation.

use crate::schema::Config;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Context sizes above this dump most of the document per match.
const CONTEXT_SIZE_WARN_ABOVE: usize = 10;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_logging(config, &mut result);
        Self::validate_browser(config, &mut result);
        result
    }

    /// Accepts `level` or comma-separated `target=level` directives.
    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        for directive in config.logging.level.split(',').map(str::trim) {
            let level = directive.rsplit('=').next().unwrap_or(directive);
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                result.add_error(ValidationError::new(
                    "logging.level",
                    format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
                ));
            }
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        if config.browser.timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "browser.timeout_secs",
                "timeout_secs must be greater than 0",
            ));
        }

        if config.browser.context_size > CONTEXT_SIZE_WARN_ABOVE {
            result.add_warning(ValidationWarning::new(
                "browser.context_size",
                format!(
                    "context_size {} is above {}, inspection output may be very long",
                    config.browser.context_size, CONTEXT_SIZE_WARN_ABOVE
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
