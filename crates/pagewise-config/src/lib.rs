//! # Pagewise Config
//!
//! TOML configuration for the Pagewise CLI and browser tools.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::{ConfigLoader, TIMEOUT_ENV_VAR};
pub use schema::{BrowserConfig, Config, LoggingConfig};
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
