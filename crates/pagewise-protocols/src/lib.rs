//! # Pagewise Protocols
//!
//! Interface definitions shared by the browser tools and their callers.
//!
//! - [`Tool`] - an agent-callable operation with a JSON parameter schema
//! - [`BrowserDriver`] - the narrow surface a real browser is reached through

pub mod driver;
pub mod error;
pub mod tool;
pub mod types;

pub use driver::{BrowserDriver, ClickTarget, DriverOutcome, OutcomeStatus};
pub use error::{DriverError, ToolError};
pub use tool::{AbortSignal, Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::{Metadata, RiskLevel};
