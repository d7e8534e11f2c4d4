//! Small shared types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form metadata attached to definitions and results.
pub type Metadata = HashMap<String, serde_json::Value>;

/// How much damage a tool can do if an agent misuses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only inspection.
    #[default]
    Low,
    /// Changes page state (clicks, typing, navigation).
    Medium,
    High,
}
