//! Tool execution result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Metadata;

/// Outcome of one tool call as the agent sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    /// Text handed back to the agent.
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default)]
    pub metadata: Metadata,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// A call that ran but did not achieve its goal.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error.into()),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = ToolResult::success("done");
        assert!(result.success);
        assert_eq!(result.content, "done");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_error() {
        let result = ToolResult::error("unknown selector=#missing");
        assert!(!result.success);
        assert!(result.content.is_empty());
        assert_eq!(result.error.as_deref(), Some("unknown selector=#missing"));
    }

    #[test]
    fn test_with_metadata() {
        let result = ToolResult::success("x")
            .with_metadata("selector", serde_json::json!("#a"))
            .with_metadata("count", serde_json::json!(3));
        assert_eq!(result.metadata.len(), 2);
        assert_eq!(result.metadata["count"], 3);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_value(ToolResult::success("x")).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["success"], true);
    }
}
