//! Tool definition types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Metadata, RiskLevel};

/// Name, description and parameter schema of a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Identifier the agent calls the tool by, e.g. `browser_visit`.
    pub id: String,

    pub name: String,

    pub description: String,

    /// JSON Schema for the parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,

    #[serde(default)]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub metadata: Metadata,
}

impl ToolDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters_schema: None,
            risk_level: RiskLevel::Low,
            metadata: HashMap::new(),
        }
    }

    pub fn with_parameters_schema(mut self, schema: serde_json::Value) -> Self {
        self.parameters_schema = Some(schema);
        self
    }

    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    /// Tool description in the shape LLM tool-use APIs expect.
    pub fn to_llm_tool(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.id,
            "description": self.description,
            "input_schema": self.parameters_schema.clone().unwrap_or_else(|| serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let def = ToolDefinition::new("browser_visit", "Visit", "Navigate to a URL")
            .with_parameters_schema(serde_json::json!({"type": "object"}))
            .with_risk_level(RiskLevel::Medium);
        assert_eq!(def.id, "browser_visit");
        assert_eq!(def.risk_level, RiskLevel::Medium);
        assert!(def.parameters_schema.is_some());
        assert!(def.metadata.is_empty());
    }

    #[test]
    fn test_to_llm_tool_with_schema() {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {"url": {"type": "string"}},
            "required": ["url"]
        });
        let def = ToolDefinition::new("browser_visit", "Visit", "Navigate").with_parameters_schema(schema.clone());
        let tool = def.to_llm_tool();
        assert_eq!(tool["name"], "browser_visit");
        assert_eq!(tool["description"], "Navigate");
        assert_eq!(tool["input_schema"], schema);
    }

    #[test]
    fn test_to_llm_tool_without_schema() {
        let tool = ToolDefinition::new("browser_screenshot", "Screenshot", "Capture").to_llm_tool();
        assert_eq!(tool["input_schema"]["type"], "object");
        assert_eq!(tool["input_schema"]["required"], serde_json::json!([]));
    }

    #[test]
    fn test_serde_skips_missing_schema() {
        let json = serde_json::to_value(ToolDefinition::new("a", "A", "desc")).unwrap();
        assert!(json.get("parameters_schema").is_none());
        assert_eq!(json["risk_level"], "low");
    }
}
