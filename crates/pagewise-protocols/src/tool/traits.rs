//! Tool trait definition.

use async_trait::async_trait;

use super::{ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;
use crate::types::RiskLevel;

/// An operation an agent can invoke with JSON parameters.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Reject parameters that cannot satisfy an object schema.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        let object_schema = self
            .definition()
            .parameters_schema
            .as_ref()
            .is_some_and(|schema| schema.get("type") == Some(&serde_json::json!("object")));
        if object_schema && !params.is_object() {
            return Err(ToolError::ValidationFailed(
                "Parameters must be an object".to_string(),
            ));
        }
        Ok(())
    }

    fn risk_level(&self) -> RiskLevel {
        self.definition().risk_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        definition: ToolDefinition,
    }

    impl EchoTool {
        fn new(schema: Option<serde_json::Value>) -> Self {
            let mut definition = ToolDefinition::new("echo", "Echo", "Echo the params back");
            if let Some(schema) = schema {
                definition = definition.with_parameters_schema(schema);
            }
            Self { definition }
        }
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(params.to_string()))
        }
    }

    #[test]
    fn test_validate_without_schema_accepts_anything() {
        let tool = EchoTool::new(None);
        assert!(tool.validate(&serde_json::json!("text")).is_ok());
    }

    #[test]
    fn test_validate_object_schema() {
        let tool = EchoTool::new(Some(serde_json::json!({"type": "object"})));
        assert!(tool.validate(&serde_json::json!({})).is_ok());
        for bad in [
            serde_json::json!([1, 2]),
            serde_json::json!(42),
            serde_json::Value::Null,
        ] {
            assert!(matches!(
                tool.validate(&bad),
                Err(ToolError::ValidationFailed(_))
            ));
        }
    }

    #[test]
    fn test_validate_non_object_schema() {
        let tool = EchoTool::new(Some(serde_json::json!({"type": "string"})));
        assert!(tool.validate(&serde_json::json!("text")).is_ok());
    }

    #[test]
    fn test_default_risk_level() {
        assert_eq!(EchoTool::new(None).risk_level(), RiskLevel::Low);
    }

    #[tokio::test]
    async fn test_execute() {
        let tool = EchoTool::new(None);
        let result = tool
            .execute(serde_json::json!({"a": 1}), ToolContext::new("session-1"))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.content, r#"{"a":1}"#);
    }
}
