//! Navigation tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pagewise_protocols::{RiskLevel, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use super::parse_params;
use crate::session::{BrowserSession, outcome_result};

#[derive(Debug, Deserialize)]
pub struct VisitParams {
    pub url: String,
}

/// Navigate the browser to a URL.
pub struct VisitTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl VisitTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_visit",
            "Browser Visit",
            "Navigate the browser to a specific URL.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "A URL (e.g. https://news.ycombinator.com)"
                }
            },
            "required": ["url"]
        }))
        .with_risk_level(RiskLevel::Medium);
        Self { definition, session }
    }
}

pub(crate) async fn visit(session: &BrowserSession, ctx: &ToolContext, url: &str) -> Result<ToolResult, ToolError> {
    debug!(correlation_id = %ctx.correlation_id, url, "Visiting page");
    let outcome = session.call(ctx, "navigate", session.driver().navigate(url)).await?;
    Ok(outcome_result(outcome).with_metadata("url", serde_json::json!(url)))
}

#[async_trait]
impl Tool for VisitTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: VisitParams = parse_params(params)?;
        visit(&self.session, &ctx, &params.url).await
    }
}
