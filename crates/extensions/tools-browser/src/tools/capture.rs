//! Screenshot tool.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use pagewise_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::session::BrowserSession;

/// Encode PNG bytes as a `data:` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Capture the visible page as a PNG data URL.
pub struct ScreenshotTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl ScreenshotTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_screenshot",
            "Browser Screenshot",
            "Take a screenshot of the current page, returned as a base64 PNG data URL.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {}
        }));
        Self { definition, session }
    }
}

pub(crate) async fn screenshot(session: &BrowserSession, ctx: &ToolContext) -> Result<ToolResult, ToolError> {
    let png = session
        .call(ctx, "screenshot", session.driver().screenshot())
        .await?;
    debug!(correlation_id = %ctx.correlation_id, bytes = png.len(), "Captured screenshot");
    Ok(ToolResult::success(png_data_url(&png)).with_metadata("bytes", serde_json::json!(png.len())))
}

#[async_trait]
impl Tool for ScreenshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        screenshot(&self.session, &ctx).await
    }
}
