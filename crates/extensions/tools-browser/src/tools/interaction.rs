//! Interaction tools: clicks and text entry.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pagewise_protocols::{ClickTarget, RiskLevel, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use super::parse_params;
use crate::session::{BrowserSession, outcome_result};

#[derive(Debug, Deserialize)]
pub struct ClickParams {
    pub selector: String,
}

/// Click a button, link or arbitrary element.
///
/// The three variants differ only in the [`ClickTarget`] passed to the
/// driver, which decides how `selector` is resolved.
pub struct ClickTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
    target: ClickTarget,
}

impl ClickTool {
    pub fn button(session: Arc<BrowserSession>) -> Self {
        Self::new(
            session,
            ClickTarget::Button,
            ToolDefinition::new(
                "browser_button_click",
                "Browser Button Click",
                "Click a button identified by its text, id or a CSS selector.",
            ),
            "Button text, id or CSS selector",
        )
    }

    pub fn link(session: Arc<BrowserSession>) -> Self {
        Self::new(
            session,
            ClickTarget::Link,
            ToolDefinition::new(
                "browser_link_click",
                "Browser Link Click",
                "Click a link identified by its text, id or a CSS selector.",
            ),
            "Link text, id or CSS selector",
        )
    }

    pub fn element(session: Arc<BrowserSession>) -> Self {
        Self::new(
            session,
            ClickTarget::Element,
            ToolDefinition::new(
                "browser_element_click",
                "Browser Element Click",
                "Click any clickable element (div, span, list item) by CSS selector, id or text.",
            ),
            "CSS selector, id or text content of the element",
        )
    }

    fn new(session: Arc<BrowserSession>, target: ClickTarget, definition: ToolDefinition, hint: &str) -> Self {
        let definition = definition
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "selector": { "type": "string", "description": hint }
                },
                "required": ["selector"]
            }))
            .with_risk_level(RiskLevel::Medium);
        Self {
            definition,
            session,
            target,
        }
    }
}

pub(crate) async fn click(
    session: &BrowserSession,
    ctx: &ToolContext,
    target: ClickTarget,
    selector: &str,
) -> Result<ToolResult, ToolError> {
    debug!(correlation_id = %ctx.correlation_id, ?target, selector, "Clicking");
    let outcome = session
        .call(ctx, "click", session.driver().click(target, selector))
        .await?;
    Ok(outcome_result(outcome))
}

#[async_trait]
impl Tool for ClickTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: ClickParams = parse_params(params)?;
        click(&self.session, &ctx, self.target, &params.selector).await
    }
}

// ============================================================================
// Text field set
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TextFieldSetParams {
    pub selector: String,
    pub value: String,
}

/// Replace the contents of a text field or text area.
pub struct TextFieldSetTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl TextFieldSetTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_text_field_set",
            "Browser Text Field Set",
            "Enter text into an input field or text area, replacing what it held.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "selector": {
                    "type": "string",
                    "description": "CSS selector, id or name of the field"
                },
                "value": {
                    "type": "string",
                    "description": "The text to enter"
                }
            },
            "required": ["selector", "value"]
        }))
        .with_risk_level(RiskLevel::Medium);
        Self { definition, session }
    }
}

pub(crate) async fn text_field_set(
    session: &BrowserSession,
    ctx: &ToolContext,
    selector: &str,
    value: &str,
) -> Result<ToolResult, ToolError> {
    debug!(correlation_id = %ctx.correlation_id, selector, chars = value.chars().count(), "Setting text field");
    let outcome = session
        .call(ctx, "set_value", session.driver().set_value(selector, value))
        .await?;
    Ok(outcome_result(outcome))
}

#[async_trait]
impl Tool for TextFieldSetTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: TextFieldSetParams = parse_params(params)?;
        text_field_set(&self.session, &ctx, &params.selector, &params.value).await
    }
}
