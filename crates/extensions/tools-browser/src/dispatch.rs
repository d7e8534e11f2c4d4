//! Single `browser` tool that routes on an `action` parameter.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use pagewise_protocols::{ClickTarget, RiskLevel, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::session::BrowserSession;
use crate::tools::{self, parse_params};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    Visit,
    PageInspect,
    UiInspect,
    SelectorInspect,
    ButtonClick,
    LinkClick,
    ElementClick,
    TextFieldSet,
    Screenshot,
}

impl BrowserAction {
    pub const ALL: [BrowserAction; 9] = [
        Self::Visit,
        Self::PageInspect,
        Self::UiInspect,
        Self::SelectorInspect,
        Self::ButtonClick,
        Self::LinkClick,
        Self::ElementClick,
        Self::TextFieldSet,
        Self::Screenshot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::PageInspect => "page_inspect",
            Self::UiInspect => "ui_inspect",
            Self::SelectorInspect => "selector_inspect",
            Self::ButtonClick => "button_click",
            Self::LinkClick => "link_click",
            Self::ElementClick => "element_click",
            Self::TextFieldSet => "text_field_set",
            Self::Screenshot => "screenshot",
        }
    }

    fn supported_list() -> String {
        Self::ALL.iter().map(Self::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for BrowserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserAction {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unsupported action: {}. Supported actions are: {}",
                    s,
                    Self::supported_list()
                )
            })
    }
}

#[derive(Debug, Deserialize)]
pub struct BrowserParams {
    pub action: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub context_size: Option<usize>,
    #[serde(default)]
    pub full_html: bool,
    #[serde(default)]
    pub text_content: Option<String>,
}

fn require<'a>(name: &str, value: &'a Option<String>) -> Result<&'a str, ToolError> {
    value
        .as_deref()
        .ok_or_else(|| ToolError::InvalidParameters(format!("{} parameter is required for this action", name)))
}

/// All browser actions behind one tool.
pub struct BrowserTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl BrowserTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let actions: Vec<&str> = BrowserAction::ALL.iter().map(BrowserAction::as_str).collect();
        let definition = ToolDefinition::new(
            "browser",
            "Browser",
            "Control a web browser. Actions: visit (url), page_inspect (full_html?, default summary), \
             ui_inspect (text_content, selector?), selector_inspect (selector, context_size?), \
             button_click / link_click / element_click (selector), text_field_set (selector, value), \
             screenshot.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": actions,
                    "description": "The browser action to perform"
                },
                "url": {
                    "type": "string",
                    "description": "URL to visit. Required for visit"
                },
                "selector": {
                    "type": "string",
                    "description": "CSS selector, id or text of the element. Required for selector_inspect, clicks and text_field_set; optional container for ui_inspect"
                },
                "value": {
                    "type": "string",
                    "description": "Text to enter. Required for text_field_set"
                },
                "context_size": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Parent elements shown by selector_inspect (default: 2)"
                },
                "full_html": {
                    "type": "boolean",
                    "description": "page_inspect returns full HTML instead of a summary"
                },
                "text_content": {
                    "type": "string",
                    "description": "Text to search for. Required for ui_inspect"
                }
            },
            "required": ["action"]
        }))
        .with_risk_level(RiskLevel::Medium);
        Self { definition, session }
    }
}

#[async_trait]
impl Tool for BrowserTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: BrowserParams = parse_params(params)?;
        let action = match params.action.parse::<BrowserAction>() {
            Ok(action) => action,
            Err(message) => return Ok(ToolResult::error(message)),
        };

        let session = self.session.as_ref();
        let result = match action {
            BrowserAction::Visit => tools::visit(session, &ctx, require("url", &params.url)?).await?,
            BrowserAction::PageInspect => tools::page_inspect(session, &ctx, params.full_html).await?,
            BrowserAction::UiInspect => {
                let text = require("text_content", &params.text_content)?;
                tools::ui_inspect(session, &ctx, text, params.selector.as_deref()).await?
            }
            BrowserAction::SelectorInspect => {
                let selector = require("selector", &params.selector)?;
                tools::selector_inspect(session, &ctx, selector, params.context_size).await?
            }
            BrowserAction::ButtonClick => {
                let selector = require("selector", &params.selector)?;
                tools::click(session, &ctx, ClickTarget::Button, selector).await?
            }
            BrowserAction::LinkClick => {
                let selector = require("selector", &params.selector)?;
                tools::click(session, &ctx, ClickTarget::Link, selector).await?
            }
            BrowserAction::ElementClick => {
                let selector = require("selector", &params.selector)?;
                tools::click(session, &ctx, ClickTarget::Element, selector).await?
            }
            BrowserAction::TextFieldSet => {
                let selector = require("selector", &params.selector)?;
                let value = require("value", &params.value)?;
                tools::text_field_set(session, &ctx, selector, value).await?
            }
            BrowserAction::Screenshot => tools::screenshot(session, &ctx).await?,
        };
        Ok(result.with_metadata("action", serde_json::json!(action.as_str())))
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
