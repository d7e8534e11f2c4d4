//! Read-only inspection tools: page summary, text search, CSS query.
//!
//! Each tool fetches the HTML once, then runs the DOM engine synchronously.
//! The parsed document never outlives the function that built it, so tool
//! futures stay `Send`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use pagewise_dom::{
    DomError, classify_for_data_entry, find_elements_by_text, format_element_groups,
    format_selector_matches, generate_stable_selectors, no_selector_matches, no_text_matches,
    prepare_document, summarize_page,
};
use pagewise_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use super::parse_params;
use crate::session::BrowserSession;

/// Cleaned HTML, or the page digest.
pub fn inspect_page(html: &str, full_html: bool) -> String {
    let document = prepare_document(html);
    if full_html {
        document.to_html()
    } else {
        summarize_page(&document)
    }
}

/// Elements mentioning `text`, grouped for data entry.
pub fn inspect_text(html: &str, text: &str, within: Option<&str>) -> Result<String, DomError> {
    let document = prepare_document(html);
    let found = find_elements_by_text(&document, text, within)?;
    if found.is_empty() {
        return Ok(no_text_matches(text));
    }
    let groups = classify_for_data_entry(&found, text);
    Ok(format_element_groups(&groups, found.len(), text))
}

/// Elements matching a CSS selector with their enclosing tags.
pub fn inspect_selector(html: &str, selector: &str, context_size: usize) -> Result<String, DomError> {
    let document = prepare_document(html);
    let matches = document.select(selector)?;
    if matches.is_empty() {
        return Ok(no_selector_matches(selector));
    }
    Ok(format_selector_matches(&matches, selector, context_size))
}

/// Stable selector candidates for every element matching `selector`.
pub fn list_stable_selectors(html: &str, selector: &str) -> Result<String, DomError> {
    let document = prepare_document(html);
    let matches = document.select(selector)?;
    if matches.is_empty() {
        return Ok(no_selector_matches(selector));
    }

    let mut output = String::new();
    for (index, element) in matches.iter().enumerate() {
        output.push_str(&format!("Element {}: {}\n", index + 1, element.start_tag()));
        let selectors = generate_stable_selectors(element);
        if selectors.is_empty() {
            output.push_str("  (no stable selectors)\n");
        }
        for selector in selectors {
            output.push_str(&format!("  - {}\n", selector));
        }
    }
    Ok(output)
}

fn invalid_query(error: DomError) -> ToolError {
    ToolError::InvalidParameters(error.to_string())
}

// ============================================================================
// Page inspect
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PageInspectParams {
    #[serde(default)]
    pub full_html: bool,
}

/// Summarize the current page, or return its cleaned HTML.
pub struct PageInspectTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl PageInspectTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_page_inspect",
            "Browser Page Inspect",
            "Summarize the fields, actions and navigation of the current page, or return its HTML without scripts and styles.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "full_html": {
                    "type": "boolean",
                    "description": "Return the full HTML instead of a summary (default: false)"
                }
            }
        }));
        Self { definition, session }
    }
}

pub(crate) async fn page_inspect(
    session: &BrowserSession,
    ctx: &ToolContext,
    full_html: bool,
) -> Result<ToolResult, ToolError> {
    debug!(correlation_id = %ctx.correlation_id, full_html, "Inspecting page");
    let html = session.page_html(ctx).await?;
    Ok(ToolResult::success(inspect_page(&html, full_html)))
}

#[async_trait]
impl Tool for PageInspectTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: PageInspectParams = parse_params(params)?;
        page_inspect(&self.session, &ctx, params.full_html).await
    }
}

// ============================================================================
// UI (text) inspect
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UiInspectParams {
    pub text_content: String,
    #[serde(default)]
    pub selector: Option<String>,
}

/// Find elements by the text they show.
pub struct UiInspectTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl UiInspectTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_ui_inspect",
            "Browser UI Inspect",
            "Find elements containing a text, together with related inputs and buttons, and suggest stable selectors for them.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "text_content": {
                    "type": "string",
                    "description": "Text to search for (case-insensitive)"
                },
                "selector": {
                    "type": "string",
                    "description": "CSS selector of a container to search within"
                }
            },
            "required": ["text_content"]
        }));
        Self { definition, session }
    }
}

pub(crate) async fn ui_inspect(
    session: &BrowserSession,
    ctx: &ToolContext,
    text: &str,
    within: Option<&str>,
) -> Result<ToolResult, ToolError> {
    debug!(correlation_id = %ctx.correlation_id, text, within = ?within, "Inspecting by text");
    let html = session.page_html(ctx).await?;
    let report = inspect_text(&html, text, within).map_err(invalid_query)?;
    Ok(ToolResult::success(report))
}

#[async_trait]
impl Tool for UiInspectTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: UiInspectParams = parse_params(params)?;
        ui_inspect(&self.session, &ctx, &params.text_content, params.selector.as_deref()).await
    }
}

// ============================================================================
// Selector inspect
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectorInspectParams {
    pub selector: String,
    #[serde(default)]
    pub context_size: Option<usize>,
}

/// Find elements by CSS selector.
pub struct SelectorInspectTool {
    definition: ToolDefinition,
    session: Arc<BrowserSession>,
}

impl SelectorInspectTool {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        let definition = ToolDefinition::new(
            "browser_selector_inspect",
            "Browser Selector Inspect",
            "Find elements matching a CSS selector and show their markup with enclosing elements.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "selector": {
                    "type": "string",
                    "description": "CSS selector to target specific elements"
                },
                "context_size": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Number of parent elements to include (default: 2)"
                }
            },
            "required": ["selector"]
        }));
        Self { definition, session }
    }
}

pub(crate) async fn selector_inspect(
    session: &BrowserSession,
    ctx: &ToolContext,
    selector: &str,
    context_size: Option<usize>,
) -> Result<ToolResult, ToolError> {
    let context_size = context_size.unwrap_or(session.context_size());
    debug!(correlation_id = %ctx.correlation_id, selector, context_size, "Inspecting by selector");
    let html = session.page_html(ctx).await?;
    let report = inspect_selector(&html, selector, context_size).map_err(invalid_query)?;
    Ok(ToolResult::success(report))
}

#[async_trait]
impl Tool for SelectorInspectTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let params: SelectorInspectParams = parse_params(params)?;
        selector_inspect(&self.session, &ctx, &params.selector, params.context_size).await
    }
}
