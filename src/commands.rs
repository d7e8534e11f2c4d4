//! Command handlers. Each returns the text to print.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use serde_json::json;
use tracing::info;

use pagewise_config::Config;
use pagewise_protocols::{Tool, ToolContext, ToolError, ToolResult};
use pagewise_tools_browser::{BrowserSession, BrowserTool, FileDriver, browser_tools, list_stable_selectors};

use crate::cli::Commands;

pub(crate) async fn execute(command: Commands, config: &Config) -> anyhow::Result<String> {
    match command {
        Commands::Summarize { file } => run_tool(&file, config, "browser_page_inspect", json!({})).await,
        Commands::Html { file } => {
            run_tool(&file, config, "browser_page_inspect", json!({"full_html": true})).await
        }
        Commands::Find { file, text, selector } => {
            let params = json!({"text_content": text, "selector": selector});
            run_tool(&file, config, "browser_ui_inspect", params).await
        }
        Commands::Inspect { file, selector, context } => {
            let params = json!({"selector": selector, "context_size": context});
            run_tool(&file, config, "browser_selector_inspect", params).await
        }
        Commands::Selectors { file, selector } => {
            let html = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            Ok(list_stable_selectors(&html, &selector)?)
        }
        Commands::Call { file, params } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).context("Action parameters must be a JSON object")?;
            let session = open_session(&file, config).await?;
            invoke(&BrowserTool::new(session), params).await
        }
        Commands::Tools { json } => list_tools(json),
    }
}

fn context() -> ToolContext {
    ToolContext::new(format!("cli-{}", std::process::id()))
}

async fn open_session(file: &Path, config: &Config) -> anyhow::Result<Arc<BrowserSession>> {
    let driver = FileDriver::open(file)
        .await
        .with_context(|| format!("Failed to open {}", file.display()))?;
    info!(file = %file.display(), "Opened page");
    Ok(Arc::new(
        BrowserSession::new(Arc::new(driver))
            .with_timeout(config.browser.timeout())
            .with_context_size(config.browser.context_size),
    ))
}

async fn run_tool(file: &Path, config: &Config, id: &str, params: serde_json::Value) -> anyhow::Result<String> {
    let session = open_session(file, config).await?;
    let tool = browser_tools(session)
        .into_iter()
        .find(|tool| tool.definition().id == id)
        .ok_or_else(|| ToolError::NotFound(id.to_string()))?;
    invoke(tool.as_ref(), params).await
}

async fn invoke(tool: &dyn Tool, params: serde_json::Value) -> anyhow::Result<String> {
    tool.validate(&params)?;
    let result = tool.execute(params, context()).await?;
    into_output(result)
}

fn into_output(result: ToolResult) -> anyhow::Result<String> {
    if result.success {
        Ok(result.content)
    } else {
        bail!("{}", result.error.unwrap_or_else(|| "Tool reported failure".to_string()))
    }
}

fn all_tools() -> Vec<Arc<dyn Tool>> {
    let session = Arc::new(BrowserSession::new(Arc::new(FileDriver::new())));
    let mut tools = browser_tools(session.clone());
    tools.push(Arc::new(BrowserTool::new(session)));
    tools
}

fn list_tools(as_json: bool) -> anyhow::Result<String> {
    let tools = all_tools();
    if as_json {
        let definitions: Vec<serde_json::Value> =
            tools.iter().map(|tool| tool.definition().to_llm_tool()).collect();
        return Ok(serde_json::to_string_pretty(&definitions)?);
    }

    let width = tools
        .iter()
        .map(|tool| tool.definition().id.len())
        .max()
        .unwrap_or_default();
    let mut output = String::new();
    for tool in &tools {
        let definition = tool.definition();
        output.push_str(&format!(
            "{:<width$}  [{:?}]  {}\n",
            definition.id,
            definition.risk_level,
            definition.description,
            width = width
        ));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
