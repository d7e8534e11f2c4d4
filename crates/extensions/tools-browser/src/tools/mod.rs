//! Browser tools, one per driver action.

mod capture;
mod inspect;
mod interaction;
mod navigation;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use pagewise_protocols::{Tool, ToolError};

use crate::session::BrowserSession;

pub use capture::*;
pub use inspect::*;
pub use interaction::*;
pub use navigation::*;

/// Ids of the tools returned by [`browser_tools`], in registration order.
pub const TOOL_IDS: [&str; 9] = [
    "browser_visit",
    "browser_page_inspect",
    "browser_ui_inspect",
    "browser_selector_inspect",
    "browser_button_click",
    "browser_link_click",
    "browser_element_click",
    "browser_text_field_set",
    "browser_screenshot",
];

/// Every single-action tool sharing one session.
pub fn browser_tools(session: Arc<BrowserSession>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(VisitTool::new(session.clone())),
        Arc::new(PageInspectTool::new(session.clone())),
        Arc::new(UiInspectTool::new(session.clone())),
        Arc::new(SelectorInspectTool::new(session.clone())),
        Arc::new(ClickTool::button(session.clone())),
        Arc::new(ClickTool::link(session.clone())),
        Arc::new(ClickTool::element(session.clone())),
        Arc::new(TextFieldSetTool::new(session.clone())),
        Arc::new(ScreenshotTool::new(session)),
    ]
}

pub(crate) fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParameters(e.to_string()))
}
