//! Browser tools for Pagewise.
//!
//! Agent-facing tools that read the current page through a
//! [`BrowserDriver`](pagewise_protocols::BrowserDriver) and answer with
//! compact, text-only reports built by `pagewise-dom`.
//!
//! ## Tools
//!
//! - `browser_visit` - Navigate to a URL
//! - `browser_page_inspect` - Page digest, or cleaned HTML with `full_html`
//! - `browser_ui_inspect` - Elements containing a text, with stable selectors
//! - `browser_selector_inspect` - Elements matching a CSS selector
//! - `browser_button_click` / `browser_link_click` / `browser_element_click`
//! - `browser_text_field_set` - Enter text into a field
//! - `browser_screenshot` - PNG data URL of the page
//!
//! [`BrowserTool`] exposes the same actions as a single `browser` tool taking
//! an `action` parameter.
//!
//! ## Drivers
//!
//! [`FileDriver`] serves local HTML files and is what the `pagewise` CLI
//! uses. Live browsers plug in by implementing `BrowserDriver`.

mod dispatch;
mod file_driver;
mod session;
mod tools;

#[cfg(test)]
mod mock_driver;

pub use dispatch::{BrowserAction, BrowserParams, BrowserTool};
pub use file_driver::FileDriver;
pub use session::{BrowserSession, DEFAULT_CONTEXT_SIZE, DEFAULT_TIMEOUT};
pub use tools::*;
