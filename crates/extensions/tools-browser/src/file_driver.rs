//! A [`BrowserDriver`] over local HTML files.
//!
//! Visiting loads a file from disk. Clicks and text entry resolve their
//! selector against the loaded document and report whether it matched;
//! nothing is rendered and no script runs, so the page never changes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::debug;
use url::Url;

use pagewise_dom::{Document, DomNode, is_data_entry_input, prepare_document};
use pagewise_protocols::{BrowserDriver, ClickTarget, DriverError, DriverOutcome};

const BUTTON_INPUT_TYPES: [&str; 3] = ["submit", "button", "reset"];

#[derive(Default)]
struct Page {
    path: Option<PathBuf>,
    html: String,
}

/// Driver that serves pages from the local filesystem.
#[derive(Default)]
pub struct FileDriver {
    page: RwLock<Page>,
    entered: Mutex<Vec<(String, String)>>,
}

impl FileDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver with `path` already loaded.
    pub async fn open(path: &Path) -> Result<Self, DriverError> {
        let driver = Self::new();
        driver.load(path).await?;
        Ok(driver)
    }

    /// Path of the loaded page.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.page.read().path.clone()
    }

    /// `(selector, value)` pairs accepted by `set_value`, oldest first.
    pub fn entered_values(&self) -> Vec<(String, String)> {
        self.entered.lock().clone()
    }

    async fn load(&self, path: &Path) -> Result<(), DriverError> {
        let html = tokio::fs::read_to_string(path).await?;
        debug!(path = %path.display(), bytes = html.len(), "Loaded page");
        *self.page.write() = Page {
            path: Some(path.to_path_buf()),
            html,
        };
        Ok(())
    }

    fn with_document<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T, DriverError> {
        let page = self.page.read();
        if page.path.is_none() {
            return Err(DriverError::Unavailable("no page has been visited".to_string()));
        }
        let document = prepare_document(&page.html);
        Ok(f(&document))
    }
}

/// Accepts `file://` URLs and bare paths.
fn local_path(url: &str) -> Option<PathBuf> {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "file" => parsed.to_file_path().ok(),
        Ok(_) => None,
        Err(_) => Some(PathBuf::from(url)),
    }
}

fn unknown_selector(selector: &str) -> DriverOutcome {
    DriverOutcome::error(format!("unknown selector={:?}", selector))
}

fn shown_text(node: &DomNode<'_>) -> String {
    let text = node.text();
    if text.is_empty() {
        node.attr("value").unwrap_or_default().trim().to_string()
    } else {
        text
    }
}

fn is_button(node: &DomNode<'_>) -> bool {
    node.is("button")
        || (node.is("input")
            && node
                .attr("type")
                .is_some_and(|kind| BUTTON_INPUT_TYPES.contains(&kind.to_lowercase().as_str())))
}

fn is_text_entry(node: &DomNode<'_>) -> bool {
    node.is("textarea") || (node.is("input") && is_data_entry_input(node))
}

/// CSS first, then the kind-specific identity rules.
fn resolve(document: &Document, target: ClickTarget, selector: &str) -> bool {
    if document.select(selector).is_ok_and(|found| !found.is_empty()) {
        return true;
    }
    let by_id = |node: &DomNode<'_>| node.attr("id") == Some(selector);
    document.elements().any(|node| match target {
        ClickTarget::Button => is_button(&node) && (shown_text(&node) == selector || by_id(&node)),
        ClickTarget::Link => node.is("a") && (node.text() == selector || by_id(&node)),
        ClickTarget::Element => node.own_text().trim() == selector || by_id(&node),
    })
}

fn resolve_field(document: &Document, selector: &str) -> bool {
    let by_css = document
        .select(selector)
        .is_ok_and(|found| found.iter().any(is_text_entry));
    by_css
        || document.elements().any(|node| {
            is_text_entry(&node) && (node.attr("id") == Some(selector) || node.attr("name") == Some(selector))
        })
}

#[async_trait]
impl BrowserDriver for FileDriver {
    async fn navigate(&self, url: &str) -> Result<DriverOutcome, DriverError> {
        let path = local_path(url)
            .ok_or_else(|| DriverError::Unsupported(format!("only local files can be visited, got {}", url)))?;
        self.load(&path).await?;
        Ok(DriverOutcome::ok(format!("visited {}", path.display())))
    }

    async fn html(&self) -> Result<String, DriverError> {
        let page = self.page.read();
        match page.path {
            Some(_) => Ok(page.html.clone()),
            None => Err(DriverError::Unavailable("no page has been visited".to_string())),
        }
    }

    async fn click(&self, target: ClickTarget, selector: &str) -> Result<DriverOutcome, DriverError> {
        let found = self.with_document(|document| resolve(document, target, selector))?;
        debug!(?target, selector, found, "Resolved click");
        if found {
            Ok(DriverOutcome::ok(format!("clicked {}", selector)))
        } else {
            Ok(unknown_selector(selector))
        }
    }

    async fn set_value(&self, selector: &str, value: &str) -> Result<DriverOutcome, DriverError> {
        let found = self.with_document(|document| resolve_field(document, selector))?;
        if !found {
            return Ok(unknown_selector(selector));
        }
        self.entered.lock().push((selector.to_string(), value.to_string()));
        Ok(DriverOutcome::ok(format!("set {}", selector)))
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        Err(DriverError::Unsupported(
            "screenshots need a rendering browser".to_string(),
        ))
    }
}

#[cfg(test)]
#[path = "file_driver_tests.rs"]
mod tests;
