//! The browser collaborator.
//!
//! Tools never touch a browser directly. Everything they need goes through
//! this trait, which keeps the page-analysis code testable against canned
//! HTML.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// What kind of element a click is aimed at.
///
/// Drivers use this to decide how a selector is resolved, e.g. a button
/// click may match on visible text as well as id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Button,
    Link,
    Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Ok,
    Error,
}

/// Status/message pair reported by the driver after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverOutcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl DriverOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == OutcomeStatus::Ok
    }
}

/// Narrow interface to a live browser session.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Load `url` in the current tab.
    async fn navigate(&self, url: &str) -> Result<DriverOutcome, DriverError>;

    /// Serialized HTML of the current document.
    async fn html(&self) -> Result<String, DriverError>;

    /// Click the element identified by `selector`.
    async fn click(&self, target: ClickTarget, selector: &str) -> Result<DriverOutcome, DriverError>;

    /// Replace the value of a text field or text area.
    async fn set_value(&self, selector: &str, value: &str) -> Result<DriverOutcome, DriverError>;

    /// PNG bytes of the visible page.
    async fn screenshot(&self) -> Result<Vec<u8>, DriverError>;
}
