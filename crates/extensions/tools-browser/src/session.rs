//! Shared driver handle used by every browser tool.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use pagewise_protocols::{BrowserDriver, DriverError, DriverOutcome, ToolContext, ToolError, ToolResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONTEXT_SIZE: usize = 2;

/// A driver plus the limits applied to each call made through it.
pub struct BrowserSession {
    driver: Arc<dyn BrowserDriver>,
    timeout: Duration,
    context_size: usize,
}

impl BrowserSession {
    pub fn new(driver: Arc<dyn BrowserDriver>) -> Self {
        Self {
            driver,
            timeout: DEFAULT_TIMEOUT,
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }

    /// Upper bound on a single driver call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parent levels shown by selector inspection when a call gives none.
    pub fn with_context_size(mut self, context_size: usize) -> Self {
        self.context_size = context_size;
        self
    }

    pub fn context_size(&self) -> usize {
        self.context_size
    }

    pub fn driver(&self) -> &dyn BrowserDriver {
        self.driver.as_ref()
    }

    /// Await a driver call, honoring cancellation and the timeout.
    pub(crate) async fn call<T, F>(&self, ctx: &ToolContext, operation: &str, call: F) -> Result<T, ToolError>
    where
        F: Future<Output = Result<T, DriverError>> + Send,
    {
        if ctx.is_aborted() {
            return Err(ToolError::Cancelled);
        }
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!(operation, timeout_secs = self.timeout.as_secs(), "Driver call timed out");
                Err(ToolError::Timeout(self.timeout.as_secs()))
            }
        }
    }

    /// Current document HTML.
    pub(crate) async fn page_html(&self, ctx: &ToolContext) -> Result<String, ToolError> {
        self.call(ctx, "html", self.driver.html()).await
    }
}

/// Map a driver outcome onto what the agent sees.
pub(crate) fn outcome_result(outcome: DriverOutcome) -> ToolResult {
    if outcome.is_ok() {
        ToolResult::success(outcome.message)
    } else {
        warn!(message = %outcome.message, "Driver reported failure");
        ToolResult::error(outcome.message)
    }
}
