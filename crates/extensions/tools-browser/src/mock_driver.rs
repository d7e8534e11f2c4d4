//! Scripted driver for unit tests.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use pagewise_protocols::{BrowserDriver, ClickTarget, DriverError, DriverOutcome};

pub(crate) struct MockDriver {
    html: String,
    outcome: DriverOutcome,
    screenshot: Vec<u8>,
    delay: Option<Duration>,
    unavailable: bool,
    calls: Mutex<Vec<String>>,
}

impl MockDriver {
    pub fn with_html(html: &str) -> Self {
        Self {
            html: html.to_string(),
            outcome: DriverOutcome::ok("ok"),
            screenshot: b"\x89PNG".to_vec(),
            delay: None,
            unavailable: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::with_html("")
        }
    }

    /// Every action reports this failure.
    pub fn failing(mut self, message: &str) -> Self {
        self.outcome = DriverOutcome::error(message);
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    async fn record(&self, call: String) -> Result<(), DriverError> {
        self.calls.lock().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.unavailable {
            return Err(DriverError::Unavailable("mock offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserDriver for MockDriver {
    async fn navigate(&self, url: &str) -> Result<DriverOutcome, DriverError> {
        self.record(format!("navigate {}", url)).await?;
        Ok(self.outcome.clone())
    }

    async fn html(&self) -> Result<String, DriverError> {
        self.record("html".to_string()).await?;
        Ok(self.html.clone())
    }

    async fn click(&self, target: ClickTarget, selector: &str) -> Result<DriverOutcome, DriverError> {
        self.record(format!("click {:?} {}", target, selector)).await?;
        Ok(self.outcome.clone())
    }

    async fn set_value(&self, selector: &str, value: &str) -> Result<DriverOutcome, DriverError> {
        self.record(format!("set {} = {}", selector, value)).await?;
        Ok(self.outcome.clone())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        self.record("screenshot".to_string()).await?;
        Ok(self.screenshot.clone())
    }
}
