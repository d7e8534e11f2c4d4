//! Tool execution context.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-call context handed to [`Tool::execute`](crate::Tool::execute).
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub session_id: String,

    /// Correlation ID for tracing a call across log lines.
    pub correlation_id: String,

    pub abort_signal: Arc<AbortSignal>,
}

impl ToolContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            abort_signal: Arc::new(AbortSignal::new()),
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.abort_signal.is_aborted()
    }
}

/// Cooperative cancellation flag shared between a caller and its tools.
#[derive(Debug, Default)]
pub struct AbortSignal {
    aborted: AtomicBool,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }
}
