//! Errors reported by the chat host port.

use thiserror::Error;

/// Chat host call failure.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HostError {
    #[error("chat host {operation} failed: {message}")]
    CallFailed {
        operation: &'static str,
        message: String,
    },
}

impl HostError {
    /// Creates a call failure for the named host operation.
    #[must_use]
    pub fn call_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::CallFailed {
            operation,
            message: message.into(),
        }
    }

    /// Stable tag for log correlation.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        "host"
    }
}
