//! Protocol errors for commands and action callbacks.

use thiserror::Error;

/// Protocol error variants.
///
/// All of these are rejected before any provider call is made.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProtocolError {
    #[error("callback context is missing required entry \"{field}\"")]
    MissingContextField { field: &'static str },

    #[error("callback context entry \"{field}\" is not a string")]
    WrongFieldType { field: &'static str },

    #[error("malformed callback payload: {message}")]
    MalformedPayload { message: String },

    #[error("no authenticated user id on the callback request")]
    MissingActingUser,

    #[error("callback user does not match the user who opened the preview")]
    UserMismatch,

    #[error("unsupported command \"{input}\"")]
    UnsupportedTrigger { input: String },

    #[error("unknown callback path \"{path}\"")]
    UnknownCallback { path: String },
}

impl ProtocolError {
    /// Creates a missing-context-entry error.
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingContextField { field }
    }

    /// Creates a wrong-type error for a context entry.
    #[must_use]
    pub const fn wrong_field_type(field: &'static str) -> Self {
        Self::WrongFieldType { field }
    }

    /// Creates a malformed-payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Creates an unsupported-trigger error naming the offending input.
    #[must_use]
    pub fn unsupported_trigger(input: impl Into<String>) -> Self {
        Self::UnsupportedTrigger {
            input: input.into(),
        }
    }

    /// Creates an unknown-callback-path error.
    #[must_use]
    pub fn unknown_callback(path: impl Into<String>) -> Self {
        Self::UnknownCallback { path: path.into() }
    }

    /// Stable tag for log correlation.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        "protocol"
    }
}
