//! Configuration error types.

use thiserror::Error;

use crate::domain::entities::ProviderKind;

/// Configuration error variants.
///
/// Fatal to the operation that discovers them; never retried.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigurationError {
    #[error("unknown GIF provider \"{name}\"")]
    UnknownProvider { name: String },

    #[error("provider {provider} requires an API key and none is configured")]
    MissingApiKey { provider: ProviderKind },

    #[error("no rendition configured")]
    MissingRendition,

    #[error("no display mode configured")]
    MissingDisplayMode,

    #[error("unknown display mode \"{name}\"")]
    UnknownDisplayMode { name: String },

    #[error("provider {provider} does not support random search")]
    RandomUnsupported { provider: ProviderKind },

    #[error("the GIF preview command is disabled by configuration")]
    PreviewDisabled,

    #[error("configuration is identical to the installed one, refusing no-op update")]
    Unchanged,

    #[error("plugin is not configured yet")]
    NotConfigured,

    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

impl ConfigurationError {
    /// Creates an unknown-provider error.
    #[must_use]
    pub fn unknown_provider(name: impl Into<String>) -> Self {
        Self::UnknownProvider { name: name.into() }
    }

    /// Creates an unknown-display-mode error.
    #[must_use]
    pub fn unknown_display_mode(name: impl Into<String>) -> Self {
        Self::UnknownDisplayMode { name: name.into() }
    }

    /// Creates an HTTP client construction error.
    #[must_use]
    pub fn http_client(message: impl Into<String>) -> Self {
        Self::HttpClient {
            message: message.into(),
        }
    }

    /// Stable tag for log correlation.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        "config"
    }
}
