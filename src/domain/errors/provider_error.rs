//! Errors produced by GIF provider clients.

use thiserror::Error;

/// Provider client error variants.
///
/// None of these are retried automatically; an empty result set is not an
/// error and is reported as a normal `ProviderResult` with no URLs.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProviderError {
    #[error("{provider}: network error: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("{provider}: unexpected response status {status}: {message}")]
    UnexpectedStatus {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider}: rate limited: {hint}")]
    RateLimited {
        provider: &'static str,
        hint: String,
    },

    #[error("{provider}: could not decode response: {message}")]
    MalformedResponse {
        provider: &'static str,
        message: String,
    },

    #[error("{provider}: response has no URL for rendition \"{rendition}\"")]
    RenditionNotAvailable {
        provider: &'static str,
        rendition: String,
    },

    #[error("{provider}: invalid pagination cursor \"{cursor}\"")]
    InvalidCursor {
        provider: &'static str,
        cursor: String,
    },
}

impl ProviderError {
    /// Creates a network error.
    #[must_use]
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Creates an unexpected-status error from a backend status line.
    #[must_use]
    pub fn status(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Creates a rate-limit error carrying a remediation hint.
    #[must_use]
    pub fn rate_limited(provider: &'static str, hint: impl Into<String>) -> Self {
        Self::RateLimited {
            provider,
            hint: hint.into(),
        }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed(provider: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.into(),
        }
    }

    /// Creates a missing-rendition error naming the configured rendition.
    #[must_use]
    pub fn rendition_not_available(provider: &'static str, rendition: impl Into<String>) -> Self {
        Self::RenditionNotAvailable {
            provider,
            rendition: rendition.into(),
        }
    }

    /// Creates an invalid-cursor error.
    #[must_use]
    pub fn invalid_cursor(provider: &'static str, cursor: impl Into<String>) -> Self {
        Self::InvalidCursor {
            provider,
            cursor: cursor.into(),
        }
    }

    /// Stable tag for log correlation: the owning provider's name.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::UnexpectedStatus { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::MalformedResponse { provider, .. }
            | Self::RenditionNotAvailable { provider, .. }
            | Self::InvalidCursor { provider, .. } => *provider,
        }
    }
}
