//! Top-level error uniting every plugin failure mode.

use thiserror::Error;

use super::{CommandParseError, ConfigurationError, HostError, ProtocolError, ProviderError};

/// Any error a command or callback can surface.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PluginError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Parse(#[from] CommandParseError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl PluginError {
    /// Stable tag for log correlation, delegated to the wrapped error.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        match self {
            Self::Configuration(e) => e.source_tag(),
            Self::Provider(e) => e.source_tag(),
            Self::Protocol(e) => e.source_tag(),
            Self::Parse(e) => e.source_tag(),
            Self::Host(e) => e.source_tag(),
        }
    }
}
