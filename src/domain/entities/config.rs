//! Provider and display-mode vocabulary used across layers.

use serde::{Deserialize, Serialize};

/// Supported GIF search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Giphy search API (key-gated).
    Giphy,
    /// Tenor v2 search API (key-gated).
    Tenor,
    /// Gfycat search API (keyless).
    Gfycat,
}

impl ProviderKind {
    /// Parses a provider name from configuration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "giphy" => Some(Self::Giphy),
            "tenor" => Some(Self::Tenor),
            "gfycat" => Some(Self::Gfycat),
            _ => None,
        }
    }

    /// Returns whether this backend requires an API key.
    #[must_use]
    pub const fn requires_api_key(self) -> bool {
        matches!(self, Self::Giphy | Self::Tenor)
    }

    /// Returns whether this backend offers a server-side random mode.
    #[must_use]
    pub const fn supports_random(self) -> bool {
        matches!(self, Self::Giphy | Self::Tenor)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Giphy => write!(f, "giphy"),
            Self::Tenor => write!(f, "tenor"),
            Self::Gfycat => write!(f, "gfycat"),
        }
    }
}

/// How rendered messages present the selected GIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Markdown image embed wrapped in a link, plus attribution.
    Embedded,
    /// Bare URL plus attribution, no embed.
    FullUrl,
}

impl DisplayMode {
    /// Parses a display-mode name from configuration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "embedded" => Some(Self::Embedded),
            "full_url" | "fullurl" => Some(Self::FullUrl),
            _ => None,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::FullUrl => write!(f, "full_url"),
        }
    }
}
