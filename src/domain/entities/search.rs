//! Search query and result types shared by all provider clients.

use serde::{Deserialize, Serialize};

/// Opaque pagination cursor returned by a GIF provider.
///
/// The encoding is provider-specific (a decimal offset for one backend, a
/// continuation token for another) and is only ever interpreted by the client
/// that produced it. Everywhere else the cursor is carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Creates a cursor from a provider-encoded token.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The empty cursor, used on the first call for a query.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns whether this is the first-page cursor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw provider-encoded token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single search request against a GIF provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search phrase.
    pub keywords: String,
    /// Continuation cursor from the previous call, empty on the first call.
    pub cursor: Cursor,
    /// Request the backend's random mode instead of ranked search.
    pub random: bool,
}

impl SearchQuery {
    /// Creates a first-page query with an empty cursor.
    #[must_use]
    pub fn first_page(keywords: impl Into<String>, random: bool) -> Self {
        Self {
            keywords: keywords.into(),
            cursor: Cursor::empty(),
            random,
        }
    }

    /// Creates a continuation query resuming from a stored cursor.
    #[must_use]
    pub fn continuation(keywords: impl Into<String>, cursor: Cursor, random: bool) -> Self {
        Self {
            keywords: keywords.into(),
            cursor,
            random,
        }
    }
}

/// Ranked URLs plus the continuation cursor produced by one provider call.
///
/// Index 0 is the provider's best match. Empty `urls` is the legitimate
/// "nothing matched" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResult {
    /// Ranked GIF URLs for the configured rendition.
    pub urls: Vec<String>,
    /// Cursor to resume from on the next call.
    pub next_cursor: Cursor,
}

impl ProviderResult {
    /// Creates the empty result, keeping the caller's cursor unchanged.
    #[must_use]
    pub fn empty(cursor: Cursor) -> Self {
        Self {
            urls: Vec::new(),
            next_cursor: cursor,
        }
    }

    /// Returns whether the provider found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Returns the provider's best match, if any.
    #[must_use]
    pub fn best_match(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}
