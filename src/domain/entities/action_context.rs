//! The serialized state of an in-flight GIF preview.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::entities::Cursor;
use crate::domain::errors::ProtocolError;

/// Context key for the search phrase.
pub const CONTEXT_KEYWORDS: &str = "keywords";
/// Context key for the optional caption.
pub const CONTEXT_CAPTION: &str = "caption";
/// Context key for the newline-joined candidate URL list.
pub const CONTEXT_GIF_URLS: &str = "gifURLs";
/// Context key for the provider pagination cursor.
pub const CONTEXT_CURSOR: &str = "cursor";
/// Context key for the thread root post id.
pub const CONTEXT_ROOT_ID: &str = "rootId";
/// Context key for the user who opened the preview.
pub const CONTEXT_USER_ID: &str = "userId";

// URLs cannot contain a raw newline, so it is a safe join separator for the
// string-typed context entry.
const URL_SEPARATOR: char = '\n';

/// The complete state of an in-flight preview.
///
/// This value is embedded verbatim into every action button and reconstructed
/// from the callback payload on every click; there is no other state anywhere.
/// `keywords`, `caption`, and `root_id` never change across shuffle, send, and
/// cancel, while `candidate_urls` and `cursor` are replaced wholesale on each
/// shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Search phrase the preview was opened with.
    pub keywords: String,
    /// Optional caption, empty when none was given.
    pub caption: String,
    /// Ranked candidate URLs from the latest provider call, never empty.
    pub candidate_urls: Vec<String>,
    /// Cursor to resume the provider search from on the next shuffle.
    pub cursor: Cursor,
    /// Thread root the final post should attach to, empty for a new thread.
    pub root_id: String,
    /// Channel the preview lives in.
    pub channel_id: String,
    /// User who opened the preview; callbacks from anyone else are rejected.
    pub user_id: String,
    /// Id of the ephemeral preview post, taken from the callback envelope.
    pub post_id: String,
}

impl ActionContext {
    /// Serializes the context into the string-typed map carried by action
    /// buttons.
    ///
    /// `channel_id` and `post_id` are not included; the host's callback
    /// envelope supplies them on every click.
    #[must_use]
    pub fn to_context_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(CONTEXT_KEYWORDS.to_string(), self.keywords.clone());
        map.insert(CONTEXT_CAPTION.to_string(), self.caption.clone());
        map.insert(
            CONTEXT_GIF_URLS.to_string(),
            self.candidate_urls.join(&URL_SEPARATOR.to_string()),
        );
        map.insert(CONTEXT_CURSOR.to_string(), self.cursor.as_str().to_string());
        map.insert(CONTEXT_ROOT_ID.to_string(), self.root_id.clone());
        map.insert(CONTEXT_USER_ID.to_string(), self.user_id.clone());
        map
    }

    /// Reconstructs the context from a callback's context map and envelope
    /// fields.
    ///
    /// # Errors
    /// Returns a protocol error when a required entry is missing, is not a
    /// string, or the candidate list is empty.
    pub fn from_parts(
        context: &Map<String, Value>,
        channel_id: &str,
        post_id: &str,
    ) -> Result<Self, ProtocolError> {
        let keywords = require_string(context, CONTEXT_KEYWORDS)?;
        let caption = optional_string(context, CONTEXT_CAPTION)?;
        let joined_urls = require_string(context, CONTEXT_GIF_URLS)?;
        let cursor = require_string(context, CONTEXT_CURSOR)?;
        let root_id = require_string(context, CONTEXT_ROOT_ID)?;
        let user_id = require_string(context, CONTEXT_USER_ID)?;

        let candidate_urls: Vec<String> = joined_urls
            .split(URL_SEPARATOR)
            .filter(|url| !url.is_empty())
            .map(ToString::to_string)
            .collect();
        if candidate_urls.is_empty() {
            return Err(ProtocolError::missing_field(CONTEXT_GIF_URLS));
        }

        Ok(Self {
            keywords,
            caption,
            candidate_urls,
            cursor: Cursor::new(cursor),
            root_id,
            channel_id: channel_id.to_string(),
            user_id,
            post_id: post_id.to_string(),
        })
    }

    /// Replaces the candidate list and cursor wholesale after a shuffle.
    #[must_use]
    pub fn with_candidates(mut self, urls: Vec<String>, cursor: Cursor) -> Self {
        self.candidate_urls = urls;
        self.cursor = cursor;
        self
    }

    /// Returns the currently selected candidate.
    #[must_use]
    pub fn best_candidate(&self) -> Option<&str> {
        self.candidate_urls.first().map(String::as_str)
    }
}

fn require_string(context: &Map<String, Value>, field: &'static str) -> Result<String, ProtocolError> {
    match context.get(field) {
        None => Err(ProtocolError::missing_field(field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ProtocolError::wrong_field_type(field)),
    }
}

// Absent is tolerated, a non-string value is still a protocol error.
fn optional_string(context: &Map<String, Value>, field: &'static str) -> Result<String, ProtocolError> {
    match context.get(field) {
        None => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ProtocolError::wrong_field_type(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_context() -> ActionContext {
        ActionContext {
            keywords: "office cat".to_string(),
            caption: "back to work".to_string(),
            candidate_urls: vec!["https://a/1.gif".to_string(), "https://a/2.gif".to_string()],
            cursor: Cursor::new("30"),
            root_id: "root-1".to_string(),
            channel_id: "chan-1".to_string(),
            user_id: "user-1".to_string(),
            post_id: "post-1".to_string(),
        }
    }

    fn as_json_map(map: BTreeMap<String, String>) -> Map<String, Value> {
        map.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
    }

    #[test]
    fn test_round_trips_through_context_map() {
        let original = sample_context();
        let map = as_json_map(original.to_context_map());

        let rebuilt = ActionContext::from_parts(&map, "chan-1", "post-1").unwrap();

        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_missing_required_entry_is_rejected() {
        let mut map = as_json_map(sample_context().to_context_map());
        map.remove(CONTEXT_ROOT_ID);

        let err = ActionContext::from_parts(&map, "chan-1", "post-1").unwrap_err();

        assert!(matches!(err, ProtocolError::MissingContextField { field: "rootId" }));
    }

    #[test]
    fn test_non_string_entry_is_rejected() {
        let mut map = as_json_map(sample_context().to_context_map());
        map.insert(CONTEXT_CURSOR.to_string(), json!(30));

        let err = ActionContext::from_parts(&map, "chan-1", "post-1").unwrap_err();

        assert!(matches!(err, ProtocolError::WrongFieldType { field: "cursor" }));
    }

    #[test]
    fn test_empty_candidate_list_is_rejected() {
        let mut map = as_json_map(sample_context().to_context_map());
        map.insert(CONTEXT_GIF_URLS.to_string(), Value::String(String::new()));

        let err = ActionContext::from_parts(&map, "chan-1", "post-1").unwrap_err();

        assert!(matches!(err, ProtocolError::MissingContextField { field: "gifURLs" }));
    }

    #[test]
    fn test_shuffle_replacement_keeps_identity_fields() {
        let original = sample_context();
        let shuffled = original
            .clone()
            .with_candidates(vec!["https://a/3.gif".to_string()], Cursor::new("60"));

        assert_eq!(shuffled.keywords, original.keywords);
        assert_eq!(shuffled.caption, original.caption);
        assert_eq!(shuffled.root_id, original.root_id);
        assert_eq!(shuffled.best_candidate(), Some("https://a/3.gif"));
        assert_eq!(shuffled.cursor.as_str(), "60");
    }

    #[test]
    fn test_missing_caption_defaults_to_empty() {
        let mut map = as_json_map(sample_context().to_context_map());
        map.remove(CONTEXT_CAPTION);

        let rebuilt = ActionContext::from_parts(&map, "chan-1", "post-1").unwrap();

        assert!(rebuilt.caption.is_empty());
    }
}
