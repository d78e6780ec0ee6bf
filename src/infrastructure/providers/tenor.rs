//! Tenor v2 search API client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{advance_cursor, build_http_client, finish_urls, network_error};
use crate::domain::entities::{Cursor, ProviderResult, SearchQuery};
use crate::domain::errors::{ConfigurationError, ProviderError};
use crate::domain::ports::GifProviderPort;
use crate::infrastructure::config::ProviderConfiguration;

const TENOR_API_BASE: &str = "https://tenor.googleapis.com";
const PROVIDER: &str = "tenor";
const ATTRIBUTION: &str = "Via Tenor";
const PAGE_SIZE: usize = 30;

/// Tenor client. Paginates with the backend's opaque `next` token, passed
/// through verbatim as the cursor. Random mode is a search parameter, not a
/// separate endpoint.
#[derive(Debug)]
pub struct TenorClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    rendition: String,
    rating: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TenorItem>,
    #[serde(default)]
    next: String,
}

#[derive(Debug, Deserialize)]
struct TenorItem {
    #[serde(default)]
    media_formats: HashMap<String, MediaObject>,
}

#[derive(Debug, Default, Deserialize)]
struct MediaObject {
    #[serde(default)]
    url: String,
}

impl TenorClient {
    /// Creates a client with the default API base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(settings: &ProviderConfiguration) -> Result<Self, ConfigurationError> {
        Self::with_base_url(settings, TENOR_API_BASE)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn with_base_url(
        settings: &ProviderConfiguration,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into(),
            api_key: settings.api_key.clone(),
            rendition: settings.rendition.clone(),
            rating: settings.rating.clone(),
            language: settings.language.clone(),
        })
    }

    fn status_error(status: StatusCode) -> ProviderError {
        ProviderError::status(
            PROVIDER,
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status"),
        )
    }

    fn collect_urls(&self, items: &[TenorItem]) -> Result<Vec<String>, ProviderError> {
        let urls = items
            .iter()
            .filter_map(|item| {
                item.media_formats
                    .get(&self.rendition)
                    .filter(|media| !media.url.is_empty())
                    .map(|media| media.url.clone())
            })
            .collect();
        finish_urls(PROVIDER, &self.rendition, items.len(), urls)
    }
}

#[async_trait]
impl GifProviderPort for TenorClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn attribution(&self) -> &str {
        ATTRIBUTION
    }

    async fn search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("key", self.api_key.clone()),
            ("q", query.keywords.clone()),
            ("limit", PAGE_SIZE.to_string()),
            ("media_filter", self.rendition.clone()),
        ];
        if !self.rating.is_empty() {
            params.push(("contentfilter", self.rating.clone()));
        }
        if !self.language.is_empty() {
            params.push(("locale", self.language.clone()));
        }
        if !query.cursor.is_empty() {
            params.push(("pos", query.cursor.as_str().to_string()));
        }
        if query.random {
            params.push(("random", "true".to_string()));
        }

        let response = self
            .client
            .get(format!("{}/v2/search", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| network_error(PROVIDER, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(PROVIDER, e.to_string()))?;

        let total = body.results.len();
        let urls = self.collect_urls(&body.results)?;
        let next_cursor = advance_cursor(total, &query.cursor, Cursor::new(body.next));
        debug!(provider = PROVIDER, count = urls.len(), "Search completed");

        Ok(ProviderResult { urls, next_cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(rendition: &str) -> TenorClient {
        let settings = ProviderConfiguration {
            provider: "tenor".to_string(),
            api_key: "key".to_string(),
            rendition: rendition.to_string(),
            ..ProviderConfiguration::default()
        };
        TenorClient::new(&settings).unwrap()
    }

    const CANNED: &str = r#"{
        "results": [
            {"media_formats": {"tinygif": {"url": "u1"}, "gif": {"url": "u2"}}},
            {"media_formats": {"gif": {"url": "u3"}}}
        ],
        "next": "CAgQ"
    }"#;

    #[test]
    fn test_collects_the_configured_rendition_in_order() {
        let body: SearchResponse = serde_json::from_str(CANNED).unwrap();
        let urls = make_client("gif").collect_urls(&body.results).unwrap();
        assert_eq!(urls, vec!["u2".to_string(), "u3".to_string()]);
    }

    #[test]
    fn test_missing_rendition_is_an_error_naming_it() {
        let body: SearchResponse = serde_json::from_str(CANNED).unwrap();
        let err = make_client("mp4").collect_urls(&body.results).unwrap_err();
        assert!(
            matches!(err, ProviderError::RenditionNotAvailable { ref rendition, .. } if rendition.as_str() == "mp4")
        );
    }

    #[test]
    fn test_partial_rendition_coverage_skips_items() {
        let body: SearchResponse = serde_json::from_str(CANNED).unwrap();
        let urls = make_client("tinygif").collect_urls(&body.results).unwrap();
        assert_eq!(urls, vec!["u1".to_string()]);
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"results": [], "next": ""}"#).unwrap();
        let urls = make_client("gif").collect_urls(&body.results).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_next_token_decodes() {
        let body: SearchResponse = serde_json::from_str(CANNED).unwrap();
        assert_eq!(body.next, "CAgQ");
    }
}
