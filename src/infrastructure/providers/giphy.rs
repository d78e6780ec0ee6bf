//! Giphy search API client.

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

const GIPHY_API_BASE: &str = "https://api.giphy.com";
const PROVIDER: &str = "giphy";
const ATTRIBUTION: &str = "Powered by GIPHY";
const PAGE_SIZE: usize = 30;
const RATE_LIMIT_HINT: &str =
    "the shared default Giphy API key is rate limited; configure a private API key";

/// Giphy client. Paginates with a decimal offset encoded in the cursor.
#[derive(Debug)]
pub struct GiphyClient {
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
    data: Vec<GifObject>,
}

#[derive(Debug, Deserialize)]
struct GifObject {
    #[serde(default)]
    images: HashMap<String, RenditionObject>,
}

#[derive(Debug, Default, Deserialize)]
struct RenditionObject {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    data: RandomData,
}

// Giphy returns an object on a hit and an empty array on a miss.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RandomData {
    // Miss must be tried first: an empty array would otherwise also satisfy
    // Hit, because serde can fill a struct positionally from a sequence.
    Miss(Vec<serde_json::Value>),
    Hit(Box<GifObject>),
}

impl GiphyClient {
    /// Creates a client with the default API base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(settings: &ProviderConfiguration) -> Result<Self, ConfigurationError> {
        Self::with_base_url(settings, GIPHY_API_BASE)
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

    fn decode_offset(&self, cursor: &Cursor) -> Result<u64, ProviderError> {
        if cursor.is_empty() {
            return Ok(0);
        }
        cursor
            .as_str()
            .parse()
            .map_err(|_| ProviderError::invalid_cursor(PROVIDER, cursor.as_str()))
    }

    fn advance_offset(offset: u64, total: usize) -> Cursor {
        Cursor::new((offset + total as u64).to_string())
    }

    fn status_error(status: StatusCode) -> ProviderError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return ProviderError::rate_limited(PROVIDER, RATE_LIMIT_HINT);
        }
        ProviderError::status(
            PROVIDER,
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status"),
        )
    }

    fn rendition_url(&self, item: &GifObject) -> Option<String> {
        item.images
            .get(&self.rendition)
            .filter(|rendition| !rendition.url.is_empty())
            .map(|rendition| rendition.url.clone())
    }

    fn collect_urls(&self, items: &[GifObject]) -> Result<Vec<String>, ProviderError> {
        let urls = items.iter().filter_map(|item| self.rendition_url(item)).collect();
        finish_urls(PROVIDER, &self.rendition, items.len(), urls)
    }

    async fn ranked_search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let offset = self.decode_offset(&query.cursor)?;

        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("q", query.keywords.clone()),
            ("limit", PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
        ];
        if !self.rating.is_empty() {
            params.push(("rating", self.rating.clone()));
        }
        if !self.language.is_empty() {
            params.push(("lang", self.language.clone()));
        }

        let response = self
            .client
            .get(format!("{}/v1/gifs/search", self.base_url))
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

        let total = body.data.len();
        let urls = self.collect_urls(&body.data)?;
        let next_cursor = advance_cursor(total, &query.cursor, Self::advance_offset(offset, total));
        debug!(provider = PROVIDER, count = urls.len(), offset, "Search completed");

        Ok(ProviderResult { urls, next_cursor })
    }

    async fn random_search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("tag", query.keywords.clone()),
        ];
        if !self.rating.is_empty() {
            params.push(("rating", self.rating.clone()));
        }

        let response = self
            .client
            .get(format!("{}/v1/gifs/random", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| network_error(PROVIDER, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        let body: RandomResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(PROVIDER, e.to_string()))?;

        match body.data {
            RandomData::Hit(item) => {
                let urls = self.collect_urls(std::slice::from_ref(item.as_ref()))?;
                // The random endpoint is already shuffled server-side and has
                // no pagination.
                Ok(ProviderResult {
                    urls,
                    next_cursor: Cursor::empty(),
                })
            }
            RandomData::Miss(_) => Ok(ProviderResult::empty(query.cursor.clone())),
        }
    }
}

#[async_trait]
impl GifProviderPort for GiphyClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn attribution(&self) -> &str {
        ATTRIBUTION
    }

    async fn search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        if query.random {
            self.random_search(query).await
        } else {
            self.ranked_search(query).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(rendition: &str) -> GiphyClient {
        let settings = ProviderConfiguration {
            provider: "giphy".to_string(),
            api_key: "key".to_string(),
            rendition: rendition.to_string(),
            ..ProviderConfiguration::default()
        };
        GiphyClient::new(&settings).unwrap()
    }

    const TWO_RENDITIONS: &str = r#"{
        "data": [
            {"images": {"A": {"url": "u1"}, "B": {"url": "u2"}}}
        ]
    }"#;

    #[test]
    fn test_picks_only_the_configured_rendition() {
        let body: SearchResponse = serde_json::from_str(TWO_RENDITIONS).unwrap();
        let urls = make_client("B").collect_urls(&body.data).unwrap();
        assert_eq!(urls, vec!["u2".to_string()]);
    }

    #[test]
    fn test_missing_rendition_key_is_an_error_naming_it() {
        let body: SearchResponse = serde_json::from_str(TWO_RENDITIONS).unwrap();
        let err = make_client("C").collect_urls(&body.data).unwrap_err();
        assert!(
            matches!(err, ProviderError::RenditionNotAvailable { ref rendition, .. } if rendition.as_str() == "C")
        );
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let body: SearchResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let urls = make_client("A").collect_urls(&body.data).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_empty_rendition_url_counts_as_absent() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"data": [{"images": {"A": {"url": ""}}}]}"#).unwrap();
        let err = make_client("A").collect_urls(&body.data).unwrap_err();
        assert!(matches!(err, ProviderError::RenditionNotAvailable { .. }));
    }

    #[test]
    fn test_offset_cursor_round_trip() {
        let client = make_client("A");
        assert_eq!(client.decode_offset(&Cursor::empty()).unwrap(), 0);
        assert_eq!(client.decode_offset(&Cursor::new("30")).unwrap(), 30);
        assert!(matches!(
            client.decode_offset(&Cursor::new("next-token")),
            Err(ProviderError::InvalidCursor { .. })
        ));
    }

    #[test]
    fn test_offset_advances_by_page_total() {
        assert_eq!(GiphyClient::advance_offset(0, 30).as_str(), "30");
        assert_eq!(GiphyClient::advance_offset(30, 25).as_str(), "55");
    }

    #[test]
    fn test_429_maps_to_rate_limit_hint() {
        let err = GiphyClient::status_error(StatusCode::TOO_MANY_REQUESTS);
        assert!(err.to_string().contains("private API key"));

        let err = GiphyClient::status_error(StatusCode::FORBIDDEN);
        assert!(matches!(
            err,
            ProviderError::UnexpectedStatus { status: 403, .. }
        ));
    }

    #[test]
    fn test_random_miss_decodes_as_empty() {
        let body: RandomResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(matches!(body.data, RandomData::Miss(_)));

        let body: RandomResponse =
            serde_json::from_str(r#"{"data": {"images": {"A": {"url": "u1"}}}}"#).unwrap();
        assert!(matches!(body.data, RandomData::Hit(_)));
    }
}
