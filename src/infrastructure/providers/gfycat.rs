//! Gfycat search API client.

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

const GFYCAT_API_BASE: &str = "https://api.gfycat.com";
const PROVIDER: &str = "gfycat";
const ATTRIBUTION: &str = "Via Gfycat";
const PAGE_SIZE: usize = 30;

/// Gfycat client. Keyless; paginates with the backend's opaque `cursor`
/// token. Gfycat has no random mode, so configurations asking for one are
/// rejected before this client is ever built.
#[derive(Debug)]
pub struct GfycatClient {
    client: reqwest::Client,
    base_url: String,
    rendition: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    gfycats: Vec<GfyItem>,
    #[serde(default)]
    cursor: String,
}

#[derive(Debug, Deserialize)]
struct GfyItem {
    #[serde(rename = "contentUrls", default)]
    content_urls: HashMap<String, ContentUrl>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentUrl {
    #[serde(default)]
    url: String,
}

impl GfycatClient {
    /// Creates a client with the default API base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(settings: &ProviderConfiguration) -> Result<Self, ConfigurationError> {
        Self::with_base_url(settings, GFYCAT_API_BASE)
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
            rendition: settings.rendition.clone(),
        })
    }

    fn status_error(status: StatusCode) -> ProviderError {
        ProviderError::status(
            PROVIDER,
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status"),
        )
    }

    fn collect_urls(&self, items: &[GfyItem]) -> Result<Vec<String>, ProviderError> {
        let urls = items
            .iter()
            .filter_map(|item| {
                item.content_urls
                    .get(&self.rendition)
                    .filter(|content| !content.url.is_empty())
                    .map(|content| content.url.clone())
            })
            .collect();
        finish_urls(PROVIDER, &self.rendition, items.len(), urls)
    }
}

#[async_trait]
impl GifProviderPort for GfycatClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn attribution(&self) -> &str {
        ATTRIBUTION
    }

    async fn search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("search_text", query.keywords.clone()),
            ("count", PAGE_SIZE.to_string()),
        ];
        if !query.cursor.is_empty() {
            params.push(("cursor", query.cursor.as_str().to_string()));
        }

        let response = self
            .client
            .get(format!("{}/v1/gfycats/search", self.base_url))
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

        let total = body.gfycats.len();
        let urls = self.collect_urls(&body.gfycats)?;
        let next_cursor = advance_cursor(total, &query.cursor, Cursor::new(body.cursor));
        debug!(provider = PROVIDER, count = urls.len(), "Search completed");

        Ok(ProviderResult { urls, next_cursor })
    }
}
