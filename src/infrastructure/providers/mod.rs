//! GIF provider client adapters.
//!
//! Each client owns its backend's URL templates, parameter names, and cursor
//! encoding; nothing provider-specific leaks past the [`GifProviderPort`].

mod gfycat;
mod giphy;
mod tenor;

use std::sync::Arc;
use std::time::Duration;

pub use gfycat::GfycatClient;
pub use giphy::GiphyClient;
pub use tenor::TenorClient;

use crate::domain::entities::{Cursor, ProviderKind};
use crate::domain::errors::{ConfigurationError, ProviderError};
use crate::domain::ports::GifProviderPort;
use crate::infrastructure::config::ProviderConfiguration;

/// Bounded timeout for every provider HTTP call.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Validates the configuration and builds the active provider client.
///
/// Run once when a configuration is installed; no network call ever happens
/// on an invalid configuration.
///
/// # Errors
/// Returns a configuration error for an unknown provider, a missing API key
/// on a key-gated provider, a missing rendition, or random search on a
/// backend without a random mode.
pub fn select_provider(
    settings: &ProviderConfiguration,
) -> Result<Arc<dyn GifProviderPort>, ConfigurationError> {
    let kind = ProviderKind::from_name(&settings.provider)
        .ok_or_else(|| ConfigurationError::unknown_provider(&settings.provider))?;

    if settings.rendition.trim().is_empty() {
        return Err(ConfigurationError::MissingRendition);
    }
    if kind.requires_api_key() && settings.api_key.trim().is_empty() {
        return Err(ConfigurationError::MissingApiKey { provider: kind });
    }
    if settings.random_search && !kind.supports_random() {
        return Err(ConfigurationError::RandomUnsupported { provider: kind });
    }

    let provider: Arc<dyn GifProviderPort> = match kind {
        ProviderKind::Giphy => Arc::new(GiphyClient::new(settings)?),
        ProviderKind::Tenor => Arc::new(TenorClient::new(settings)?),
        ProviderKind::Gfycat => Arc::new(GfycatClient::new(settings)?),
    };
    Ok(provider)
}

pub(crate) fn build_http_client() -> Result<reqwest::Client, ConfigurationError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ConfigurationError::http_client(e.to_string()))
}

pub(crate) fn network_error(provider: &'static str, error: &reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::network(provider, "request timed out")
    } else if error.is_connect() {
        ProviderError::network(provider, "failed to connect")
    } else {
        ProviderError::network(provider, error.to_string())
    }
}

/// Applies the crate-wide pagination rule: an empty page keeps the caller's
/// cursor unchanged, a non-empty page adopts the cursor derived from the
/// response.
pub(crate) fn advance_cursor(total_items: usize, current: &Cursor, next: Cursor) -> Cursor {
    if total_items == 0 {
        current.clone()
    } else {
        next
    }
}

/// Applies the crate-wide rendition rule: items matched but none carries the
/// configured rendition is an error naming that rendition; zero items is a
/// legitimate empty result.
pub(crate) fn finish_urls(
    provider: &'static str,
    rendition: &str,
    total_items: usize,
    urls: Vec<String>,
) -> Result<Vec<String>, ProviderError> {
    if total_items > 0 && urls.is_empty() {
        return Err(ProviderError::rendition_not_available(provider, rendition));
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings(provider: &str) -> ProviderConfiguration {
        ProviderConfiguration {
            provider: provider.to_string(),
            api_key: "key".to_string(),
            rendition: "original".to_string(),
            display_mode: "embedded".to_string(),
            ..ProviderConfiguration::default()
        }
    }

    #[test]
    fn test_selects_each_known_provider() {
        for (name, expected) in [("giphy", "giphy"), ("tenor", "tenor"), ("gfycat", "gfycat")] {
            let provider = select_provider(&base_settings(name)).unwrap();
            assert_eq!(provider.name(), expected);
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = select_provider(&base_settings("imgur")).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownProvider { .. }));
    }

    #[test]
    fn test_key_gated_provider_without_key_is_rejected() {
        let mut settings = base_settings("tenor");
        settings.api_key = String::new();

        let err = select_provider(&settings).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingApiKey { .. }));
    }

    #[test]
    fn test_keyless_provider_without_key_is_accepted() {
        let mut settings = base_settings("gfycat");
        settings.api_key = String::new();

        assert!(select_provider(&settings).is_ok());
    }

    #[test]
    fn test_missing_rendition_is_rejected() {
        let mut settings = base_settings("giphy");
        settings.rendition = "  ".to_string();

        let err = select_provider(&settings).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingRendition));
    }

    #[test]
    fn test_random_search_on_gfycat_is_rejected() {
        let mut settings = base_settings("gfycat");
        settings.random_search = true;

        let err = select_provider(&settings).unwrap_err();
        assert!(matches!(err, ConfigurationError::RandomUnsupported { .. }));
    }

    #[test]
    fn test_empty_page_keeps_cursor_unchanged() {
        let current = Cursor::new("30");
        let kept = advance_cursor(0, &current, Cursor::new("60"));
        assert_eq!(kept, current);
    }

    #[test]
    fn test_non_empty_page_adopts_the_response_cursor() {
        let next = advance_cursor(25, &Cursor::new("30"), Cursor::new("55"));
        assert_eq!(next.as_str(), "55");
    }

    #[test]
    fn test_rendition_rule_distinguishes_empty_from_unsupported() {
        assert!(finish_urls("giphy", "original", 0, vec![]).unwrap().is_empty());
        assert!(matches!(
            finish_urls("giphy", "original", 3, vec![]),
            Err(ProviderError::RenditionNotAvailable { .. })
        ));
        let urls = finish_urls("giphy", "original", 2, vec!["u".to_string()]).unwrap();
        assert_eq!(urls.len(), 1);
    }
}
