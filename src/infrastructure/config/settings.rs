//! Host-supplied plugin configuration.

use serde::Deserialize;

/// Raw configuration as supplied by the host.
///
/// Validated when installed into the [`super::ConfigStore`]; immutable once
/// installed and only ever replaced as a whole unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfiguration {
    /// Provider name: `giphy`, `tenor`, or `gfycat`.
    pub provider: String,
    /// API key, mandatory for key-gated providers.
    pub api_key: String,
    /// Rendition name to decode from provider responses.
    pub rendition: String,
    /// Content-rating filter, passed through to the provider when non-empty.
    pub rating: String,
    /// Locale filter, passed through to the provider when non-empty.
    pub language: String,
    /// Display mode: `embedded` or `full_url`.
    pub display_mode: String,
    /// Use the provider's random mode instead of ranked search.
    pub random_search: bool,
    /// Disable the preview command entirely.
    pub disable_preview: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_from_host_json() {
        let config: ProviderConfiguration = serde_json::from_value(json!({
            "provider": "giphy",
            "api_key": "k",
            "rendition": "fixed_height_small",
            "display_mode": "embedded",
            "random_search": true
        }))
        .unwrap();

        assert_eq!(config.provider, "giphy");
        assert!(config.random_search);
        assert!(!config.disable_preview);
        assert!(config.rating.is_empty());
    }

    #[test]
    fn test_equal_configurations_compare_equal() {
        let a = ProviderConfiguration {
            provider: "tenor".to_string(),
            ..ProviderConfiguration::default()
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
