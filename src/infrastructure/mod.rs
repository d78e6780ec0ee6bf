//! Infrastructure layer with provider adapters and configuration.

/// Plugin configuration and the process-wide configuration store.
pub mod config;
/// GIF provider client adapters.
pub mod providers;

pub use config::{ConfigStore, InstalledConfig, ProviderConfiguration};
pub use providers::{GfycatClient, GiphyClient, TenorClient, select_provider};
