//! Plugin configuration.

mod settings;
mod store;

pub use settings::ProviderConfiguration;
pub use store::{ConfigStore, InstalledConfig};
