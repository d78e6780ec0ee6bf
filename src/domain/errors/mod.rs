//! Domain error types.
//!
//! Every error exposes a stable `source_tag` so log lines from different
//! layers can be correlated.

mod command_error;
mod config_error;
mod host_error;
mod plugin_error;
mod protocol_error;
mod provider_error;

pub use command_error::CommandParseError;
pub use config_error::ConfigurationError;
pub use host_error::HostError;
pub use plugin_error::PluginError;
pub use protocol_error::ProtocolError;
pub use provider_error::ProviderError;
