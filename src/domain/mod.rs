//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{ActionContext, Cursor, ProviderResult, SearchQuery};
pub use errors::{PluginError, ProviderError};
pub use ports::{ChatHostPort, GifProviderPort};
