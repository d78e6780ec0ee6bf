//! GIF provider port definition.

use async_trait::async_trait;

use crate::domain::entities::{ProviderResult, SearchQuery};
use crate::domain::errors::ProviderError;

/// Port for GIF search backends.
///
/// One implementation is selected at configuration time; provider-specific
/// URL templates, parameter names, and cursor encodings never leak past it.
#[async_trait]
pub trait GifProviderPort: Send + Sync + std::fmt::Debug {
    /// Stable provider name used for logging and error tags.
    fn name(&self) -> &'static str;

    /// Attribution line appended to rendered messages, may be empty.
    fn attribution(&self) -> &str;

    /// Runs one search (or random) call against the backend.
    ///
    /// An empty result is the legitimate "nothing matched" outcome and keeps
    /// the query's cursor unchanged.
    async fn search(&self, query: &SearchQuery) -> Result<ProviderResult, ProviderError>;
}
