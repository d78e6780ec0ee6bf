//! Port definitions for external collaborators.

mod chat_host_port;
mod gif_provider_port;

pub use chat_host_port::ChatHostPort;
pub use gif_provider_port::GifProviderPort;
