//! Presentation layer: the host-facing dispatch surface.

/// Command and callback dispatching.
pub mod dispatcher;
/// Callback responses and error → status mapping.
pub mod http;

pub use dispatcher::{Dispatcher, TRIGGER_GIF, TRIGGER_GIF_PREVIEW};
pub use http::CallbackResponse;
