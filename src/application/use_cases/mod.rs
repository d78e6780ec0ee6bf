//! Workflow use cases.

mod post_gif_use_case;
mod preview_use_case;

pub use post_gif_use_case::PostGifUseCase;
pub use preview_use_case::{PreviewUseCase, ROUTE_CANCEL, ROUTE_SEND, ROUTE_SHUFFLE};

/// User-facing notice for the legitimate "nothing matched" outcome.
pub(crate) fn no_match_text(keywords: &str) -> String {
    format!("No GIF matched \"{keywords}\".")
}
