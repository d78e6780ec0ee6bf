//! Entity definitions for the GIF plugin domain.

/// In-flight preview state carried inside action buttons.
pub mod action_context;
/// Provider and display-mode vocabulary.
pub mod config;
/// Post drafts and interactive actions sent to the chat host.
pub mod post;
/// Search queries, results, and pagination cursors.
pub mod search;

pub use action_context::ActionContext;
pub use config::{DisplayMode, ProviderKind};
pub use post::{MessageAttachment, PostAction, PostDraft};
pub use search::{Cursor, ProviderResult, SearchQuery};
