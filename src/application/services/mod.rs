//! Pure application services.

/// Command-line quoting grammar.
pub mod command_parser;
/// Caption and attribution rendering.
pub mod message_renderer;

pub use command_parser::{ParsedCommand, parse};
pub use message_renderer::render;
