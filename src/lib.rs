//! Gifdeck - a chat-command GIF search and preview plugin core.
//!
//! This crate implements the host-independent core of a slash-command GIF
//! integration: provider clients for several third-party GIF search backends,
//! the stateless preview/shuffle/send/cancel workflow, and the command-line
//! grammar that splits user text into a search phrase and an optional caption.
//! The chat host itself (command registration, callback authentication, post
//! storage and delivery) is reached through ports and stays outside the crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing provider adapters and configuration.
pub mod infrastructure;
/// Presentation layer containing the host-facing dispatch surface.
pub mod presentation;

/// Current version of the plugin core.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin name.
pub const NAME: &str = "gifdeck";
