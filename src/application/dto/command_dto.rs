//! Slash-command request and response DTOs.

use serde::{Deserialize, Serialize};

/// An incoming slash-command invocation as relayed by the host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandRequest {
    /// Full command line including the leading `/trigger`.
    pub command: String,
    /// User who typed the command.
    pub user_id: String,
    /// Channel the command was typed in.
    pub channel_id: String,
    /// Thread root id when the command was typed inside a thread.
    #[serde(default)]
    pub root_id: String,
}

/// Visibility of a synchronous command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible only to the invoking user.
    Ephemeral,
    /// Visible to the whole channel.
    InChannel,
}

/// Synchronous reply to a slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    /// Reply visibility.
    pub response_type: ResponseType,
    /// Reply body, empty when the plugin posted through the host instead.
    pub text: String,
}

impl CommandResponse {
    /// Creates a reply visible only to the invoking user.
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }

    /// Creates an empty reply for commands that post through the host.
    #[must_use]
    pub fn silent() -> Self {
        Self::ephemeral(String::new())
    }

    /// Returns whether the reply carries no text.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.text.is_empty()
    }
}
