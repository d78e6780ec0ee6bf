//! Routes incoming commands and action callbacks.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::{ActionRequest, CommandRequest, CommandResponse};
use crate::application::services::command_parser;
use crate::application::use_cases::{
    PostGifUseCase, PreviewUseCase, ROUTE_CANCEL, ROUTE_SEND, ROUTE_SHUFFLE,
};
use crate::domain::entities::{ActionContext, PostDraft};
use crate::domain::errors::{ConfigurationError, PluginError, ProtocolError};
use crate::domain::ports::ChatHostPort;
use crate::infrastructure::config::{ConfigStore, InstalledConfig};
use crate::presentation::http::CallbackResponse;

/// Trigger word for the direct-post command.
pub const TRIGGER_GIF: &str = "gif";
/// Trigger word for the preview command.
pub const TRIGGER_GIF_PREVIEW: &str = "gifs";

/// Top-level entry point: routes commands and callbacks to their workflows.
pub struct Dispatcher {
    store: Arc<ConfigStore>,
    host: Arc<dyn ChatHostPort>,
}

impl Dispatcher {
    /// Creates a dispatcher over the configuration store and the chat host.
    #[must_use]
    pub fn new(store: Arc<ConfigStore>, host: Arc<dyn ChatHostPort>) -> Self {
        Self { store, host }
    }

    /// Handles one slash-command invocation.
    ///
    /// # Errors
    /// Returns an unsupported-trigger error for unknown commands, a parse
    /// error for malformed quoting (no provider call is made), and
    /// propagates configuration, provider, and host failures.
    pub async fn handle_command(
        &self,
        request: &CommandRequest,
    ) -> Result<CommandResponse, PluginError> {
        let (trigger, remainder) = split_trigger(&request.command)
            .ok_or_else(|| ProtocolError::unsupported_trigger(&request.command))?;
        let preview = match trigger {
            TRIGGER_GIF => false,
            TRIGGER_GIF_PREVIEW => true,
            _ => return Err(ProtocolError::unsupported_trigger(&request.command).into()),
        };
        debug!(trigger, user_id = %request.user_id, "Dispatching command");

        let config = self.store.snapshot()?;
        if preview && config.settings.disable_preview {
            return Err(ConfigurationError::PreviewDisabled.into());
        }

        let parsed = command_parser::parse(remainder)?;
        if parsed.keywords.is_empty() {
            return Ok(CommandResponse::ephemeral(usage_text(trigger)));
        }

        if preview {
            self.preview_use_case(&config).create(&parsed, request).await
        } else {
            PostGifUseCase::new(
                config.provider.clone(),
                self.host.clone(),
                config.display_mode,
                config.settings.random_search,
            )
            .execute(&parsed, request)
            .await
        }
    }

    /// Handles one action-callback invocation.
    ///
    /// `acting_user_id` is the host-authenticated user from the request
    /// header. Button clicks have no synchronous error channel, so failures
    /// are logged, surfaced as an ephemeral notice where possible, and mapped
    /// to a status code.
    pub async fn handle_action(
        &self,
        path: &str,
        acting_user_id: Option<&str>,
        body: &str,
    ) -> CallbackResponse {
        match self.dispatch_action(path, acting_user_id, body).await {
            Ok(()) => CallbackResponse::ok(),
            Err(error) => {
                warn!(
                    tag = error.source_tag(),
                    error = %error,
                    path,
                    "Callback failed"
                );
                self.notify_failure(acting_user_id, body, &error).await;
                CallbackResponse::from_error(&error)
            }
        }
    }

    async fn dispatch_action(
        &self,
        path: &str,
        acting_user_id: Option<&str>,
        body: &str,
    ) -> Result<(), PluginError> {
        // Unknown paths are rejected before authentication and parsing.
        let route = match path {
            ROUTE_SHUFFLE => ActionRoute::Shuffle,
            ROUTE_SEND => ActionRoute::Send,
            ROUTE_CANCEL => ActionRoute::Cancel,
            _ => return Err(ProtocolError::unknown_callback(path).into()),
        };
        let acting_user = acting_user_id.ok_or(ProtocolError::MissingActingUser)?;

        let envelope: ActionRequest = serde_json::from_str(body)
            .map_err(|e| ProtocolError::malformed(e.to_string()))?;
        let context =
            ActionContext::from_parts(&envelope.context, &envelope.channel_id, &envelope.post_id)?;
        if context.user_id != acting_user {
            return Err(ProtocolError::UserMismatch.into());
        }

        let config = self.store.snapshot()?;
        let use_case = self.preview_use_case(&config);
        match route {
            ActionRoute::Shuffle => use_case.shuffle(context).await,
            ActionRoute::Send => use_case.send(context).await,
            ActionRoute::Cancel => use_case.cancel(context).await,
        }
    }

    // Best effort: the envelope may itself be the malformed part.
    async fn notify_failure(&self, acting_user_id: Option<&str>, body: &str, error: &PluginError) {
        let Some(user_id) = acting_user_id else {
            return;
        };
        let Ok(envelope) = serde_json::from_str::<ActionRequest>(body) else {
            return;
        };
        if envelope.channel_id.is_empty() {
            return;
        }
        let notice = PostDraft::plain(
            &envelope.channel_id,
            "",
            format!("GIF action failed: {error}"),
        );
        if let Err(host_error) = self.host.send_ephemeral(user_id, &notice).await {
            warn!(error = %host_error, "Could not deliver failure notice");
        }
    }

    fn preview_use_case(&self, config: &InstalledConfig) -> PreviewUseCase {
        PreviewUseCase::new(
            config.provider.clone(),
            self.host.clone(),
            config.display_mode,
            config.settings.random_search,
        )
    }
}

enum ActionRoute {
    Shuffle,
    Send,
    Cancel,
}

fn split_trigger(command: &str) -> Option<(&str, &str)> {
    let stripped = command.trim_start().strip_prefix('/')?;
    match stripped.split_once(char::is_whitespace) {
        Some((trigger, remainder)) => Some((trigger, remainder)),
        None => Some((stripped, "")),
    }
}

fn usage_text(trigger: &str) -> String {
    format!("Usage: /{trigger} <keywords> [\"caption\"]")
}
