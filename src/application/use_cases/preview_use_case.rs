//! Preview workflow: ephemeral preview with shuffle, send, and cancel.
//!
//! There is no server-side session. The entire workflow state travels inside
//! the action buttons' context and is reconstructed on every callback, so a
//! stale context can be replayed; no duplicate-send guard exists.

use std::sync::Arc;

use tracing::{debug, info};

use super::no_match_text;
use crate::application::dto::{CommandRequest, CommandResponse};
use crate::application::services::command_parser::ParsedCommand;
use crate::application::services::message_renderer::render;
use crate::domain::entities::action_context::CONTEXT_GIF_URLS;
use crate::domain::entities::{
    ActionContext, DisplayMode, MessageAttachment, PostAction, PostDraft, SearchQuery,
};
use crate::domain::errors::{PluginError, ProtocolError};
use crate::domain::ports::{ChatHostPort, GifProviderPort};

/// Callback path for the shuffle action.
pub const ROUTE_SHUFFLE: &str = "/shuffle";
/// Callback path for the cancel action.
pub const ROUTE_CANCEL: &str = "/cancel";
/// Callback path for the send action.
pub const ROUTE_SEND: &str = "/send";

/// Drives the preview workflow from creation to a terminal action.
pub struct PreviewUseCase {
    provider: Arc<dyn GifProviderPort>,
    host: Arc<dyn ChatHostPort>,
    display_mode: DisplayMode,
    random: bool,
}

impl PreviewUseCase {
    /// Creates the use case for the installed provider and display mode.
    #[must_use]
    pub fn new(
        provider: Arc<dyn GifProviderPort>,
        host: Arc<dyn ChatHostPort>,
        display_mode: DisplayMode,
        random: bool,
    ) -> Self {
        Self {
            provider,
            host,
            display_mode,
            random,
        }
    }

    /// Opens an ephemeral preview with Cancel, Shuffle, and Send actions.
    ///
    /// # Errors
    /// Propagates provider and host failures; an empty result yields an
    /// ephemeral "no match" reply instead.
    pub async fn create(
        &self,
        parsed: &ParsedCommand,
        request: &CommandRequest,
    ) -> Result<CommandResponse, PluginError> {
        let query = SearchQuery::first_page(&parsed.keywords, self.random);
        debug!(
            provider = self.provider.name(),
            keywords = %parsed.keywords,
            "Searching for preview"
        );

        let result = self.provider.search(&query).await?;
        if result.is_empty() {
            return Ok(CommandResponse::ephemeral(no_match_text(&parsed.keywords)));
        }

        let context = ActionContext {
            keywords: parsed.keywords.clone(),
            caption: parsed.caption.clone(),
            candidate_urls: result.urls,
            cursor: result.next_cursor,
            root_id: request.root_id.clone(),
            channel_id: request.channel_id.clone(),
            user_id: request.user_id.clone(),
            post_id: String::new(),
        };
        let draft = self.preview_draft(&context);
        self.host.send_ephemeral(&request.user_id, &draft).await?;

        Ok(CommandResponse::silent())
    }

    /// Replaces the preview's candidates with the next provider page.
    ///
    /// An empty page leaves the existing preview untouched and tells the user
    /// there is nothing further. A provider failure is propagated as the
    /// failure of this single action; the previous preview is not restored.
    ///
    /// # Errors
    /// Propagates provider and host failures.
    pub async fn shuffle(&self, context: ActionContext) -> Result<(), PluginError> {
        let query = SearchQuery::continuation(
            context.keywords.clone(),
            context.cursor.clone(),
            self.random,
        );
        debug!(
            provider = self.provider.name(),
            keywords = %context.keywords,
            cursor = %context.cursor,
            "Shuffling preview"
        );

        let result = self.provider.search(&query).await?;
        if result.is_empty() {
            let notice = PostDraft::plain(
                &context.channel_id,
                "",
                format!("No more GIF results for \"{}\".", context.keywords),
            );
            self.host.send_ephemeral(&context.user_id, &notice).await?;
            return Ok(());
        }

        let next = context.with_candidates(result.urls, result.next_cursor);
        let draft = self.preview_draft(&next);
        self.host
            .update_ephemeral(&next.post_id, &next.user_id, &draft)
            .await?;
        Ok(())
    }

    /// Posts the already-selected candidate publicly and drops the preview.
    ///
    /// # Errors
    /// Propagates host failures.
    pub async fn send(&self, context: ActionContext) -> Result<(), PluginError> {
        let url = context
            .best_candidate()
            .ok_or(ProtocolError::missing_field(CONTEXT_GIF_URLS))?;
        let message = render(
            self.display_mode,
            &context.keywords,
            &context.caption,
            url,
            self.provider.attribution(),
        );
        self.host
            .create_post(&PostDraft::plain(
                &context.channel_id,
                &context.root_id,
                message,
            ))
            .await?;
        self.host
            .delete_ephemeral(&context.post_id, &context.user_id)
            .await?;
        info!(keywords = %context.keywords, "Preview sent");
        Ok(())
    }

    /// Drops the preview without posting.
    ///
    /// # Errors
    /// Propagates host failures.
    pub async fn cancel(&self, context: ActionContext) -> Result<(), PluginError> {
        self.host
            .delete_ephemeral(&context.post_id, &context.user_id)
            .await?;
        info!(keywords = %context.keywords, "Preview canceled");
        Ok(())
    }

    fn preview_draft(&self, context: &ActionContext) -> PostDraft {
        let url = context.best_candidate().unwrap_or_default();
        let text = render(
            self.display_mode,
            &context.keywords,
            &context.caption,
            url,
            self.provider.attribution(),
        );
        let map = context.to_context_map();
        let attachment = MessageAttachment {
            text,
            actions: vec![
                PostAction::new("Cancel", ROUTE_CANCEL, map.clone()),
                PostAction::new("Shuffle", ROUTE_SHUFFLE, map.clone()),
                PostAction::new("Send", ROUTE_SEND, map),
            ],
        };
        PostDraft {
            channel_id: context.channel_id.clone(),
            root_id: context.root_id.clone(),
            message: format!("Select a GIF for \"{}\"", context.keywords),
            attachments: vec![attachment],
        }
    }
}
