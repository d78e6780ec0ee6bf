//! Direct-post workflow: search once, post the best match immediately.

use std::sync::Arc;

use tracing::{debug, info};

use super::no_match_text;
use crate::application::dto::{CommandRequest, CommandResponse};
use crate::application::services::command_parser::ParsedCommand;
use crate::application::services::message_renderer::render;
use crate::domain::entities::{DisplayMode, PostDraft, SearchQuery};
use crate::domain::errors::PluginError;
use crate::domain::ports::{ChatHostPort, GifProviderPort};

/// Posts the provider's best match publicly without a preview step.
pub struct PostGifUseCase {
    provider: Arc<dyn GifProviderPort>,
    host: Arc<dyn ChatHostPort>,
    display_mode: DisplayMode,
    random: bool,
}

impl PostGifUseCase {
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

    /// Runs one search with an empty cursor and posts the best match.
    ///
    /// # Errors
    /// Propagates provider and host failures; an empty result is not an error
    /// and yields an ephemeral "no match" reply instead.
    pub async fn execute(
        &self,
        parsed: &ParsedCommand,
        request: &CommandRequest,
    ) -> Result<CommandResponse, PluginError> {
        let query = SearchQuery::first_page(&parsed.keywords, self.random);
        debug!(
            provider = self.provider.name(),
            keywords = %parsed.keywords,
            "Searching for direct post"
        );

        let result = self.provider.search(&query).await?;

        let Some(url) = result.best_match() else {
            info!(
                provider = self.provider.name(),
                keywords = %parsed.keywords,
                "No GIF matched"
            );
            return Ok(CommandResponse::ephemeral(no_match_text(&parsed.keywords)));
        };

        let message = render(
            self.display_mode,
            &parsed.keywords,
            &parsed.caption,
            url,
            self.provider.attribution(),
        );
        self.host
            .create_post(&PostDraft::plain(
                &request.channel_id,
                &request.root_id,
                message,
            ))
            .await?;

        Ok(CommandResponse::silent())
    }
}
