//! Post drafts and interactive actions handed to the chat host.

use std::collections::BTreeMap;

use serde::Serialize;

/// A message the plugin asks the host to create or update.
///
/// The host decides storage and delivery; the draft only carries content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    /// Channel the post belongs to.
    pub channel_id: String,
    /// Thread root id, empty for a top-level post.
    pub root_id: String,
    /// Rendered message body.
    pub message: String,
    /// Interactive attachments, empty for plain posts.
    pub attachments: Vec<MessageAttachment>,
}

impl PostDraft {
    /// Creates a plain post draft without attachments.
    #[must_use]
    pub fn plain(
        channel_id: impl Into<String>,
        root_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            root_id: root_id.into(),
            message: message.into(),
            attachments: Vec::new(),
        }
    }

    /// Attaches an interactive attachment to the draft.
    #[must_use]
    pub fn with_attachment(mut self, attachment: MessageAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// An attachment carrying preview text and action buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageAttachment {
    /// Attachment body, rendered Markdown.
    pub text: String,
    /// Action buttons shown under the attachment.
    pub actions: Vec<PostAction>,
}

/// A single action button.
///
/// The `context` map is returned verbatim by the host when the button is
/// clicked; it is the sole carrier of workflow state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostAction {
    /// Button label.
    pub name: String,
    /// Callback path the host invokes on click.
    pub url: String,
    /// Opaque state returned verbatim with the callback.
    pub context: BTreeMap<String, String>,
}

impl PostAction {
    /// Creates an action button.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        context: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            context,
        }
    }
}
