//! Chat host port definition.

use async_trait::async_trait;

use crate::domain::entities::PostDraft;
use crate::domain::errors::HostError;

/// Port for the chat host's post primitives.
///
/// The host owns storage, delivery, and permissions; the plugin only decides
/// what content and actions to send.
#[async_trait]
pub trait ChatHostPort: Send + Sync {
    /// Creates a public post and returns its id.
    async fn create_post(&self, draft: &PostDraft) -> Result<String, HostError>;

    /// Sends a post visible only to `user_id` and returns its id.
    async fn send_ephemeral(&self, user_id: &str, draft: &PostDraft) -> Result<String, HostError>;

    /// Replaces the content of an existing ephemeral post.
    async fn update_ephemeral(
        &self,
        post_id: &str,
        user_id: &str,
        draft: &PostDraft,
    ) -> Result<(), HostError>;

    /// Deletes an ephemeral post.
    async fn delete_ephemeral(&self, post_id: &str, user_id: &str) -> Result<(), HostError>;
}

#[cfg(test)]
pub mod mock {
    use parking_lot::Mutex;

    use super::*;

    /// One recorded host interaction.
    #[derive(Debug, Clone, PartialEq, Eq)]
    #[allow(missing_docs)]
    pub enum HostCall {
        CreatePost(PostDraft),
        SendEphemeral { user_id: String, draft: PostDraft },
        UpdateEphemeral {
            post_id: String,
            user_id: String,
            draft: PostDraft,
        },
        DeleteEphemeral { post_id: String, user_id: String },
    }

    /// Mock host recording every call for assertions.
    #[derive(Default)]
    pub struct MockChatHost {
        calls: Mutex<Vec<HostCall>>,
    }

    impl MockChatHost {
        /// Creates an empty mock host.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns every recorded call, in order.
        pub fn recorded_calls(&self) -> Vec<HostCall> {
            self.calls.lock().clone()
        }

        /// Returns the recorded public posts.
        pub fn created_posts(&self) -> Vec<PostDraft> {
            self.calls
                .lock()
                .iter()
                .filter_map(|call| match call {
                    HostCall::CreatePost(draft) => Some(draft.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    #[async_trait]
    impl ChatHostPort for MockChatHost {
        async fn create_post(&self, draft: &PostDraft) -> Result<String, HostError> {
            let mut calls = self.calls.lock();
            calls.push(HostCall::CreatePost(draft.clone()));
            Ok(format!("post-{}", calls.len()))
        }

        async fn send_ephemeral(
            &self,
            user_id: &str,
            draft: &PostDraft,
        ) -> Result<String, HostError> {
            let mut calls = self.calls.lock();
            calls.push(HostCall::SendEphemeral {
                user_id: user_id.to_string(),
                draft: draft.clone(),
            });
            Ok(format!("ephemeral-{}", calls.len()))
        }

        async fn update_ephemeral(
            &self,
            post_id: &str,
            user_id: &str,
            draft: &PostDraft,
        ) -> Result<(), HostError> {
            self.calls.lock().push(HostCall::UpdateEphemeral {
                post_id: post_id.to_string(),
                user_id: user_id.to_string(),
                draft: draft.clone(),
            });
            Ok(())
        }

        async fn delete_ephemeral(&self, post_id: &str, user_id: &str) -> Result<(), HostError> {
            self.calls.lock().push(HostCall::DeleteEphemeral {
                post_id: post_id.to_string(),
                user_id: user_id.to_string(),
            });
            Ok(())
        }
    }
}
