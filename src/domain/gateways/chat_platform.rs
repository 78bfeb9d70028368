//! Chat platform contract.

use super::GatewayError;
use crate::domain::entities::{ChatUser, NewPost, SourcePost};
use async_trait::async_trait;

/// Operations this service needs from the chat server.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::MattermostClient`] - Mattermost REST API v4
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Fetches a user profile by id.
    async fn get_user(&self, user_id: &str) -> Result<ChatUser, GatewayError>;

    /// Fetches an existing post by id.
    async fn get_post(&self, post_id: &str) -> Result<SourcePost, GatewayError>;

    /// Creates a post and returns its id.
    async fn create_post(&self, post: NewPost) -> Result<String, GatewayError>;

    /// Public base URL users reach the chat server on, used for permalinks.
    fn site_url(&self) -> String;

    /// Returns true when the chat server answers its health ping.
    async fn ping(&self) -> bool;
}
