//! Documentation request workflow.

use std::sync::Arc;

use crate::domain::entities::{CreatedIssue, DocRequest, IssueRouting, NewIssue, NewPost};
use crate::domain::gateways::{ChatPlatform, GatewayError, IssueTracker};
use crate::domain::messages;
use crate::error::AppError;

/// Turns a chat post into a documentation issue and replies in its thread.
///
/// Each step is a precondition for the next; the first failure aborts the
/// request, so an issue is never opened without a resolved user and post, and
/// no reply is posted without an issue.
pub struct DocRequestService<C: ChatPlatform, T: IssueTracker> {
    chat: Arc<C>,
    tracker: Arc<T>,
}

impl<C: ChatPlatform, T: IssueTracker> DocRequestService<C, T> {
    /// Creates a new documentation request service.
    pub fn new(chat: Arc<C>, tracker: Arc<T>) -> Self {
        Self { chat, tracker }
    }

    /// Runs the workflow for a request sent by `user_id`.
    ///
    /// `routing` is the configuration snapshot taken when the request arrived.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the category has no repository.
    /// Returns [`AppError::Internal`] if the repository is misconfigured, the
    /// user or post cannot be fetched, or either write to an upstream fails.
    pub async fn submit(
        &self,
        routing: &IssueRouting,
        user_id: &str,
        request: DocRequest,
    ) -> Result<CreatedIssue, AppError> {
        let repository = routing.resolve(request.category)?;
        let labels = routing.labels().to_vec();

        let user = self
            .chat
            .get_user(user_id)
            .await
            .map_err(|e| upstream("Unable to get user", e))?;

        let post = self
            .chat
            .get_post(&request.post_id)
            .await
            .map_err(|e| upstream("Unable to get post", e))?;

        let site_url = self.chat.site_url();
        let permalink = messages::permalink(&site_url, &post.id)
            .map_err(|e| AppError::internal(format!("Invalid site URL '{site_url}': {e}")))?;

        let issue = NewIssue {
            title: messages::issue_title(&request.title),
            body: messages::issue_body(&user.username, &site_url, &request.body, &permalink),
            labels,
        };

        let created = self
            .tracker
            .create_issue(repository, issue)
            .await
            .map_err(|e| upstream("Error creating GitHub issue", e))?;

        tracing::info!(
            category = %request.category,
            repository = %repository,
            issue = created.number,
            user = %user.username,
            "Created documentation issue"
        );

        let reply = NewPost {
            user_id: user_id.to_string(),
            channel_id: post.channel_id.clone(),
            root_id: post.thread_root().to_string(),
            message: messages::confirmation_message(&permalink, &created.html_url),
        };

        self.chat
            .create_post(reply)
            .await
            .map_err(|e| upstream("Unable to create post", e))?;

        Ok(created)
    }
}

fn upstream(context: &str, e: GatewayError) -> AppError {
    AppError::internal(format!("{context}: {e}"))
}
