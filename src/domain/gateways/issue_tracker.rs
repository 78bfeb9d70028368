//! Issue tracker contract.

use super::GatewayError;
use crate::domain::entities::{CreatedIssue, NewIssue, RepositoryTarget};
use async_trait::async_trait;

/// Opens issues in an external tracker.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::GitHubClient`] - GitHub REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates an issue in `repository`. Called at most once per request.
    async fn create_issue(
        &self,
        repository: &RepositoryTarget,
        issue: NewIssue,
    ) -> Result<CreatedIssue, GatewayError>;
}
