//! REST API clients built on `reqwest`.
//!
//! Clients are created once at startup with their authentication headers and
//! shared by all requests. No retries: a failed call fails the request.

mod github_client;
mod mattermost_client;
mod response;

pub use github_client::GitHubClient;
pub use mattermost_client::MattermostClient;
