//! # Doc Up
//!
//! Turns Mattermost posts into GitHub documentation request issues.
//!
//! A user picks a post in Mattermost and asks for it to be documented. The
//! chat web client calls `POST /create` with the post id, a title, a body and
//! a category. The service opens an issue in the repository configured for
//! that category and replies in the post's thread with a link to the issue.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Request model, routing, gateway traits, message text
//! - **Application Layer** ([`application`]) - The documentation request workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - Mattermost and GitHub REST clients
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."
//! export MATTERMOST_URL="https://chat.example.com"
//! export MATTERMOST_TOKEN="..."
//! export DOCUP_DEVELOPER_REPOSITORY="mattermost/mattermost-developer-documentation"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::routing_store::RoutingStore;
    pub use crate::application::services::DocRequestService;
    pub use crate::domain::entities::{Category, DocRequest, IssueRouting};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
