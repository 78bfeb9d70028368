//! Outbound API contracts.
//!
//! The chat platform and the issue tracker are external collaborators. The
//! service layer talks to them only through these traits; HTTP
//! implementations live in [`crate::infrastructure::http`], and mocks are
//! generated with `mockall` for `cfg(test)`.

pub mod chat_platform;
pub mod error;
pub mod issue_tracker;

pub use chat_platform::ChatPlatform;
pub use error::GatewayError;
pub use issue_tracker::IssueTracker;

#[cfg(test)]
pub use chat_platform::MockChatPlatform;
#[cfg(test)]
pub use issue_tracker::MockIssueTracker;
