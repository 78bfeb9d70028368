//! Domain layer containing the documentation request model.
//!
//! Everything here is transient and request-scoped: nothing is persisted by
//! this service. Chat and issue tracker access goes through the traits in
//! [`gateways`], implemented in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Request, post, user, issue and routing types
//! - [`gateways`] - Outbound API contracts (chat platform, issue tracker)
//! - [`messages`] - Issue body, permalink and confirmation reply composition
//!
//! # Request Flow
//!
//! 1. HTTP handler authenticates the caller and parses a [`entities::DocRequest`]
//! 2. [`entities::IssueRouting`] resolves the category to a repository
//! 3. The chat platform supplies the requesting user and the source post
//! 4. An issue is opened through [`gateways::IssueTracker`]
//! 5. A reply is posted back into the source thread

pub mod entities;
pub mod gateways;
pub mod messages;
