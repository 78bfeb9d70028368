//! Core domain entities for documentation requests.
//!
//! # Entity Types
//!
//! - [`Category`] - Request kind selecting the target repository
//! - [`DocRequest`] - Parsed `POST /create` payload
//! - [`RepositoryTarget`] - Validated `owner/name` pair
//! - [`LabelSet`] - Labels attached to every created issue
//! - [`IssueRouting`] - Category to repository mapping plus labels
//! - [`ChatUser`], [`SourcePost`], [`NewPost`] - Chat platform data
//! - [`NewIssue`], [`CreatedIssue`] - Issue tracker data

pub mod category;
pub mod doc_request;
pub mod issue;
pub mod labels;
pub mod post;
pub mod repository_target;
pub mod routing;
pub mod user;

pub use category::{Category, UnknownCategory};
pub use doc_request::DocRequest;
pub use issue::{CreatedIssue, NewIssue};
pub use labels::LabelSet;
pub use post::{NewPost, SourcePost};
pub use repository_target::{RepositoryTarget, RepositoryTargetError};
pub use routing::{IssueRouting, RepositorySlot, RouteError};
pub use user::ChatUser;
