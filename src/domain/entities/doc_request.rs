//! Parsed documentation request.

use super::Category;

/// A caller's request to document a chat post.
///
/// Built from the `POST /create` payload once the category has been
/// recognised; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRequest {
    pub category: Category,
    pub title: String,
    pub body: String,
    /// Id of the chat post being documented.
    pub post_id: String,
}
