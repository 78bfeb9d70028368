//! Chat platform user.

use serde::Deserialize;

/// The subset of a chat user profile this service reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub username: String,
}
