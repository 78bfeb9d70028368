//! Chat posts read from and written to the chat platform.

use serde::{Deserialize, Serialize};

/// An existing post that a documentation request refers to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcePost {
    pub id: String,
    pub channel_id: String,
    /// Id of the first post in the thread; empty when this post starts none.
    #[serde(default)]
    pub root_id: String,
    #[serde(default)]
    pub message: String,
}

impl SourcePost {
    /// Returns the id replies to this post must be anchored to.
    pub fn thread_root(&self) -> &str {
        if self.root_id.is_empty() {
            &self.id
        } else {
            &self.root_id
        }
    }
}

/// A post to be created on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub user_id: String,
    pub channel_id: String,
    pub root_id: String,
    pub message: String,
}
