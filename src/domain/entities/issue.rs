//! Issue tracker data.

use serde::{Deserialize, Serialize};

/// Payload for opening a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// An issue returned by the tracker after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    /// Browsable URL shown to chat users.
    pub html_url: String,
}
