//! Target repository for created issues.

use std::fmt;
use std::str::FromStr;

/// An `owner/name` repository reference.
///
/// Only constructed through [`FromStr`], so both components are always
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub owner: String,
    pub name: String,
}

/// Why a configured repository string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryTargetError {
    #[error("repository '{0}' must have the form owner/name")]
    WrongShape(String),

    #[error("repository '{0}' has an empty owner or name")]
    EmptyComponent(String),
}

impl FromStr for RepositoryTarget {
    type Err = RepositoryTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [owner, name] = parts.as_slice() else {
            return Err(RepositoryTargetError::WrongShape(s.to_string()));
        };

        if owner.is_empty() || name.is_empty() {
            return Err(RepositoryTargetError::EmptyComponent(s.to_string()));
        }

        Ok(Self {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
        })
    }
}

impl fmt::Display for RepositoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
