//! Documentation request categories.

use std::fmt;
use std::str::FromStr;

/// Kind of documentation being requested.
///
/// Each category is routed to its own repository, configured per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Admin,
    Developer,
    Handbook,
}

impl Category {
    /// Every category, in configuration order.
    pub const ALL: [Category; 3] = [Category::Admin, Category::Developer, Category::Handbook];

    /// Wire name used in the `type` field of a request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Admin => "admin",
            Category::Developer => "developer",
            Category::Handbook => "handbook",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a request names a category outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown documentation category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses the wire name. Matching is exact: `"Admin"` is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Category::Admin),
            "developer" => Ok(Category::Developer),
            "handbook" => Ok(Category::Handbook),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Admin".parse::<Category>(),
            Err(UnknownCategory("Admin".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert!("".parse::<Category>().is_err());
        assert!("marketing".parse::<Category>().is_err());
    }
}
