//! Category to repository routing.

use super::{Category, LabelSet, RepositoryTarget, RepositoryTargetError};

/// Configured repository for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySlot {
    /// No repository configured; requests for this category are refused.
    Unset,
    Valid(RepositoryTarget),
    /// The configured string is malformed. Kept so the defect surfaces as a
    /// server error instead of being mistaken for an unset category.
    Invalid(RepositoryTargetError),
}

impl RepositorySlot {
    /// Builds a slot from a raw configuration value.
    ///
    /// Only an empty value means unset. A whitespace-only value is a
    /// malformed repository, not a missing one.
    pub fn from_config(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Unset;
        }
        match raw.trim().parse() {
            Ok(target) => Self::Valid(target),
            Err(e) => Self::Invalid(e),
        }
    }
}

/// Failure to resolve a category to a repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no repository configured for category '{0}'")]
    Unrouted(Category),

    #[error("misconfigured repository for category '{category}': {source}")]
    Misconfigured {
        category: Category,
        source: RepositoryTargetError,
    },
}

/// Immutable routing snapshot: one slot per category plus shared labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRouting {
    admin: RepositorySlot,
    developer: RepositorySlot,
    handbook: RepositorySlot,
    labels: LabelSet,
}

impl IssueRouting {
    pub fn new(
        admin: RepositorySlot,
        developer: RepositorySlot,
        handbook: RepositorySlot,
        labels: LabelSet,
    ) -> Self {
        Self {
            admin,
            developer,
            handbook,
            labels,
        }
    }

    /// Builds routing from raw configuration strings.
    pub fn from_raw(admin: &str, developer: &str, handbook: &str, labels: &str) -> Self {
        Self::new(
            RepositorySlot::from_config(admin),
            RepositorySlot::from_config(developer),
            RepositorySlot::from_config(handbook),
            LabelSet::parse(labels),
        )
    }

    pub fn slot(&self, category: Category) -> &RepositorySlot {
        match category {
            Category::Admin => &self.admin,
            Category::Developer => &self.developer,
            Category::Handbook => &self.handbook,
        }
    }

    /// Resolves the repository that receives issues for `category`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Unrouted`] when nothing is configured for the category
    /// - [`RouteError::Misconfigured`] when the configured string is malformed
    pub fn resolve(&self, category: Category) -> Result<&RepositoryTarget, RouteError> {
        match self.slot(category) {
            RepositorySlot::Valid(target) => Ok(target),
            RepositorySlot::Unset => Err(RouteError::Unrouted(category)),
            RepositorySlot::Invalid(source) => Err(RouteError::Misconfigured {
                category,
                source: source.clone(),
            }),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Categories that currently route to a valid repository.
    pub fn routed_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| matches!(self.slot(*c), RepositorySlot::Valid(_)))
            .collect()
    }

    /// Checks every slot, returning the first malformed one.
    ///
    /// Run when configuration is loaded so a bad repository string stops
    /// startup (or a reload) instead of failing individual requests.
    pub fn validate(&self) -> Result<(), RouteError> {
        for category in Category::ALL {
            if let RepositorySlot::Invalid(source) = self.slot(category) {
                return Err(RouteError::Misconfigured {
                    category,
                    source: source.clone(),
                });
            }
        }
        Ok(())
    }
}
