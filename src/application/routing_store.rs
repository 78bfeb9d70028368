//! Shared, swappable routing configuration.

use std::sync::{Arc, RwLock};

use crate::domain::entities::IssueRouting;

/// Holds the current [`IssueRouting`] snapshot.
///
/// Requests take a snapshot once and keep it for their whole lifetime, so a
/// reload never changes routing halfway through a request.
#[derive(Clone)]
pub struct RoutingStore {
    current: Arc<RwLock<Arc<IssueRouting>>>,
}

impl RoutingStore {
    pub fn new(routing: IssueRouting) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(routing))),
        }
    }

    /// Returns the active snapshot.
    pub fn snapshot(&self) -> Arc<IssueRouting> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            // Writers only swap an Arc, so a poisoned lock still holds a
            // complete snapshot.
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replaces the active snapshot. In-flight requests keep the old one.
    pub fn replace(&self, routing: IssueRouting) {
        let next = Arc::new(routing);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;

    #[test]
    fn test_snapshot_survives_replace() {
        let store = RoutingStore::new(IssueRouting::from_raw("", "org/old", "", ""));
        let before = store.snapshot();

        store.replace(IssueRouting::from_raw("", "org/new", "", ""));

        assert_eq!(before.resolve(Category::Developer).unwrap().name, "old");
        assert_eq!(
            store.snapshot().resolve(Category::Developer).unwrap().name,
            "new"
        );
    }

    #[test]
    fn test_clones_share_state() {
        let store = RoutingStore::new(IssueRouting::from_raw("", "", "", ""));
        let handle = store.clone();

        handle.replace(IssueRouting::from_raw("a/b", "", "", ""));

        assert_eq!(store.snapshot().routed_categories(), vec![Category::Admin]);
    }
}
