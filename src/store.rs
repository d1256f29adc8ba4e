use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::entities::Location;
use crate::error::Error;

/// In-memory authoritative set of saved locations.
///
/// The backing vector is guarded by a single read-write lock; ids come from
/// an atomic counter bumped under the write guard, so ids stay unique under
/// concurrent adds and id order matches creation order. Readers observe
/// either the state before or after a mutation, never a partial one.
#[derive(Debug)]
pub struct LocationStore {
    locations: RwLock<Vec<Location>>,
    next_id: AtomicI64,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            locations: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Validates and appends a new location, preserving insertion order.
    /// On a validation failure the store is left untouched.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, name: String, latitude: f64, longitude: f64) -> Result<Location, Error> {
        let mut locations = self.locations.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let location = Location::new(id, name, latitude, longitude)?;

        locations.push(location.clone());

        Ok(location)
    }

    /// Snapshot of all saved locations in creation order.
    pub async fn list(&self) -> Vec<Location> {
        self.locations.read().await.clone()
    }

    /// Removes every saved location and returns how many were removed.
    /// Clearing an empty store is fine and returns 0.
    #[tracing::instrument(skip(self))]
    pub async fn clear_all(&self) -> usize {
        let mut locations = self.locations.write().await;

        let removed = locations.len();
        locations.clear();

        removed
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn add_then_list_preserves_creation_order() {
    use tokio_test::block_on;

    let store = LocationStore::new();

    block_on(store.add("first".into(), 10.0, 20.0)).unwrap();
    block_on(store.add("second".into(), 30.0, 40.0)).unwrap();
    block_on(store.add("third".into(), -5.0, 60.0)).unwrap();

    let locations = block_on(store.list());

    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    // strictly ascending ids imply uniqueness and creation order
    let ids: Vec<i64> = locations.iter().map(|l| l.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn rejected_add_leaves_store_unchanged() {
    use tokio_test::block_on;

    let store = LocationStore::new();

    block_on(store.add("kept".into(), 0.0, 0.0)).unwrap();

    assert!(block_on(store.add("  ".into(), 0.0, 0.0)).is_err());
    assert!(block_on(store.add("bad lat".into(), 95.0, 0.0)).is_err());
    assert!(block_on(store.add("bad lng".into(), 0.0, -200.0)).is_err());

    assert_eq!(block_on(store.list()).len(), 1);
}

#[test]
fn clear_all_reports_count_and_is_idempotent() {
    use tokio_test::block_on;

    let store = LocationStore::new();

    for i in 0..4 {
        block_on(store.add(format!("loc{}", i), i as f64, i as f64)).unwrap();
    }

    assert_eq!(block_on(store.clear_all()), 4);
    assert!(block_on(store.list()).is_empty());
    assert_eq!(block_on(store.clear_all()), 0);
}

#[test]
fn concurrent_adds_never_duplicate_ids() {
    use std::collections::HashSet;
    use std::sync::Arc;
    use tokio_test::block_on;

    block_on(async {
        let store = Arc::new(LocationStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add(format!("loc{}", i), 1.0, 2.0).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ids: HashSet<i64> = store.list().await.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 16);
    });
}
