mod location_api;
mod route_api;

use crate::api::API;
use crate::store::LocationStore;

/// Implements the service API over the in-memory location store and the
/// routing kernel.
#[derive(Debug)]
pub struct Engine {
    store: LocationStore,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Self {
        Self {
            store: LocationStore::new(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl API for Engine {}

#[test]
fn full_location_and_route_cycle() {
    use crate::api::{LocationAPI, RouteAPI};
    use tokio_test::block_on;

    let engine = Engine::new();

    block_on(engine.create_location("Tower Bridge".into(), 51.5055, -0.0754)).unwrap();
    block_on(engine.create_location("Big Ben".into(), 51.5007, -0.1246)).unwrap();
    block_on(engine.create_location("St Paul's".into(), 51.5138, -0.0984)).unwrap();

    let locations = block_on(engine.list_locations()).unwrap();
    assert_eq!(locations.len(), 3);

    let route = block_on(engine.compute_route()).unwrap();
    assert_eq!(route.stops.len(), 3);
    assert!(route.total_distance_m > 0.);

    let mut ids: Vec<i64> = route.stops.iter().map(|l| l.id).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        locations.iter().map(|l| l.id).collect::<Vec<_>>(),
        "route is a permutation of the saved locations"
    );

    assert_eq!(block_on(engine.clear_locations()).unwrap(), 3);
    assert!(block_on(engine.list_locations()).unwrap().is_empty());

    let route = block_on(engine.compute_route()).unwrap();
    assert!(route.stops.is_empty());
    assert_eq!(route.total_distance_m, 0.);
}
