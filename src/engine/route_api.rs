use super::Engine;

use async_trait::async_trait;

use crate::{api::RouteAPI, entities::Route, error::Error, routing};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compute_route(&self) -> Result<Route, Error> {
        let snapshot = self.store.list().await;

        let stops = routing::nearest_neighbor_tour(&snapshot);
        let total_distance_m = routing::tour_length_m(&stops);

        tracing::debug!(stops = stops.len(), total_distance_m, "computed route");

        Ok(Route::new(stops, total_distance_m))
    }
}
