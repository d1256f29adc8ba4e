use async_trait::async_trait;

use crate::entities::{Location, Route};
use crate::error::Error;

#[async_trait]
pub trait LocationAPI {
    async fn create_location(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location, Error>;

    async fn list_locations(&self) -> Result<Vec<Location>, Error>;

    async fn clear_locations(&self) -> Result<usize, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn compute_route(&self) -> Result<Route, Error>;
}

pub trait API: LocationAPI + RouteAPI {}
