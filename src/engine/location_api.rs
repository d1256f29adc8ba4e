use super::Engine;

use async_trait::async_trait;

use crate::{api::LocationAPI, entities::Location, error::Error};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_location(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location, Error> {
        let location = self.store.add(name, latitude, longitude).await?;

        tracing::info!(id = location.id, "saved location");

        Ok(location)
    }

    #[tracing::instrument(skip(self))]
    async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        Ok(self.store.list().await)
    }

    #[tracing::instrument(skip(self))]
    async fn clear_locations(&self) -> Result<usize, Error> {
        let removed = self.store.clear_all().await;

        tracing::info!(removed, "cleared saved locations");

        Ok(removed)
    }
}
