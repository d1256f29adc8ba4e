use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::entities::Location;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ClearResponse {
    removed: usize,
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Location>, Error> {
    let location = api
        .create_location(params.name, params.latitude, params.longitude)
        .await?;

    Ok(location.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Location>>, Error> {
    let locations = api.list_locations().await?;

    Ok(locations.into())
}

pub async fn clear(Extension(api): Extension<DynAPI>) -> Result<Json<ClearResponse>, Error> {
    let removed = api.clear_locations().await?;

    Ok(Json(ClearResponse { removed }))
}
