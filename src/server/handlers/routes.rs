use axum::extract::{Extension, Json};

use crate::entities::Route;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn calculate(Extension(api): Extension<DynAPI>) -> Result<Json<Route>, Error> {
    let route = api.compute_route().await?;

    Ok(route.into())
}
