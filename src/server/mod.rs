mod handlers;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{locations, routes};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route(
            "/api/locations",
            post(locations::create)
                .get(locations::list)
                .delete(locations::clear),
        )
        .route("/api/calculate-route", get(routes::calculate))
        .layer(Extension(api));

    let addr = bind_addr();

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn bind_addr() -> SocketAddr {
    let default = SocketAddr::from(([127, 0, 0, 1], 3000));

    match env::var("PERIPLO_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("invalid PERIPLO_ADDR {:?}, using {}", raw, default);
            default
        }),
        Err(_) => default,
    }
}
