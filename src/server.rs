//! HTTP surface: shared state, routing, and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::dataset::Dataset;

pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The dataset is loaded once before the server starts and never mutated, so
/// no locking is needed under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

/// Build the application router around a loaded dataset.
pub fn app(dataset: Dataset) -> Router {
    let state = Arc::new(AppState {
        dataset: Arc::new(dataset),
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::index_page))
        .route("/leaderboard_page", get(handlers::leaderboard_page))
        .route("/search", get(handlers::search))
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Configure and run the web server until shutdown.
pub async fn run_server(dataset: Dataset, addr: SocketAddr) -> anyhow::Result<()> {
    let app = app(dataset);

    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
