//! Axum router construction for the API.
//!
//! Assembles the item routes into a single [`Router`] with CORS
//! middleware enabled for cross-origin clients.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- service status document
/// - `POST /items` -- append an item
/// - `GET /items` -- list items (`?limit=N`, default 10)
/// - `GET /items/{item_id}` -- single item by index
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Item resource
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/{item_id}", get(handlers::get_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
