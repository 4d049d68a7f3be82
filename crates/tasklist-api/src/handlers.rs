//! REST API endpoint handlers.
//!
//! All handlers operate on the shared [`ItemStore`](tasklist_store::ItemStore)
//! via [`AppState`]. No I/O beyond the in-memory store is involved.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Service status document |
//! | `POST` | `/items` | Append an item, echo it back |
//! | `GET` | `/items` | List the first `limit` items (default 10) |
//! | `GET` | `/items/{item_id}` | Get a single item by index |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use tasklist_types::Item;

use crate::error::ApiError;
use crate::state::AppState;

/// Number of items a list request returns when no `limit` is given.
const DEFAULT_LIST_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /items` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    /// Maximum number of items to return (default 10).
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET / -- service status
// ---------------------------------------------------------------------------

/// Return a small status document naming the service and reporting the
/// current item count.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;

    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "items": store.len(),
    }))
}

// ---------------------------------------------------------------------------
// POST /items -- create an item
// ---------------------------------------------------------------------------

/// Append an item to the store and echo the stored value back.
///
/// Both body fields are optional; `{}` creates an item with no text that
/// is not done. A body that fails shape validation is rejected by the
/// `Json` extractor (422) and never reaches this handler. Appends cannot
/// fail, so there is no error path here.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<Item>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    let created = store.create(item);

    tracing::debug!(index = store.len().saturating_sub(1), "item created");

    Json(created)
}

// ---------------------------------------------------------------------------
// GET /items -- list items
// ---------------------------------------------------------------------------

/// List the first `min(limit, len)` items in insertion order.
///
/// This is a head prefix, not a page: there is no offset and the slice
/// always starts at index 0. `limit=0` returns an empty array.
///
/// # Query Parameters
///
/// - `limit`: maximum number of items to return (default 10).
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let store = state.store.read().await;

    Json(store.list(limit).to_vec())
}

// ---------------------------------------------------------------------------
// GET /items/{item_id} -- single item
// ---------------------------------------------------------------------------

/// Return the item at the given zero-based index.
///
/// The path parameter is parsed as a signed integer so a negative id
/// reaches this handler and maps to 404, the same as any other index
/// outside `[0, len)`.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let index = usize::try_from(item_id)
        .map_err(|_e| ApiError::NotFound(format!("no item at index {item_id}")))?;

    let store = state.store.read().await;
    let item = store.get(index)?;

    Ok(Json(item.clone()))
}
