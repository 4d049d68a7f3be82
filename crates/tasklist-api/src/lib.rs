//! HTTP API server for the Tasklist item store.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /items`** -- append an item to the store and echo it back
//! - **`GET /items`** -- list a head prefix of the store (`limit` query
//!   parameter, default 10)
//! - **`GET /items/{item_id}`** -- fetch a single item by its zero-based
//!   index
//! - **`GET /`** -- service status document (name, version, item count)
//!
//! # Architecture
//!
//! All handlers go through the shared [`AppState`], which owns the one
//! [`ItemStore`](tasklist_store::ItemStore) instance behind a single
//! read-write lock. The store itself is plain synchronous data; mutual
//! exclusion at this boundary is the only coordination in the system.
//! Malformed bodies and query strings are rejected by Axum's extractors
//! before any handler runs, so the store never sees invalid input.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, serve};
pub use state::AppState;
