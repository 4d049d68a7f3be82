//! In-memory item store for the Tasklist API.
//!
//! The store is the whole of the domain: an ordered, append-only sequence
//! of items answering three queries -- append, lookup by index, and a
//! head-prefix listing. Nothing is persisted; the store's lifetime is the
//! process's lifetime.

pub mod error;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use store::ItemStore;
