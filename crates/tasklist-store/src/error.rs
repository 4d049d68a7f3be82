//! Error types for the item store.

/// Errors the item store can produce.
///
/// Lookups are the only operation that can fail; appends always succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested index is outside `[0, len)`.
    #[error("no item at index {index}")]
    NotFound {
        /// The index that was requested.
        index: usize,
    },
}
