//! The in-memory item store.
//!
//! [`ItemStore`] is an ordered, append-only sequence of [`Item`] records.
//! It holds plain data and does no locking of its own; the HTTP layer
//! decides how to share it (one `RwLock` around the whole store).

use tasklist_types::Item;

use crate::error::StoreError;

/// An ordered, append-only, in-memory collection of items.
///
/// Items are identified purely by position: the index assigned at insert
/// time never shifts, because insertion only ever happens at the tail and
/// nothing is removed or reordered. The store starts empty and lives for
/// the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the sequence.
    ///
    /// Returns the stored item unchanged so the caller can confirm exactly
    /// what was recorded. Appends cannot fail.
    pub fn create(&mut self, item: Item) -> Item {
        self.items.push(item.clone());
        item
    }

    /// Look up the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Item, StoreError> {
        self.items.get(index).ok_or(StoreError::NotFound { index })
    }

    /// Return the first `min(limit, len)` items in insertion order.
    ///
    /// This is a head prefix, not a page: it always starts at index 0.
    /// A limit of 0 yields an empty slice; a limit beyond the store's
    /// length yields everything.
    pub fn list(&self, limit: usize) -> &[Item] {
        self.items
            .get(..limit.min(self.items.len()))
            .unwrap_or_default()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper to build an item with the given text.
    fn item(text: &str) -> Item {
        Item {
            text: Some(text.to_owned()),
            is_done: false,
        }
    }

    /// Helper to build a store holding `n` numbered items.
    fn store_with(n: usize) -> ItemStore {
        let mut store = ItemStore::new();
        for i in 0..n {
            store.create(item(&format!("task {i}")));
        }
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn create_echoes_the_stored_item() {
        let mut store = ItemStore::new();
        let created = store.create(item("buy milk"));
        assert_eq!(created, item("buy milk"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_returns_items_by_insertion_position() {
        let mut store = ItemStore::new();
        store.create(item("first"));
        store.create(item("second"));
        assert_eq!(store.get(0).unwrap(), &item("first"));
        assert_eq!(store.get(1).unwrap(), &item("second"));
    }

    #[test]
    fn get_past_the_end_is_not_found() {
        let store = store_with(3);
        assert_eq!(store.get(3), Err(StoreError::NotFound { index: 3 }));
        assert_eq!(store.get(100), Err(StoreError::NotFound { index: 100 }));
    }

    #[test]
    fn get_on_empty_store_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(store.get(0), Err(StoreError::NotFound { index: 0 }));
    }

    #[test]
    fn existing_indices_are_stable_across_appends() {
        let mut store = store_with(2);
        let before = store.get(0).unwrap().clone();
        store.create(item("later"));
        assert_eq!(store.get(0).unwrap(), &before);
    }

    #[test]
    fn list_returns_a_prefix_in_order() {
        let store = store_with(5);
        let listed = store.list(3);
        assert_eq!(listed.len(), 3);
        assert_eq!(listed.first(), Some(&item("task 0")));
        assert_eq!(listed.last(), Some(&item("task 2")));
    }

    #[test]
    fn list_zero_is_empty() {
        let store = store_with(4);
        assert!(store.list(0).is_empty());
    }

    #[test]
    fn list_beyond_length_returns_everything() {
        let store = store_with(2);
        assert_eq!(store.list(10).len(), 2);
        assert_eq!(store.list(2).len(), 2);
    }

    #[test]
    fn reads_are_idempotent() {
        let store = store_with(3);
        assert_eq!(store.get(1), store.get(1));
        assert_eq!(store.list(2), store.list(2));
    }

    #[test]
    fn error_message_names_the_index() {
        let err = StoreError::NotFound { index: 7 };
        assert_eq!(err.to_string(), "no item at index 7");
    }
}
