//! Shared type definitions for the Tasklist API.
//!
//! This crate is the single source of truth for the data contract shared by
//! the store and the HTTP boundary. An [`Item`] has no identifier field of
//! its own: identity is positional, the zero-based index of the item in the
//! store's insertion order.

use serde::{Deserialize, Serialize};

/// A single task list entry.
///
/// Both fields are optional on input; a bare `{}` body deserializes to an
/// item with no text that is not done. `text` always serializes, as `null`
/// when absent, so the wire shape is stable:
/// `{"text": string|null, "is_done": boolean}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Free-form task description. Absent and `null` are equivalent.
    #[serde(default)]
    pub text: Option<String>,
    /// Whether the task has been completed. Defaults to `false`.
    #[serde(default)]
    pub is_done: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_defaults() {
        let item: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(item.text, None);
        assert!(!item.is_done);
    }

    #[test]
    fn null_text_is_absent_text() {
        let item: Item = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(item, Item::default());
    }

    #[test]
    fn explicit_fields_round_trip() {
        let item = Item {
            text: Some(String::from("buy milk")),
            is_done: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn absent_text_serializes_as_null() {
        let json = serde_json::to_value(Item::default()).unwrap();
        assert_eq!(json, serde_json::json!({"text": null, "is_done": false}));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let item: Item = serde_json::from_str(r#"{"text": "a", "priority": 3}"#).unwrap();
        assert_eq!(item.text.as_deref(), Some("a"));
    }
}
