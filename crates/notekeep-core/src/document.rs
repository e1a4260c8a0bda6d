//! Store-format document helpers.
//!
//! A document is the JSON object the document store keeps under
//! `{collection}/{id}`. The key itself is never part of the document.

use serde_json::{Map, Value};

/// A single stored document body.
pub type Document = Map<String, Value>;

/// Reads a string field, treating missing, `null` and non-string values as absent.
pub fn string_field(document: &Document, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
