//! JSON serialization helpers for diff output.

use crate::diff::{Change, DocumentDiff};

pub fn serialize_document_diff(diff: &DocumentDiff) -> serde_json::Result<String> {
    serde_json::to_string(diff)
}

pub fn serialize_changes(changes: &[Change]) -> serde_json::Result<String> {
    serde_json::to_string(changes)
}
