//! Text normalization used for alignment decisions.

/// Collapse whitespace runs to single spaces and lowercase.
///
/// Only the alignment decision sees normalized text; emitted changes always
/// carry the raw extractor text.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
