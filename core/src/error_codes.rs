//! Stable machine-readable error codes surfaced by [`crate::DiffError`].
//!
//! Codes are embedded in error messages and exposed via `code()` so callers
//! can branch without parsing display strings.

pub(crate) const DIFF_SINK_ERROR: &str = "PAGEDIFF_DIFF_001";
