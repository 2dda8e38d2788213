//! Change model and document-level report types.
//!
//! This module defines what the engine emits:
//! - [`Change`]: a single localized difference on a page (text, table, image)
//! - [`PageDiff`] / [`DocumentDiff`]: per-page and whole-document reports
//! - [`DiffError`]: errors that can occur while streaming changes to a sink

use crate::error_codes;
use crate::geometry::PixelBox;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a whole change. `same` is never emitted at this level;
/// unchanged content produces no [`Change`] at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    Modified,
    Added,
    Deleted,
}

/// Status of one word span inside a text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
    Same,
    Deleted,
    Added,
}

/// Status of one cell inside a table change. Unlike [`ChangeStatus`], `same`
/// entries are emitted so consumers can render unchanged cells too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Same,
    Modified,
    Added,
    Deleted,
}

/// A run of words sharing one diff status, joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub text: String,
    pub status: WordStatus,
}

impl WordSpan {
    pub fn new(text: impl Into<String>, status: WordStatus) -> WordSpan {
        WordSpan {
            text: text.into(),
            status,
        }
    }
}

/// Comparison result for one cell position of a matched table pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDiff {
    pub row: usize,
    pub col: usize,
    pub old_value: String,
    pub new_value: String,
    pub status: CellStatus,
}

/// A single localized difference between two versions of a page.
///
/// Changes carry no identity of their own; the document assembler attaches
/// sequential per-page ids when building a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    Text {
        change: ChangeStatus,
        old_text: String,
        new_text: String,
        word_diff: Vec<WordSpan>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        old_bbox: Option<PixelBox>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_bbox: Option<PixelBox>,
    },
    Table {
        change: ChangeStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        old_bbox: Option<PixelBox>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_bbox: Option<PixelBox>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        old_cells: Option<Vec<Vec<String>>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_cells: Option<Vec<Vec<String>>>,
        cell_diffs: Vec<CellDiff>,
    },
    Image {
        change: ChangeStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        old_bbox: Option<PixelBox>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_bbox: Option<PixelBox>,
        description: String,
    },
}

impl Change {
    pub fn status(&self) -> ChangeStatus {
        match self {
            Change::Text { change, .. }
            | Change::Table { change, .. }
            | Change::Image { change, .. } => *change,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Change::Text { .. })
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Change::Table { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Change::Image { .. })
    }
}

/// A change plus the sequential per-page id assigned by the assembler
/// (`"p{page_num}c{index}"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedChange {
    pub id: String,
    #[serde(flatten)]
    pub change: Change,
}

/// All changes found on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDiff {
    pub page_num: u32,
    pub has_changes: bool,
    pub changes: Vec<IdentifiedChange>,
}

/// Aggregate counts across a document comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_pages: u32,
    pub pages_changed: u32,
    pub text_changes: u32,
    pub table_changes: u32,
    pub image_changes: u32,
    pub total_changes: u32,
}

impl DiffSummary {
    pub(crate) fn record(&mut self, change: &Change) {
        if change.is_text() {
            self.text_changes += 1;
        } else if change.is_table() {
            self.table_changes += 1;
        } else {
            self.image_changes += 1;
        }
        self.total_changes += 1;
    }
}

/// A versioned whole-document comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// Schema version (currently "1").
    pub version: String,
    pub summary: DiffSummary,
    pub pages: Vec<PageDiff>,
}

impl DocumentDiff {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(summary: DiffSummary, pages: Vec<PageDiff>) -> DocumentDiff {
        DocumentDiff {
            version: Self::SCHEMA_VERSION.to_string(),
            summary,
            pages,
        }
    }
}

/// Errors produced by the streaming diff APIs.
///
/// The diff computation itself is total over well-formed input; only sinks
/// can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiffError {
    #[error(
        "[PAGEDIFF_DIFF_001] sink error: {message}. Suggestion: check the output destination and retry."
    )]
    SinkError { message: String },
}

impl DiffError {
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::SinkError { .. } => error_codes::DIFF_SINK_ERROR,
        }
    }
}
