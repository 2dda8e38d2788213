//! Extracted page content supplied by the external document parser.
//!
//! These are plain value objects: one set per page per document version,
//! owned by the call that produced them. The engine never mutates them and
//! never shares them between versions.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A block of text with its position, in extraction (roughly reading) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub bbox: Rect,
    /// Individual lines of the block, as segmented by the extractor.
    #[serde(default)]
    pub lines: Vec<String>,
}

/// A detected table with its cell grid, row-major.
///
/// Rows may be ragged; the differ tolerates rows of differing lengths and
/// treats absent cells as empty strings. `rows`/`cols` are advisory counts
/// reported by the extractor; the differ reads `cells` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub bbox: Rect,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from its cell grid, deriving the advisory counts.
    pub fn from_cells(bbox: Rect, cells: Vec<Vec<String>>) -> Table {
        let rows = cells.len();
        let cols = cells.first().map(|row| row.len()).unwrap_or(0);
        Table {
            bbox,
            rows,
            cols,
            cells,
        }
    }
}

/// An embedded image with a content digest.
///
/// `hash` is an opaque identifier: two images are the same content iff their
/// hashes are equal. Extractors that cannot hash the bytes substitute a
/// best-effort fallback identifier; the engine does not care which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub bbox: Rect,
    pub hash: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Everything the extractor produced for one page of one document version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_derives_counts() {
        let cells = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        let table = Table::from_cells(Rect::new(0.0, 0.0, 10.0, 10.0), cells);
        assert_eq!(table.rows, 2);
        assert_eq!(table.cols, 2);
    }

    #[test]
    fn from_cells_empty_grid() {
        let table = Table::from_cells(Rect::new(0.0, 0.0, 1.0, 1.0), Vec::new());
        assert_eq!(table.rows, 0);
        assert_eq!(table.cols, 0);
    }
}
