//! Page Diff: a library for comparing two versions of a paginated document.
//!
//! Given per-page extracted content (text blocks, tables, images, supplied by
//! an external document parser), this crate computes the structural and
//! content differences between the two versions and localizes each change to
//! a region on the page:
//! - Text blocks are aligned in sequence order and diffed word-by-word
//! - Tables are matched by position and diffed cell-by-cell
//! - Images are matched by position and compared by content hash
//!
//! # Quick Start
//!
//! ```
//! use page_diff::{diff_documents, DiffConfig, PageContent, Rect, TextBlock};
//!
//! let old = vec![PageContent {
//!     text_blocks: vec![TextBlock {
//!         text: "Hello world".to_string(),
//!         bbox: Rect::new(10.0, 10.0, 100.0, 30.0),
//!         lines: vec!["Hello world".to_string()],
//!     }],
//!     ..PageContent::default()
//! }];
//! let mut new = old.clone();
//! new[0].text_blocks[0].text = "Hello there".to_string();
//!
//! let report = diff_documents(&old, &new, 2.0, &DiffConfig::default());
//! assert_eq!(report.summary.text_changes, 1);
//! ```

mod alignment;
mod config;
mod content;
mod diff;
mod engine;
mod error_codes;
mod geometry;
mod image_diff;
mod matching;
mod normalize;
mod output;
mod sink;
mod table_diff;
mod text_diff;
mod word_diff;

pub use config::{ConfigError, DiffConfig, DiffConfigBuilder};
pub use content::{Image, PageContent, Table, TextBlock};
pub use diff::{
    CellDiff, CellStatus, Change, ChangeStatus, DiffError, DiffSummary, DocumentDiff,
    IdentifiedChange, PageDiff, WordSpan, WordStatus,
};
pub use engine::{
    diff_documents, diff_documents_streaming, diff_page, WHOLE_PAGE_ADDED_TEXT,
    WHOLE_PAGE_DELETED_TEXT,
};
pub use geometry::{PixelBox, Rect};
pub use image_diff::diff_images;
pub use output::json::{serialize_changes, serialize_document_diff};
pub use output::json_lines::JsonLinesSink;
pub use sink::{CallbackSink, DiffSink, VecSink};
pub use table_diff::{diff_cell_grids, diff_tables};
pub use text_diff::diff_text_blocks;
pub use word_diff::diff_words;
