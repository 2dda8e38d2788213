//! Page- and document-level diff orchestration.
//!
//! A page present in both versions runs the three differs and concatenates
//! their output in a fixed order (text, tables, images). A page present in
//! only one version short-circuits to a single synthetic whole-page change.
//! Each page's comparison is a pure function of its inputs, so callers may
//! diff pages in parallel; the engine holds no cross-call state.

use crate::config::DiffConfig;
use crate::content::PageContent;
use crate::diff::{
    Change, ChangeStatus, DiffError, DiffSummary, DocumentDiff, IdentifiedChange, PageDiff,
};
use crate::image_diff::diff_images;
use crate::sink::DiffSink;
use crate::table_diff::diff_tables;
use crate::text_diff::diff_text_blocks;

/// Placeholder text of the synthetic change emitted for a page that exists
/// only in the new version.
pub const WHOLE_PAGE_ADDED_TEXT: &str = "(entire page added)";
/// Placeholder text of the synthetic change emitted for a page that exists
/// only in the old version.
pub const WHOLE_PAGE_DELETED_TEXT: &str = "(entire page deleted)";

/// Diff one page across the two document versions.
///
/// `None` means the page does not exist in that version; a one-sided page
/// yields exactly one synthetic whole-page text change and skips the three
/// differs entirely. Two `None`s yield nothing.
pub fn diff_page(
    old: Option<&PageContent>,
    new: Option<&PageContent>,
    scale: f64,
    config: &DiffConfig,
) -> Vec<Change> {
    match (old, new) {
        (None, None) => Vec::new(),
        (None, Some(_)) => vec![whole_page_change(ChangeStatus::Added)],
        (Some(_), None) => vec![whole_page_change(ChangeStatus::Deleted)],
        (Some(old_page), Some(new_page)) => {
            let mut changes =
                diff_text_blocks(&old_page.text_blocks, &new_page.text_blocks, scale, config);
            changes.extend(diff_tables(
                &old_page.tables,
                &new_page.tables,
                scale,
                config,
            ));
            changes.extend(diff_images(
                &old_page.images,
                &new_page.images,
                scale,
                config,
            ));
            changes
        }
    }
}

fn whole_page_change(status: ChangeStatus) -> Change {
    let (old_text, new_text) = match status {
        ChangeStatus::Added => (String::new(), WHOLE_PAGE_ADDED_TEXT.to_string()),
        _ => (WHOLE_PAGE_DELETED_TEXT.to_string(), String::new()),
    };
    Change::Text {
        change: status,
        old_text,
        new_text,
        word_diff: Vec::new(),
        old_bbox: None,
        new_bbox: None,
    }
}

/// Diff two whole documents into a versioned report.
///
/// Pages are walked positionally up to the longer document's length; a page
/// missing on one side takes the [`diff_page`] short-circuit. Pages without
/// changes are included unless `config.include_identical_pages` is false.
pub fn diff_documents(
    old_pages: &[PageContent],
    new_pages: &[PageContent],
    scale: f64,
    config: &DiffConfig,
) -> DocumentDiff {
    let total_pages = old_pages.len().max(new_pages.len());
    let mut summary = DiffSummary {
        total_pages: total_pages as u32,
        ..DiffSummary::default()
    };

    let mut pages = Vec::with_capacity(total_pages);
    for idx in 0..total_pages {
        let page_num = (idx + 1) as u32;
        let changes =
            identified_page_changes(old_pages.get(idx), new_pages.get(idx), page_num, scale, config);
        tally(&mut summary, &changes);
        let has_changes = !changes.is_empty();
        if has_changes || config.include_identical_pages {
            pages.push(PageDiff {
                page_num,
                has_changes,
                changes,
            });
        }
    }

    DocumentDiff::new(summary, pages)
}

/// Stream a whole-document diff into `sink`, in document order.
///
/// Returns the same summary [`diff_documents`] would produce; the only error
/// source is the sink itself.
pub fn diff_documents_streaming<S: DiffSink>(
    old_pages: &[PageContent],
    new_pages: &[PageContent],
    scale: f64,
    config: &DiffConfig,
    sink: &mut S,
) -> Result<DiffSummary, DiffError> {
    sink.begin()?;

    let total_pages = old_pages.len().max(new_pages.len());
    let mut summary = DiffSummary {
        total_pages: total_pages as u32,
        ..DiffSummary::default()
    };

    for idx in 0..total_pages {
        let page_num = (idx + 1) as u32;
        let changes =
            identified_page_changes(old_pages.get(idx), new_pages.get(idx), page_num, scale, config);
        tally(&mut summary, &changes);
        for change in changes {
            sink.emit(change)?;
        }
    }

    sink.finish()?;
    Ok(summary)
}

fn identified_page_changes(
    old: Option<&PageContent>,
    new: Option<&PageContent>,
    page_num: u32,
    scale: f64,
    config: &DiffConfig,
) -> Vec<IdentifiedChange> {
    diff_page(old, new, scale, config)
        .into_iter()
        .enumerate()
        .map(|(idx, change)| IdentifiedChange {
            id: format!("p{page_num}c{idx}"),
            change,
        })
        .collect()
}

fn tally(summary: &mut DiffSummary, changes: &[IdentifiedChange]) {
    if !changes.is_empty() {
        summary.pages_changed += 1;
    }
    for change in changes {
        summary.record(&change.change);
    }
}
