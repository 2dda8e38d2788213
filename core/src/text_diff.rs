//! Text-block aligner.
//!
//! Aligns the two ordered block sequences over their normalized text, then
//! pairs blocks positionally inside each non-equal run. Pairing by index
//! within a run is a deliberate simplification; a replace run of unequal
//! length does not re-align its sub-sequences.

use crate::alignment::{opcodes, OpTag};
use crate::config::DiffConfig;
use crate::content::TextBlock;
use crate::diff::{Change, ChangeStatus};
use crate::normalize::normalize;
use crate::word_diff::diff_words_limited;

/// Diff two ordered sequences of text blocks.
///
/// Identical blocks (after whitespace/case normalization) are silently
/// skipped; every other region produces one [`Change`] per positional block
/// pair, carrying the raw texts, a word-level diff, and display-scaled
/// bounding boxes (`None` for an absent side).
pub fn diff_text_blocks(
    old: &[TextBlock],
    new: &[TextBlock],
    scale: f64,
    config: &DiffConfig,
) -> Vec<Change> {
    let old_norm: Vec<String> = old.iter().map(|b| normalize(&b.text)).collect();
    let new_norm: Vec<String> = new.iter().map(|b| normalize(&b.text)).collect();

    let mut changes = Vec::new();
    for op in opcodes(&old_norm, &new_norm, config.lcs_work_limit) {
        if op.tag == OpTag::Equal {
            continue;
        }

        let old_run = &old[op.i1..op.i2];
        let new_run = &new[op.j1..op.j2];
        let n = old_run.len().max(new_run.len());

        for k in 0..n {
            let old_block = old_run.get(k);
            let new_block = new_run.get(k);

            let change = match (old_block, new_block) {
                (Some(_), Some(_)) => ChangeStatus::Modified,
                (Some(_), None) => ChangeStatus::Deleted,
                (None, _) => ChangeStatus::Added,
            };

            let old_text = old_block.map(|b| b.text.clone()).unwrap_or_default();
            let new_text = new_block.map(|b| b.text.clone()).unwrap_or_default();
            let word_diff = diff_words_limited(&old_text, &new_text, config.lcs_work_limit);

            changes.push(Change::Text {
                change,
                old_text,
                new_text,
                word_diff,
                old_bbox: old_block.map(|b| b.bbox.to_pixels(scale)),
                new_bbox: new_block.map(|b| b.bbox.to_pixels(scale)),
            });
        }
    }
    changes
}
