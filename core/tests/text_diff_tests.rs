use page_diff::{
    diff_text_blocks, Change, ChangeStatus, DiffConfig, WordSpan, WordStatus,
};

mod common;
use common::{block, blocks, rect};

fn cfg() -> DiffConfig {
    DiffConfig::default()
}

fn statuses(changes: &[Change]) -> Vec<ChangeStatus> {
    changes.iter().map(|c| c.status()).collect()
}

#[test]
fn identical_sequences_yield_no_changes() {
    let old = blocks(&["First paragraph", "Second paragraph"]);
    let changes = diff_text_blocks(&old, &old.clone(), 2.0, &cfg());
    assert!(changes.is_empty());
}

#[test]
fn modified_block_carries_word_diff() {
    // Scenario: old ["Hello world"], new ["Hello there"]
    let old = blocks(&["Hello world"]);
    let new = blocks(&["Hello there"]);
    let changes = diff_text_blocks(&old, &new, 2.0, &cfg());

    assert_eq!(changes.len(), 1);
    match &changes[0] {
        Change::Text {
            change,
            old_text,
            new_text,
            word_diff,
            old_bbox,
            new_bbox,
        } => {
            assert_eq!(*change, ChangeStatus::Modified);
            assert_eq!(old_text, "Hello world");
            assert_eq!(new_text, "Hello there");
            assert_eq!(
                *word_diff,
                vec![
                    WordSpan::new("Hello", WordStatus::Same),
                    WordSpan::new("world", WordStatus::Deleted),
                    WordSpan::new("there", WordStatus::Added),
                ]
            );
            assert!(old_bbox.is_some());
            assert!(new_bbox.is_some());
        }
        other => panic!("expected text change, got {other:?}"),
    }
}

#[test]
fn whitespace_and_case_changes_are_not_reported() {
    let old = vec![block("Hello   World", rect(10.0, 10.0, 100.0, 25.0))];
    let new = vec![block("hello world", rect(10.0, 10.0, 100.0, 25.0))];
    assert!(diff_text_blocks(&old, &new, 2.0, &cfg()).is_empty());
}

#[test]
fn emitted_text_is_raw_not_normalized() {
    let old = blocks(&["Alpha  Beta"]);
    let new = blocks(&["Alpha  Beta", "New   Tail"]);
    let changes = diff_text_blocks(&old, &new, 1.0, &cfg());

    assert_eq!(changes.len(), 1);
    match &changes[0] {
        Change::Text {
            change, new_text, ..
        } => {
            assert_eq!(*change, ChangeStatus::Added);
            // raw extractor text, double space preserved
            assert_eq!(new_text, "New   Tail");
        }
        other => panic!("expected text change, got {other:?}"),
    }
}

#[test]
fn empty_old_side_reports_every_block_added() {
    let new = blocks(&["one", "two", "three"]);
    let changes = diff_text_blocks(&[], &new, 2.0, &cfg());
    assert_eq!(
        statuses(&changes),
        vec![ChangeStatus::Added, ChangeStatus::Added, ChangeStatus::Added]
    );
    for change in &changes {
        match change {
            Change::Text {
                old_text, old_bbox, ..
            } => {
                assert!(old_text.is_empty());
                assert!(old_bbox.is_none());
            }
            other => panic!("expected text change, got {other:?}"),
        }
    }
}

#[test]
fn empty_new_side_reports_every_block_deleted() {
    let old = blocks(&["one", "two"]);
    let changes = diff_text_blocks(&old, &[], 2.0, &cfg());
    assert_eq!(
        statuses(&changes),
        vec![ChangeStatus::Deleted, ChangeStatus::Deleted]
    );
}

#[test]
fn unequal_replace_run_pairs_positionally() {
    // Two old blocks replaced by three new ones: k-th old pairs with k-th new.
    let old = blocks(&["aaa", "bbb"]);
    let new = blocks(&["xxx", "yyy", "zzz"]);
    let changes = diff_text_blocks(&old, &new, 2.0, &cfg());
    assert_eq!(
        statuses(&changes),
        vec![
            ChangeStatus::Modified,
            ChangeStatus::Modified,
            ChangeStatus::Added,
        ]
    );
}

#[test]
fn unchanged_blocks_around_an_edit_are_skipped() {
    let old = blocks(&["intro", "body old", "outro"]);
    let new = blocks(&["intro", "body new", "outro"]);
    let changes = diff_text_blocks(&old, &new, 2.0, &cfg());

    assert_eq!(changes.len(), 1);
    match &changes[0] {
        Change::Text {
            change,
            old_text,
            new_text,
            ..
        } => {
            assert_eq!(*change, ChangeStatus::Modified);
            assert_eq!(old_text, "body old");
            assert_eq!(new_text, "body new");
        }
        other => panic!("expected text change, got {other:?}"),
    }
}

#[test]
fn swapping_inputs_swaps_added_and_deleted() {
    let old = blocks(&["shared", "removed from new"]);
    let new = blocks(&["shared"]);

    let forward = diff_text_blocks(&old, &new, 2.0, &cfg());
    let backward = diff_text_blocks(&new, &old, 2.0, &cfg());

    assert_eq!(statuses(&forward), vec![ChangeStatus::Deleted]);
    assert_eq!(statuses(&backward), vec![ChangeStatus::Added]);
}

#[test]
fn swapping_inputs_preserves_modified_count() {
    let old = blocks(&["alpha one", "beta two", "gamma three"]);
    let new = blocks(&["alpha one", "beta 2", "gamma three"]);

    let forward = diff_text_blocks(&old, &new, 2.0, &cfg());
    let backward = diff_text_blocks(&new, &old, 2.0, &cfg());

    let count = |changes: &[Change]| {
        changes
            .iter()
            .filter(|c| c.status() == ChangeStatus::Modified)
            .count()
    };
    assert_eq!(count(&forward), 1);
    assert_eq!(count(&forward), count(&backward));
}

#[test]
fn bboxes_are_scaled_to_display_pixels() {
    let old = vec![block("before", rect(10.0, 20.0, 110.0, 40.0))];
    let new = vec![block("after", rect(10.0, 20.0, 110.0, 40.0))];
    let changes = diff_text_blocks(&old, &new, 2.0, &cfg());

    assert_eq!(changes.len(), 1);
    match &changes[0] {
        Change::Text { old_bbox, .. } => {
            let px = old_bbox.expect("old bbox present");
            assert_eq!((px.x, px.y, px.w, px.h), (20, 40, 200, 40));
        }
        other => panic!("expected text change, got {other:?}"),
    }
}
