//! Table differ: spatial matching plus cell-grid comparison.

use crate::config::DiffConfig;
use crate::content::Table;
use crate::diff::{CellDiff, CellStatus, Change, ChangeStatus};
use crate::matching::nearest_unclaimed;
use rustc_hash::FxHashSet;

/// Diff two ordered sequences of tables.
///
/// Each old table is matched to at most one new table by centroid proximity
/// (cutoff `config.table_match_max_dist`). Unmatched old tables are reported
/// deleted, unclaimed new tables added. A matched pair whose every cell
/// compares `same` emits nothing; otherwise one `modified` change carries
/// both grids and the full per-cell diff, `same` entries included.
pub fn diff_tables(old: &[Table], new: &[Table], scale: f64, config: &DiffConfig) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut claimed: FxHashSet<usize> = FxHashSet::default();

    for old_table in old {
        match nearest_unclaimed(&old_table.bbox, new, &claimed, config.table_match_max_dist) {
            None => {
                changes.push(Change::Table {
                    change: ChangeStatus::Deleted,
                    old_bbox: Some(old_table.bbox.to_pixels(scale)),
                    new_bbox: None,
                    old_cells: Some(old_table.cells.clone()),
                    new_cells: None,
                    cell_diffs: Vec::new(),
                });
            }
            Some(idx) => {
                claimed.insert(idx);
                let new_table = &new[idx];
                let cell_diffs = diff_cell_grids(&old_table.cells, &new_table.cells);
                if cell_diffs.iter().any(|cd| cd.status != CellStatus::Same) {
                    changes.push(Change::Table {
                        change: ChangeStatus::Modified,
                        old_bbox: Some(old_table.bbox.to_pixels(scale)),
                        new_bbox: Some(new_table.bbox.to_pixels(scale)),
                        old_cells: Some(old_table.cells.clone()),
                        new_cells: Some(new_table.cells.clone()),
                        cell_diffs,
                    });
                }
            }
        }
    }

    for (idx, new_table) in new.iter().enumerate() {
        if !claimed.contains(&idx) {
            changes.push(Change::Table {
                change: ChangeStatus::Added,
                old_bbox: None,
                new_bbox: Some(new_table.bbox.to_pixels(scale)),
                old_cells: None,
                new_cells: Some(new_table.cells.clone()),
                cell_diffs: Vec::new(),
            });
        }
    }

    changes
}

/// Compare two cell grids position by position.
///
/// Row counts are padded to the larger grid and each row pair to its longer
/// row; an absent cell reads as the empty string. Output is row-major and
/// flat, covering every padded position including `same` ones. Ragged rows
/// are tolerated, not rejected.
pub fn diff_cell_grids(old: &[Vec<String>], new: &[Vec<String>]) -> Vec<CellDiff> {
    const EMPTY_ROW: &[String] = &[];

    let mut diffs = Vec::new();
    let rows = old.len().max(new.len());
    for row in 0..rows {
        let old_row = old.get(row).map(Vec::as_slice).unwrap_or(EMPTY_ROW);
        let new_row = new.get(row).map(Vec::as_slice).unwrap_or(EMPTY_ROW);
        let cols = old_row.len().max(new_row.len());
        for col in 0..cols {
            let old_value = old_row.get(col).cloned().unwrap_or_default();
            let new_value = new_row.get(col).cloned().unwrap_or_default();
            let status = if old_value == new_value {
                CellStatus::Same
            } else if old_value.is_empty() {
                CellStatus::Added
            } else if new_value.is_empty() {
                CellStatus::Deleted
            } else {
                CellStatus::Modified
            };
            diffs.push(CellDiff {
                row,
                col,
                old_value,
                new_value,
                status,
            });
        }
    }
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn identical_grids_are_all_same() {
        let g = grid(&[&["a", "b"], &["c", "d"]]);
        let diffs = diff_cell_grids(&g, &g);
        assert_eq!(diffs.len(), 4);
        assert!(diffs.iter().all(|d| d.status == CellStatus::Same));
    }

    #[test]
    fn cell_statuses_cover_all_four_cases() {
        let old = grid(&[&["keep", "old", "gone", ""]]);
        let new = grid(&[&["keep", "new", "", "fresh"]]);
        let diffs = diff_cell_grids(&old, &new);
        assert_eq!(
            diffs.iter().map(|d| d.status).collect::<Vec<_>>(),
            vec![
                CellStatus::Same,
                CellStatus::Modified,
                CellStatus::Deleted,
                CellStatus::Added,
            ]
        );
    }

    #[test]
    fn ragged_rows_pad_with_empty_strings() {
        let old = grid(&[&["a", "b", "c"], &["d"]]);
        let new = grid(&[&["a"], &["d", "e"]]);
        let diffs = diff_cell_grids(&old, &new);
        // row 0 pads to 3 columns, row 1 to 2
        assert_eq!(diffs.len(), 5);
        assert_eq!(diffs[1].status, CellStatus::Deleted);
        assert_eq!(diffs[4].status, CellStatus::Added);
        assert_eq!(diffs[4].new_value, "e");
    }

    #[test]
    fn missing_rows_read_as_empty() {
        let old = grid(&[&["a", "b"]]);
        let new = grid(&[&["a", "b"], &["c", "d"]]);
        let diffs = diff_cell_grids(&old, &new);
        assert_eq!(diffs.len(), 4);
        assert_eq!(diffs[2].status, CellStatus::Added);
        assert_eq!(diffs[3].status, CellStatus::Added);
    }

    #[test]
    fn grid_coverage_matches_padded_dimensions() {
        // same row count, differing widths: 2 x max(3, 2)
        let old = grid(&[&["a", "b", "c"], &["d", "e", "f"]]);
        let new = grid(&[&["a", "b"], &["d", "e"]]);
        assert_eq!(diff_cell_grids(&old, &new).len(), 6);

        // same width, differing row counts: max(3, 2) x 2
        let old = grid(&[&["a", "b"], &["c", "d"]]);
        let new = grid(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
        assert_eq!(diff_cell_grids(&old, &new).len(), 6);
    }

    #[test]
    fn both_empty_yield_no_diffs() {
        assert!(diff_cell_grids(&[], &[]).is_empty());
    }
}
