//! Greedy nearest-centroid matching shared by the table and image differs.
//!
//! Matching is one-pass in old-side iteration order with first-come claiming:
//! once a candidate is claimed it leaves the pool for all later queries. This
//! is deterministic but not globally optimal bipartite matching.

use crate::content::{Image, Table};
use crate::geometry::Rect;
use rustc_hash::FxHashSet;

/// An element that occupies a region on the page.
pub(crate) trait Located {
    fn bbox(&self) -> &Rect;
}

impl Located for Table {
    fn bbox(&self) -> &Rect {
        &self.bbox
    }
}

impl Located for Image {
    fn bbox(&self) -> &Rect {
        &self.bbox
    }
}

/// Index of the nearest unclaimed candidate by Manhattan centroid distance.
///
/// Ties keep the first-encountered (lowest index) candidate. Returns `None`
/// when every candidate is claimed or the nearest one is farther than
/// `max_dist` (a distance exactly at the cutoff still matches).
pub(crate) fn nearest_unclaimed<T: Located>(
    query: &Rect,
    candidates: &[T],
    claimed: &FxHashSet<usize>,
    max_dist: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        if claimed.contains(&idx) {
            continue;
        }
        let dist = query.centroid_distance(candidate.bbox());
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((idx, dist));
        }
    }
    match best {
        Some((idx, dist)) if dist <= max_dist => Some(idx),
        _ => None,
    }
}
