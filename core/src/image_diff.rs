//! Image differ: spatial matching plus content-hash comparison.
//!
//! Position decides which images are "the same image"; the hash only decides
//! whether a matched image changed. An identical image that moved beyond the
//! cutoff is therefore reported as one delete plus one add.

use crate::config::DiffConfig;
use crate::content::Image;
use crate::diff::{Change, ChangeStatus};
use crate::matching::nearest_unclaimed;
use rustc_hash::FxHashSet;

const IMAGE_REMOVED: &str = "Image removed";
const IMAGE_REPLACED: &str = "Image replaced";
const IMAGE_ADDED: &str = "Image added";

/// Diff two ordered sequences of images.
///
/// Old images match against unclaimed new images by centroid proximity
/// (cutoff `config.image_match_max_dist`). A matched pair with equal hashes
/// emits nothing; differing hashes emit `modified`. Unmatched old images are
/// `deleted`, unclaimed new images `added`. Differences are reported at
/// whole-image granularity only.
pub fn diff_images(old: &[Image], new: &[Image], scale: f64, config: &DiffConfig) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut claimed: FxHashSet<usize> = FxHashSet::default();

    for old_image in old {
        match nearest_unclaimed(&old_image.bbox, new, &claimed, config.image_match_max_dist) {
            None => {
                changes.push(Change::Image {
                    change: ChangeStatus::Deleted,
                    old_bbox: Some(old_image.bbox.to_pixels(scale)),
                    new_bbox: None,
                    description: IMAGE_REMOVED.to_string(),
                });
            }
            Some(idx) => {
                claimed.insert(idx);
                let new_image = &new[idx];
                if old_image.hash != new_image.hash {
                    changes.push(Change::Image {
                        change: ChangeStatus::Modified,
                        old_bbox: Some(old_image.bbox.to_pixels(scale)),
                        new_bbox: Some(new_image.bbox.to_pixels(scale)),
                        description: IMAGE_REPLACED.to_string(),
                    });
                }
            }
        }
    }

    for (idx, new_image) in new.iter().enumerate() {
        if !claimed.contains(&idx) {
            changes.push(Change::Image {
                change: ChangeStatus::Added,
                old_bbox: None,
                new_bbox: Some(new_image.bbox.to_pixels(scale)),
                description: IMAGE_ADDED.to_string(),
            });
        }
    }

    changes
}
