//! Geometry primitives shared by the differs.
//!
//! Bounding boxes arrive in document points from the upstream extractor and
//! leave as display-pixel boxes after scaling. Scaling is a presentation
//! transform only; all matching decisions happen in document points.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in document points.
///
/// Upstream extractors guarantee `x1 >= x0` and `y1 >= y0`; the engine does
/// not re-validate this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn centroid(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Manhattan distance between the centroids of two boxes.
    pub fn centroid_distance(&self, other: &Rect) -> f64 {
        let (ax, ay) = self.centroid();
        let (bx, by) = other.centroid();
        (ax - bx).abs() + (ay - by).abs()
    }

    /// Convert to a display-pixel box at the given scale factor.
    pub fn to_pixels(&self, scale: f64) -> PixelBox {
        PixelBox {
            x: (self.x0 * scale).round() as i64,
            y: (self.y0 * scale).round() as i64,
            w: (self.width() * scale).round() as i64,
            h: (self.height() * scale).round() as i64,
        }
    }
}

/// Display-pixel box emitted in change payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}
