//! Integer pixel-space geometry for detected text regions.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
///
/// Uses the raster convention: origin at the top-left corner, y growing
/// downward, `x1`/`y1` exclusive. Well-formed boxes satisfy `x0 <= x1` and
/// `y0 <= y1`; [`BBox::normalized`] repairs boxes that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Builds a box from a top-left corner and a size, the layout Tesseract
    /// reports regions in.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Smallest rectangle containing both boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Clamps an inverted box to zero area instead of propagating negative
    /// extents. A caller handing over `x1 < x0` has already violated the
    /// input contract; this keeps the damage local.
    pub fn normalized(&self) -> BBox {
        BBox {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1.max(self.x0),
            y1: self.y1.max(self.y0),
        }
    }

    /// Intersection with a `width` x `height` pixel grid anchored at the
    /// origin. The result is normalized, so it is safe to iterate.
    pub fn clamp_to(&self, width: u32, height: u32) -> BBox {
        BBox {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(width as i32),
            y1: self.y1.min(height as i32),
        }
        .normalized()
    }
}
