//! Image-percentage geometry: points and rectangles in the 0 to 100 space that all
//! annotations are stored in.
//!
//! Rectangles may carry negative width/height while a drag is in progress (the
//! draft keeps the true drag direction). [`PctRect::normalized`] canonicalizes
//! them once, on commit.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in image-percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PctPoint {
    pub x: f64,
    pub y: f64,
}

impl PctPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in image-percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PctRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PctRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Draft rectangle anchored at `start` and extending to `current`.
    ///
    /// Width and height are signed; dragging up or left yields negative values.
    #[must_use]
    pub fn from_drag(start: PctPoint, current: PctPoint) -> Self {
        Self { x: start.x, y: start.y, width: current.x - start.x, height: current.y - start.y }
    }

    /// Flip negative width/height into positive, moving the origin to the top-left corner.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.width < 0.0 {
            r.x += r.width;
            r.width = -r.width;
        }
        if r.height < 0.0 {
            r.y += r.height;
            r.height = -r.height;
        }
        r
    }

    /// Inclusive containment against the normalized bounds.
    #[must_use]
    pub fn contains(&self, p: PctPoint) -> bool {
        let r = self.normalized();
        p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
    }

    /// Strict AABB overlap. Touching edges do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &PctRect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Whether the normalized rectangle exceeds `min` on both axes.
    #[must_use]
    pub fn exceeds(&self, min: f64) -> bool {
        let r = self.normalized();
        r.width > min && r.height > min
    }
}
