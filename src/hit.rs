//! Hit-testing and resize-handle geometry against shapes.
//!
//! Every shape kind is tested by its normalized bounding box; clouds and
//! ellipses do not get a tighter test. Hidden shapes are never hit.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Shape, ShapeId};
use crate::geom::{PctPoint, PctRect};

/// Corner handle of a selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Tl,
    Tr,
    Bl,
    Br,
}

impl ResizeHandle {
    pub const ALL: [Self; 4] = [Self::Tl, Self::Tr, Self::Bl, Self::Br];

    /// Apply a percent-space drag delta to the rectangle the resize started from.
    ///
    /// The result may have negative size; normalize on commit.
    #[must_use]
    pub fn apply(self, start: PctRect, dx: f64, dy: f64) -> PctRect {
        let mut r = start;
        if matches!(self, Self::Tl | Self::Bl) {
            r.x = start.x + dx;
            r.width = start.width - dx;
        } else {
            r.width = start.width + dx;
        }
        if matches!(self, Self::Tl | Self::Tr) {
            r.y = start.y + dy;
            r.height = start.height - dy;
        } else {
            r.height = start.height + dy;
        }
        r
    }

    /// Whether the handle runs along the `\` diagonal (as opposed to `/`).
    #[must_use]
    pub fn is_nwse(self) -> bool {
        matches!(self, Self::Tl | Self::Br)
    }
}

/// Topmost visible shape containing `point`. Later shapes win.
#[must_use]
pub fn hit_test_shapes(point: PctPoint, shapes: &[Shape]) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .filter(|s| s.visible)
        .find(|s| s.rect().contains(point))
        .map(|s| s.id)
}

/// Ids of visible shapes whose bounds overlap `marquee`, in insertion order.
#[must_use]
pub fn marquee_select(marquee: PctRect, shapes: &[Shape]) -> Vec<ShapeId> {
    let marquee = marquee.normalized();
    shapes
        .iter()
        .filter(|s| s.visible && s.rect().intersects(&marquee))
        .map(|s| s.id)
        .collect()
}
