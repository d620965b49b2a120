//! Document model: shapes, pins, and the in-memory store that mirrors the host's data.
//!
//! All geometry here is image-percentage space. The store preserves insertion
//! order because hit-testing walks shapes last-drawn-first. The host remains the
//! owner of record: it hydrates the store with [`DocStore::load_snapshot`] and
//! receives whole-collection replacements back through engine actions.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{PctPoint, PctRect};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Unique identifier for a pin.
pub type PinId = Uuid;

/// Errors raised while hydrating the store from host data.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Outline drawn for an area annotation. Hit-testing treats all kinds as their bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Ellipse,
    Cloud,
}

impl ShapeKind {
    /// Display label used for default names (`"Box 3"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Ellipse => "Ellipse",
            Self::Cloud => "Cloud",
        }
    }
}

/// Kind of record a pin points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    Photo,
    Safety,
    Punch,
}

impl PinKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photo",
            Self::Safety => "Safety",
            Self::Punch => "Punch",
        }
    }
}

fn default_true() -> bool {
    true
}

/// An area annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Left edge in image percent.
    pub x: f64,
    /// Top edge in image percent.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Shape {
    #[must_use]
    pub fn rect(&self) -> PctRect {
        PctRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: PctRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

/// A point annotation linked to an external record (photo, safety issue, punch item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    pub kind: PinKind,
    pub x: f64,
    pub y: f64,
    /// Opaque id of the linked record, owned by the host.
    pub linked_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Pin {
    #[must_use]
    pub fn position(&self) -> PctPoint {
        PctPoint::new(self.x, self.y)
    }
}

/// Wire form of a full document hydration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub pins: Vec<Pin>,
}

/// Either layer entry, as addressed by the layers panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRef {
    Shape(ShapeId),
    Pin(PinId),
}

/// In-memory, insertion-ordered store of shapes and pins.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    shapes: Vec<Shape>,
    pins: Vec<Pin>,
}

impl DocStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all shapes and pins.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>, pins: Vec<Pin>) {
        self.shapes = shapes;
        self.pins = pins;
    }

    /// Replace all shapes and pins from a JSON [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidSnapshot`] if the JSON does not parse. The store is left untouched.
    pub fn load_snapshot_json(&mut self, json: &str) -> Result<(), DocError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        self.load_snapshot(snapshot.shapes, snapshot.pins);
        Ok(())
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    pub fn shape_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn pin(&self, id: &PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == *id)
    }

    pub fn pin_mut(&mut self, id: &PinId) -> Option<&mut Pin> {
        self.pins.iter_mut().find(|p| p.id == *id)
    }

    /// Append a shape on top of the draw order.
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn push_pin(&mut self, pin: Pin) {
        self.pins.push(pin);
    }

    /// Remove every shape whose id is in `ids`. Returns how many were removed.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| !ids.contains(&s.id));
        before - self.shapes.len()
    }

    /// Remove a pin, returning it if it was present.
    pub fn remove_pin(&mut self, id: &PinId) -> Option<Pin> {
        let idx = self.pins.iter().position(|p| p.id == *id)?;
        Some(self.pins.remove(idx))
    }

    /// Sequential default name for the next shape of `kind` (`"Cloud 2"`).
    #[must_use]
    pub fn next_shape_name(&self, kind: ShapeKind) -> String {
        let count = self.shapes.iter().filter(|s| s.kind == kind).count() + 1;
        format!("{} {count}", kind.label())
    }

    /// Sequential default name for the next pin of `kind`.
    #[must_use]
    pub fn next_pin_name(&self, kind: PinKind) -> String {
        let count = self.pins.iter().filter(|p| p.kind == kind).count() + 1;
        format!("{} {count}", kind.label())
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.pins.clear();
    }

    /// Total number of shapes and pins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len() + self.pins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.pins.is_empty()
    }
}
