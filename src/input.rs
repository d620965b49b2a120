//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the active gesture tracked between pointer-down and
//! pointer-up; each variant carries exactly the context its mode needs, so the
//! draft and marquee rectangles only exist while drawing or marquee-selecting.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::str::FromStr;

use crate::camera::{Point, ViewTransform};
use crate::doc::{PinId, PinKind, ShapeId, ShapeKind};
use crate::geom::{PctPoint, PctRect};
use crate::hit::ResizeHandle;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw an area annotation of the given kind.
    Shape(ShapeKind),
    /// Place a point annotation of the given kind.
    Pin(PinKind),
}

impl Tool {
    #[must_use]
    pub fn is_select(self) -> bool {
        matches!(self, Self::Select)
    }

    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Shape(kind) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn pin_kind(self) -> Option<PinKind> {
        match self {
            Self::Pin(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Unknown tool name received from the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    /// Parse host tool names: `select`, `box`, `ellipse`, `cloud`, `photo`, `safety`, `punch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "box" => Ok(Self::Shape(ShapeKind::Box)),
            "ellipse" => Ok(Self::Shape(ShapeKind::Ellipse)),
            "cloud" => Ok(Self::Shape(ShapeKind::Cloud)),
            "photo" => Ok(Self::Pin(PinKind::Photo)),
            "safety" => Ok(Self::Pin(PinKind::Safety)),
            "punch" => Ok(Self::Pin(PinKind::Punch)),
            _ => Err(ParseToolError(s.to_owned())),
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key as reported by the browser's `KeyboardEvent.key` (e.g. `"Delete"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_space(&self) -> bool {
        matches!(self.0.as_str(), " " | "Space" | "Spacebar")
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// How a press/release pair is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

impl Gesture {
    /// A release within `threshold` screen pixels of the press on both axes is a click.
    #[must_use]
    pub fn classify(down: Point, up: Point, threshold: f64) -> Self {
        if (up.x - down.x).abs() < threshold && (up.y - down.y).abs() < threshold {
            Self::Click
        } else {
            Self::Drag
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub tool: Tool,
    /// Selected shapes, in selection order.
    pub selected_ids: Vec<ShapeId>,
    pub selected_pin: Option<PinId>,
    /// Topmost shape under the idle pointer.
    pub hovered: Option<ShapeId>,
    /// Spacebar held: primary-button presses pan.
    pub space_held: bool,
}

/// A press on a pin overlay. Coexists with pin selection, outside [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPress {
    pub id: PinId,
    /// Pointer moves relocate the pin.
    pub dragging: bool,
}

/// Internal state for the input state machine.
///
/// Exactly one variant is active; every non-idle variant returns to `Idle` on
/// pointer-up or pointer-leave.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Drawing a new shape by dragging from `start`.
    Drawing {
        kind: ShapeKind,
        start: PctPoint,
        /// Signed draft rectangle; normalized only on commit.
        draft: PctRect,
    },
    /// Translating the selection.
    Moving {
        start: PctPoint,
        /// Rectangles of every moved shape at press time.
        initial: Vec<(ShapeId, PctRect)>,
        /// The shape under the press, reported on a click.
        grabbed: ShapeId,
        /// Plain press on an already-selected shape: a click narrows the selection to it.
        narrow_on_click: bool,
    },
    /// Dragging a corner handle of a single shape.
    Resizing {
        start: PctPoint,
        id: ShapeId,
        initial: PctRect,
        handle: ResizeHandle,
    },
    /// Rubber-band selection.
    Marquee { start: PctPoint, draft: PctRect },
    /// Panning the view by dragging.
    Panning {
        /// Page-space press position.
        start_screen: Point,
        initial: ViewTransform,
    },
}

impl InputState {
    /// Short mode name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing { .. } => "drawing",
            Self::Moving { .. } => "moving",
            Self::Resizing { .. } => "resizing",
            Self::Marquee { .. } => "marquee",
            Self::Panning { .. } => "panning",
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
