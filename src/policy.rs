//! Pointer-down policy: which gesture a press starts, given the tool and context.
//!
//! The rules are evaluated top to bottom; the first match wins.
//!
//! | # | Condition | Intent |
//! |---|-----------|--------|
//! | 1 | middle button | [`PressIntent::Pan`] |
//! | 2 | secondary button | [`PressIntent::Ignore`] |
//! | 3 | spacebar held | [`PressIntent::Pan`] |
//! | 4 | pointer not over the image (unmapped) | [`PressIntent::Ignore`] |
//! | 5 | select tool, over a shape | [`PressIntent::Grab`] (shift toggles, else replace/keep) |
//! | 6 | select tool, empty, zoomed in | [`PressIntent::Pan`] |
//! | 7 | select tool, empty | [`PressIntent::Marquee`] |
//! | 8 | shape tool, over a shape | [`PressIntent::Grab`] with [`SelectionChange::Replace`] |
//! | 9 | shape tool, empty | [`PressIntent::Draw`] |
//! | 10 | pin tool | [`PressIntent::PinClick`] |

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::doc::{ShapeId, ShapeKind};
use crate::input::{Button, Tool};

/// What the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The pointer could not be mapped to image space (no image measured yet).
    Unmapped,
    /// Image area with no shape under the pointer.
    Empty,
    /// A shape, and whether it is already selected.
    Shape { id: ShapeId, selected: bool },
}

/// Everything the policy looks at for one press.
#[derive(Debug, Clone, Copy)]
pub struct PressContext {
    pub tool: Tool,
    pub button: Button,
    pub shift: bool,
    pub space_held: bool,
    /// View scale is above 1.
    pub zoomed_in: bool,
    pub target: PressTarget,
}

/// How a grab changes the shape selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Select only the grabbed shape.
    Replace,
    /// Add the grabbed shape (shift on an unselected shape).
    Add,
    /// Remove the grabbed shape (shift on a selected shape).
    Remove,
    /// Leave the selection as is (plain press on a selected shape).
    Keep,
}

impl SelectionChange {
    /// Apply to `current`, returning the new selection.
    #[must_use]
    pub fn apply(self, current: &[ShapeId], id: ShapeId) -> Vec<ShapeId> {
        match self {
            Self::Replace => vec![id],
            Self::Keep => current.to_vec(),
            Self::Add => {
                let mut next = current.to_vec();
                if !next.contains(&id) {
                    next.push(id);
                }
                next
            }
            Self::Remove => current.iter().copied().filter(|s| *s != id).collect(),
        }
    }
}

/// The gesture a press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressIntent {
    Ignore,
    Pan,
    Marquee,
    Draw(ShapeKind),
    Grab { id: ShapeId, change: SelectionChange },
    /// Pin tool press; a pin is requested on release if the gesture is a click.
    PinClick,
}

/// Resolve a press to an intent. See the module table.
#[must_use]
pub fn resolve_press(ctx: &PressContext) -> PressIntent {
    match ctx.button {
        Button::Middle => return PressIntent::Pan,
        Button::Secondary => return PressIntent::Ignore,
        Button::Primary => {}
    }
    if ctx.space_held {
        return PressIntent::Pan;
    }
    match (ctx.tool, ctx.target) {
        (_, PressTarget::Unmapped) => PressIntent::Ignore,
        (Tool::Select, PressTarget::Shape { id, selected }) => {
            let change = match (selected, ctx.shift) {
                (true, true) => SelectionChange::Remove,
                (true, false) => SelectionChange::Keep,
                (false, true) => SelectionChange::Add,
                (false, false) => SelectionChange::Replace,
            };
            PressIntent::Grab { id, change }
        }
        (Tool::Select, PressTarget::Empty) if ctx.zoomed_in => PressIntent::Pan,
        (Tool::Select, PressTarget::Empty) => PressIntent::Marquee,
        (Tool::Shape(_), PressTarget::Shape { id, .. }) => PressIntent::Grab { id, change: SelectionChange::Replace },
        (Tool::Shape(kind), PressTarget::Empty) => PressIntent::Draw(kind),
        (Tool::Pin(_), _) => PressIntent::PinClick,
    }
}
