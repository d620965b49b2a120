use serde::Serialize;
use uuid::Uuid;

use crate::camera::{Point, ViewController, ViewTransform, ZoomDirection};
use crate::config::{ConfigError, EngineConfig};
use crate::consts::PCT_MAX;
use crate::doc::{DocError, DocStore, LayerRef, Pin, PinId, PinKind, Shape, ShapeId, ShapeKind};
use crate::geom::{PctPoint, PctRect};
use crate::hit::{ResizeHandle, hit_test_shapes, marquee_select};
use crate::input::{Button, Gesture, InputState, Key, Modifiers, PinPress, Tool, UiState, WheelDelta};
use crate::mapper::{self, ContainerRect, ImageGeometry, ScreenRect};
use crate::policy::{PressContext, PressIntent, PressTarget, SelectionChange, resolve_press};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// Collections are always emitted whole; the host replaces its copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ShapesChanged { shapes: Vec<Shape> },
    PinsChanged { pins: Vec<Pin> },
    SelectionChanged { ids: Vec<ShapeId> },
    PinSelected { id: Option<PinId> },
    TransformChanged { transform: ViewTransform },
    /// Close whatever side panel is tied to the previous selection.
    CancelActivePanel,
    /// A shape was clicked (not dragged); open its details.
    ShapeClicked { id: ShapeId },
    /// A pin was clicked with a non-select tool; open its details.
    PinClicked { id: PinId },
    /// The pin tool clicked empty canvas; the host resolves the linked record, then calls `add_pin`.
    PinPlacementRequested { kind: PinKind, at: PctPoint },
    /// Transient visuals (draft, marquee, hover, cursor) changed.
    RenderNeeded,
}

/// Pointer cursor for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
    Move,
    Grab,
    Grabbing,
    NwseResize,
    NeswResize,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Crosshair => "crosshair",
            Self::Move => "move",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

/// Core engine state: all interaction logic, independent of the browser.
pub struct EngineCore {
    pub doc: DocStore,
    pub view: ViewController,
    pub ui: UiState,
    pub input: InputState,
    pub container: ContainerRect,
    pub image: ImageGeometry,
    natural_size: (f64, f64),
    config: EngineConfig,
    /// Page-space position of the last accepted press, for click classification.
    press: Option<Point>,
    pin_press: Option<PinPress>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine with custom tunables.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is unusable.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let config = config.validate().map_err(|e| {
            tracing::warn!(error = %e, "rejected engine config");
            e
        })?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            doc: DocStore::new(),
            view: ViewController::new(config.min_zoom, config.max_zoom, config.zoom_step_factor),
            ui: UiState::default(),
            input: InputState::default(),
            container: ContainerRect::default(),
            image: ImageGeometry::default(),
            natural_size: (0.0, 0.0),
            config,
            press: None,
            pin_press: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- Data inputs ---

    /// Hydrate shapes and pins from the host. Selection entries that no longer exist are dropped.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>, pins: Vec<Pin>) {
        self.doc.load_snapshot(shapes, pins);
        self.prune_selection();
    }

    /// Hydrate from a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidSnapshot`] if the JSON does not parse.
    pub fn load_snapshot_json(&mut self, json: &str) -> Result<(), DocError> {
        self.doc.load_snapshot_json(json)?;
        self.prune_selection();
        Ok(())
    }

    fn prune_selection(&mut self) {
        let doc = &self.doc;
        self.ui.selected_ids.retain(|id| doc.shape(id).is_some());
        if self.ui.selected_pin.is_some_and(|id| doc.pin(&id).is_none()) {
            self.ui.selected_pin = None;
        }
        if self.pin_press.is_some_and(|p| doc.pin(&p.id).is_none()) {
            self.pin_press = None;
        }
    }

    // --- Geometry inputs ---

    /// Update the container bounds (page pixels) and refit the image.
    pub fn set_container(&mut self, container: ContainerRect) {
        self.container = container;
        self.refit_image();
    }

    /// Record the loaded image's natural pixel size and refit it into the container.
    pub fn set_natural_image_size(&mut self, width: f64, height: f64) {
        self.natural_size = (width, height);
        self.refit_image();
    }

    /// Forget the loaded image. Pointer mapping is suppressed until a new one is set.
    pub fn clear_image(&mut self) {
        self.set_natural_image_size(0.0, 0.0);
    }

    fn refit_image(&mut self) {
        let (w, h) = self.natural_size;
        self.image = ImageGeometry::fit(w, h, self.container.width, self.container.height);
    }

    // --- Tool ---

    /// Switch tools. Changing tool cancels any panel tied to the previous selection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if self.ui.tool == tool {
            return Vec::new();
        }
        tracing::debug!(from = ?self.ui.tool, to = ?tool, "tool changed");
        self.ui.tool = tool;
        vec![Action::CancelActivePanel, Action::RenderNeeded]
    }

    // --- View ---

    /// Zoom one step in or out around the container centre.
    pub fn zoom_step(&mut self, direction: ZoomDirection) -> Vec<Action> {
        let before = self.view.transform();
        self.view.zoom_step(direction, self.container.width, self.container.height);
        self.transform_changed(before)
    }

    /// Return to scale 1 with no translation.
    pub fn reset_view(&mut self) -> Vec<Action> {
        let before = self.view.transform();
        self.view.reset_view();
        self.transform_changed(before)
    }

    /// Cursor-anchored zoom. Scrolling down zooms out.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        let before = self.view.transform();
        let pivot = self.container.to_relative(screen_pt);
        self.view.zoom_at_point(pivot, -delta.dy * self.config.wheel_sensitivity);
        self.transform_changed(before)
    }

    fn transform_changed(&self, before: ViewTransform) -> Vec<Action> {
        let after = self.view.transform();
        if after == before {
            Vec::new()
        } else {
            vec![Action::TransformChanged { transform: after }]
        }
    }

    // --- Pointer input ---

    /// Map a page-space pointer position into image percent.
    #[must_use]
    pub fn map_pointer(&self, screen_pt: Point) -> Option<PctPoint> {
        mapper::screen_to_image_percent(screen_pt, &self.view.transform(), &self.image, &self.container)
    }

    /// Canvas pointer-down. Ignored unless idle.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.input.is_idle() || self.pin_press.is_some() {
            return actions;
        }

        let coords = self.map_pointer(screen_pt);
        let target = match coords {
            None => PressTarget::Unmapped,
            Some(p) => match hit_test_shapes(p, self.doc.shapes()) {
                Some(id) => PressTarget::Shape { id, selected: self.ui.selected_ids.contains(&id) },
                None => PressTarget::Empty,
            },
        };
        let intent = resolve_press(&PressContext {
            tool: self.ui.tool,
            button,
            shift: modifiers.shift,
            space_held: self.ui.space_held,
            zoomed_in: self.view.transform().scale > 1.0,
            target,
        });

        match intent {
            PressIntent::Ignore => return actions,
            PressIntent::Pan => {
                if coords.is_some() && button == Button::Primary && self.ui.selected_pin.take().is_some() {
                    actions.push(Action::PinSelected { id: None });
                }
                self.input = InputState::Panning { start_screen: screen_pt, initial: self.view.transform() };
            }
            PressIntent::Marquee | PressIntent::Draw(_) | PressIntent::Grab { .. } | PressIntent::PinClick => {
                let Some(start) = coords else {
                    return actions;
                };
                if self.ui.selected_pin.take().is_some() {
                    actions.push(Action::PinSelected { id: None });
                }
                self.start_press(intent, start, &mut actions);
            }
        }

        self.press = Some(screen_pt);
        if !self.input.is_idle() {
            tracing::debug!(mode = self.input.name(), "gesture started");
        }
        actions
    }

    fn start_press(&mut self, intent: PressIntent, start: PctPoint, actions: &mut Vec<Action>) {
        match intent {
            PressIntent::Marquee => {
                self.set_selection(Vec::new(), actions);
                self.input = InputState::Marquee { start, draft: PctRect::from_drag(start, start) };
                actions.push(Action::RenderNeeded);
            }
            PressIntent::Draw(kind) => {
                actions.push(Action::CancelActivePanel);
                self.set_selection(Vec::new(), actions);
                self.input = InputState::Drawing { kind, start, draft: PctRect::from_drag(start, start) };
                actions.push(Action::RenderNeeded);
            }
            PressIntent::Grab { id, change } => {
                let next = change.apply(&self.ui.selected_ids, id);
                self.set_selection(next, actions);
                let initial = self
                    .doc
                    .shapes()
                    .iter()
                    .filter(|s| !s.locked && self.ui.selected_ids.contains(&s.id))
                    .map(|s| (s.id, s.rect()))
                    .collect();
                let narrow_on_click = change == SelectionChange::Keep;
                self.input = InputState::Moving { start, initial, grabbed: id, narrow_on_click };
            }
            PressIntent::Ignore | PressIntent::Pan | PressIntent::PinClick => {}
        }
    }

    /// Resize-handle grab. A separate entry point from canvas pointer-down.
    pub fn begin_resize(&mut self, id: ShapeId, handle: ResizeHandle, screen_pt: Point) -> Vec<Action> {
        if !self.input.is_idle() || self.pin_press.is_some() {
            return Vec::new();
        }
        let Some(start) = self.map_pointer(screen_pt) else {
            return Vec::new();
        };
        let Some(shape) = self.doc.shape(&id) else {
            return Vec::new();
        };
        if shape.locked {
            return Vec::new();
        }
        self.input = InputState::Resizing { start, id, initial: shape.rect(), handle };
        self.press = Some(screen_pt);
        tracing::debug!(%id, ?handle, "resize started");
        vec![Action::RenderNeeded]
    }

    /// Pointer-down on a pin overlay. With the select tool this selects the pin and,
    /// unless it is locked, starts dragging it.
    pub fn on_pin_pointer_down(&mut self, id: PinId, screen_pt: Point, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if button != Button::Primary || !self.input.is_idle() || self.pin_press.is_some() {
            return actions;
        }
        let Some(pin) = self.doc.pin(&id) else {
            return actions;
        };
        let dragging = self.ui.tool.is_select() && !pin.locked;
        if self.ui.tool.is_select() {
            self.set_selection(Vec::new(), &mut actions);
            if self.ui.selected_pin != Some(id) {
                self.ui.selected_pin = Some(id);
                actions.push(Action::PinSelected { id: Some(id) });
            }
        }
        self.pin_press = Some(PinPress { id, dragging });
        self.press = Some(screen_pt);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if let Some(PinPress { id, dragging: true }) = self.pin_press {
            return self.drag_pin(id, screen_pt);
        }
        if let InputState::Panning { start_screen, initial } = self.input {
            self.view.set(initial);
            self.view.pan_by(screen_pt.x - start_screen.x, screen_pt.y - start_screen.y);
            return vec![Action::TransformChanged { transform: self.view.transform() }];
        }
        let Some(current) = self.map_pointer(screen_pt) else {
            return Vec::new();
        };
        if self.input.is_idle() {
            return self.update_hover(current);
        }

        match &mut self.input {
            InputState::Drawing { start, draft, .. } | InputState::Marquee { start, draft } => {
                *draft = PctRect::from_drag(*start, current);
                vec![Action::RenderNeeded]
            }
            InputState::Moving { start, initial, .. } => {
                if initial.is_empty() {
                    return Vec::new();
                }
                let (dx, dy) = (current.x - start.x, current.y - start.y);
                for (id, rect) in initial.iter() {
                    if let Some(shape) = self.doc.shape_mut(id) {
                        shape.set_rect(rect.translated(dx, dy));
                    }
                }
                tracing::trace!(dx, dy, "selection moved");
                vec![Action::ShapesChanged { shapes: self.doc.shapes().to_vec() }]
            }
            InputState::Resizing { start, id, initial, handle } => {
                let rect = handle.apply(*initial, current.x - start.x, current.y - start.y);
                let Some(shape) = self.doc.shape_mut(id) else {
                    return Vec::new();
                };
                shape.set_rect(rect);
                vec![Action::ShapesChanged { shapes: self.doc.shapes().to_vec() }]
            }
            InputState::Idle | InputState::Panning { .. } => Vec::new(),
        }
    }

    fn drag_pin(&mut self, id: PinId, screen_pt: Point) -> Vec<Action> {
        let Some(at) = self.map_pointer(screen_pt) else {
            return Vec::new();
        };
        let Some(pin) = self.doc.pin_mut(&id) else {
            return Vec::new();
        };
        pin.x = at.x;
        pin.y = at.y;
        vec![Action::PinsChanged { pins: self.doc.pins().to_vec() }]
    }

    fn update_hover(&mut self, current: PctPoint) -> Vec<Action> {
        let hovered = hit_test_shapes(current, self.doc.shapes());
        if hovered == self.ui.hovered {
            return Vec::new();
        }
        self.ui.hovered = hovered;
        vec![Action::RenderNeeded]
    }

    /// Pointer release: commit or discard the active gesture and return to idle.
    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let gesture = self
            .press
            .take()
            .map(|down| Gesture::classify(down, screen_pt, self.config.click_threshold_px));
        self.finish(gesture == Some(Gesture::Click), Some(screen_pt))
    }

    /// The pointer left the canvas: same as a release that is never a click.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.press = None;
        let mut actions = self.finish(false, None);
        if self.ui.hovered.take().is_some() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn finish(&mut self, is_click: bool, screen_pt: Option<Point>) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(press) = self.pin_press.take() {
            if press.dragging {
                tracing::debug!(id = %press.id, "pin drag finished");
            }
            if is_click && !self.ui.tool.is_select() {
                actions.push(Action::PinClicked { id: press.id });
            }
            return actions;
        }

        let state = std::mem::take(&mut self.input);
        match state {
            InputState::Idle => {
                if let (true, Some(kind), Some(pt)) = (is_click, self.ui.tool.pin_kind(), screen_pt) {
                    if let Some(at) = self.map_pointer(pt) {
                        actions.push(Action::PinPlacementRequested { kind, at });
                    }
                }
            }
            InputState::Drawing { kind, draft, .. } => self.commit_draft(kind, draft, &mut actions),
            InputState::Marquee { draft, .. } => {
                let ids = marquee_select(draft, self.doc.shapes());
                tracing::debug!(count = ids.len(), "marquee selection");
                self.set_selection(ids, &mut actions);
                actions.push(Action::RenderNeeded);
            }
            InputState::Resizing { id, .. } => {
                if let Some(shape) = self.doc.shape_mut(&id) {
                    let rect = shape.rect().normalized();
                    shape.set_rect(rect);
                    tracing::debug!(%id, "resize committed");
                    actions.push(Action::ShapesChanged { shapes: self.doc.shapes().to_vec() });
                }
            }
            InputState::Moving { grabbed, narrow_on_click, .. } => {
                if is_click && narrow_on_click {
                    self.set_selection(vec![grabbed], &mut actions);
                }
                if is_click && self.ui.selected_ids.contains(&grabbed) {
                    actions.push(Action::ShapeClicked { id: grabbed });
                }
            }
            InputState::Panning { .. } => {}
        }
        actions
    }

    fn commit_draft(&mut self, kind: ShapeKind, draft: PctRect, actions: &mut Vec<Action>) {
        let rect = draft.normalized();
        if !rect.exceeds(self.config.min_shape_size_pct) {
            tracing::debug!(width = rect.width, height = rect.height, "degenerate draft discarded");
            actions.push(Action::RenderNeeded);
            return;
        }
        let id = Uuid::new_v4();
        let name = self.doc.next_shape_name(kind);
        tracing::debug!(%id, %name, "shape committed");
        self.doc.push_shape(Shape {
            id,
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            name,
            visible: true,
            locked: false,
        });
        actions.push(Action::ShapesChanged { shapes: self.doc.shapes().to_vec() });
        self.set_selection(vec![id], actions);
    }

    fn set_selection(&mut self, ids: Vec<ShapeId>, actions: &mut Vec<Action>) {
        if self.ui.selected_ids != ids {
            self.ui.selected_ids = ids;
            actions.push(Action::SelectionChanged { ids: self.ui.selected_ids.clone() });
        }
    }

    // --- Keyboard ---

    /// Spacebar arms panning; Delete/Backspace removes the selection.
    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_space() {
            if self.ui.space_held {
                return Vec::new();
            }
            self.ui.space_held = true;
            return vec![Action::RenderNeeded];
        }
        if key.is_delete() && self.input.is_idle() && self.pin_press.is_none() {
            if let Some(pin) = self.ui.selected_pin {
                return self.delete_pin(pin);
            }
            return self.delete_selection();
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_space() && self.ui.space_held {
            self.ui.space_held = false;
            return vec![Action::RenderNeeded];
        }
        Vec::new()
    }

    // --- Document edits ---

    /// Commit a pin after the host has resolved the record it links to.
    pub fn add_pin(&mut self, kind: PinKind, at: PctPoint, linked_id: String) -> Vec<Action> {
        let pin = Pin {
            id: Uuid::new_v4(),
            kind,
            x: at.x.clamp(0.0, PCT_MAX),
            y: at.y.clamp(0.0, PCT_MAX),
            linked_id,
            name: self.doc.next_pin_name(kind),
            visible: true,
            locked: false,
        };
        tracing::debug!(id = %pin.id, name = %pin.name, "pin committed");
        self.doc.push_pin(pin);
        vec![Action::PinsChanged { pins: self.doc.pins().to_vec() }]
    }

    /// Remove every selected shape.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_ids.is_empty() {
            return Vec::new();
        }
        let removed = self.doc.remove_shapes(&self.ui.selected_ids);
        tracing::debug!(removed, "selection deleted");
        let mut actions = vec![Action::ShapesChanged { shapes: self.doc.shapes().to_vec() }];
        self.set_selection(Vec::new(), &mut actions);
        actions
    }

    pub fn delete_pin(&mut self, id: PinId) -> Vec<Action> {
        if self.doc.remove_pin(&id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::PinsChanged { pins: self.doc.pins().to_vec() }];
        if self.ui.selected_pin == Some(id) {
            self.ui.selected_pin = None;
            actions.push(Action::PinSelected { id: None });
        }
        actions
    }

    /// Remove all shapes and pins.
    pub fn clear_all(&mut self) -> Vec<Action> {
        self.doc.clear();
        let mut actions = vec![
            Action::ShapesChanged { shapes: Vec::new() },
            Action::PinsChanged { pins: Vec::new() },
        ];
        self.set_selection(Vec::new(), &mut actions);
        if self.ui.selected_pin.take().is_some() {
            actions.push(Action::PinSelected { id: None });
        }
        self.ui.hovered = None;
        actions
    }

    /// Show or hide a layer entry. Hidden shapes leave the selection.
    pub fn set_visible(&mut self, layer: LayerRef, visible: bool) -> Vec<Action> {
        let mut actions = Vec::new();
        match layer {
            LayerRef::Shape(id) => {
                let Some(shape) = self.doc.shape_mut(&id) else {
                    return actions;
                };
                if shape.visible == visible {
                    return actions;
                }
                shape.visible = visible;
                actions.push(Action::ShapesChanged { shapes: self.doc.shapes().to_vec() });
                if !visible {
                    let next = self.ui.selected_ids.iter().copied().filter(|s| *s != id).collect();
                    self.set_selection(next, &mut actions);
                    if self.ui.hovered == Some(id) {
                        self.ui.hovered = None;
                    }
                }
            }
            LayerRef::Pin(id) => {
                let Some(pin) = self.doc.pin_mut(&id) else {
                    return actions;
                };
                if pin.visible == visible {
                    return actions;
                }
                pin.visible = visible;
                actions.push(Action::PinsChanged { pins: self.doc.pins().to_vec() });
                if !visible && self.ui.selected_pin == Some(id) {
                    self.ui.selected_pin = None;
                    actions.push(Action::PinSelected { id: None });
                }
            }
        }
        actions
    }

    /// Lock or unlock a layer entry. Locked entries cannot be moved, resized or dragged.
    pub fn set_locked(&mut self, layer: LayerRef, locked: bool) -> Vec<Action> {
        match layer {
            LayerRef::Shape(id) => match self.doc.shape_mut(&id) {
                Some(shape) if shape.locked != locked => {
                    shape.locked = locked;
                    vec![Action::ShapesChanged { shapes: self.doc.shapes().to_vec() }]
                }
                _ => Vec::new(),
            },
            LayerRef::Pin(id) => match self.doc.pin_mut(&id) {
                Some(pin) if pin.locked != locked => {
                    pin.locked = locked;
                    vec![Action::PinsChanged { pins: self.doc.pins().to_vec() }]
                }
                _ => Vec::new(),
            },
        }
    }

    /// Rename a layer entry. Blank names are ignored.
    pub fn rename(&mut self, layer: LayerRef, name: &str) -> Vec<Action> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }
        match layer {
            LayerRef::Shape(id) => match self.doc.shape_mut(&id) {
                Some(shape) => {
                    shape.name = name.to_owned();
                    vec![Action::ShapesChanged { shapes: self.doc.shapes().to_vec() }]
                }
                None => Vec::new(),
            },
            LayerRef::Pin(id) => match self.doc.pin_mut(&id) {
                Some(pin) => {
                    pin.name = name.to_owned();
                    vec![Action::PinsChanged { pins: self.doc.pins().to_vec() }]
                }
                None => Vec::new(),
            },
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> &[ShapeId] {
        &self.ui.selected_ids
    }

    #[must_use]
    pub fn selected_pin(&self) -> Option<PinId> {
        self.ui.selected_pin
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.view.transform()
    }

    #[must_use]
    pub fn pin_press(&self) -> Option<PinPress> {
        self.pin_press
    }

    /// The in-progress drawing rectangle, in true drag direction.
    #[must_use]
    pub fn draft_rect(&self) -> Option<PctRect> {
        match self.input {
            InputState::Drawing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The in-progress marquee rectangle, in true drag direction.
    #[must_use]
    pub fn marquee_rect(&self) -> Option<PctRect> {
        match self.input {
            InputState::Marquee { draft, .. } => Some(draft),
            _ => None,
        }
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.doc.shape(id)
    }

    #[must_use]
    pub fn pin(&self, id: &PinId) -> Option<&Pin> {
        self.doc.pin(id)
    }

    /// Container-relative pixel bounds of a shape, for positioning overlays and handles.
    #[must_use]
    pub fn shape_screen_rect(&self, id: &ShapeId) -> Option<ScreenRect> {
        let shape = self.doc.shape(id)?;
        mapper::image_percent_rect_to_screen(&shape.rect().normalized(), &self.view.transform(), &self.image)
    }

    /// Container-relative pixel position of a pin.
    #[must_use]
    pub fn pin_screen_position(&self, id: &PinId) -> Option<Point> {
        let pin = self.doc.pin(id)?;
        mapper::image_percent_to_screen(pin.position(), &self.view.transform(), &self.image)
    }

    /// Cursor for the current mode, tool and hover state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        let pin_dragging = self.pin_press.is_some_and(|p| p.dragging);
        if pin_dragging || matches!(self.input, InputState::Panning { .. }) {
            return Cursor::Grabbing;
        }
        if self.ui.space_held {
            return Cursor::Grab;
        }
        match &self.input {
            InputState::Moving { .. } => return Cursor::Grabbing,
            InputState::Resizing { handle, .. } => {
                return if handle.is_nwse() { Cursor::NwseResize } else { Cursor::NeswResize };
            }
            InputState::Drawing { .. } | InputState::Marquee { .. } => return Cursor::Crosshair,
            InputState::Idle | InputState::Panning { .. } => {}
        }
        let hovering = self.ui.hovered.is_some();
        match self.ui.tool {
            Tool::Pin(_) => Cursor::Crosshair,
            Tool::Shape(_) if hovering => Cursor::Move,
            Tool::Shape(_) => Cursor::Crosshair,
            Tool::Select if hovering => Cursor::Move,
            Tool::Select if self.view.transform().scale > 1.0 => Cursor::Grab,
            Tool::Select => Cursor::Default,
        }
    }
}
