//! `wasm-bindgen` facade over [`EngineCore`].
//!
//! The host wires DOM events to these methods and applies the returned action
//! arrays. Every handler returns a JS array of tagged action objects
//! (`{ "type": "shapes_changed", "shapes": [...] }`). Ids and enum values cross
//! the boundary as strings.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::camera::{Point, ZoomDirection};
use crate::config::EngineConfig;
use crate::doc::{LayerRef, PinKind};
use crate::engine::{Action, EngineCore};
use crate::geom::PctPoint;
use crate::hit::ResizeHandle;
use crate::input::{Button, Key, Modifiers, Tool, WheelDelta};
use crate::mapper::ContainerRect;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(js_err)?;
    js_sys::JSON::parse(&json)
}

fn actions(list: &[Action]) -> Result<JsValue, JsValue> {
    to_js(list)
}

fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(js_err)
}

/// Parse a lowercase enum name (`"br"`, `"photo"`) via its serde representation.
fn parse_name<T: DeserializeOwned>(name: &str) -> Result<T, JsValue> {
    serde_json::from_value(serde_json::Value::String(name.trim().to_ascii_lowercase())).map_err(js_err)
}

fn parse_layer(kind: &str, id: &str) -> Result<LayerRef, JsValue> {
    let id = parse_id(id)?;
    match kind {
        "shape" => Ok(LayerRef::Shape(id)),
        "pin" => Ok(LayerRef::Pin(id)),
        other => Err(JsValue::from_str(&format!("unknown layer kind: {other}"))),
    }
}

fn modifiers(shift: bool) -> Modifiers {
    Modifiers { shift, ..Default::default() }
}

#[wasm_bindgen]
pub struct MarkupEngine {
    core: EngineCore,
}

impl Default for MarkupEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MarkupEngine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: EngineCore::new() }
    }

    /// Build an engine from a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON and out-of-range tunables.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<MarkupEngine, JsValue> {
        let config = EngineConfig::from_json(json).map_err(js_err)?;
        let core = EngineCore::with_config(config).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Replace all shapes and pins from a JSON `{ shapes, pins }` snapshot.
    ///
    /// # Errors
    ///
    /// Rejects JSON that does not describe a snapshot.
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_snapshot_json(json).map_err(js_err)
    }

    #[wasm_bindgen(js_name = setContainer)]
    pub fn set_container(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.core.set_container(ContainerRect::new(left, top, width, height));
    }

    #[wasm_bindgen(js_name = setNaturalImageSize)]
    pub fn set_natural_image_size(&mut self, width: f64, height: f64) {
        self.core.set_natural_image_size(width, height);
    }

    #[wasm_bindgen(js_name = clearImage)]
    pub fn clear_image(&mut self) {
        self.core.clear_image();
    }

    /// # Errors
    ///
    /// Rejects unknown tool names.
    #[wasm_bindgen(js_name = setTool)]
    pub fn set_tool(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let tool: Tool = name.parse().map_err(js_err)?;
        actions(&self.core.set_tool(tool))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16, shift: bool) -> Result<JsValue, JsValue> {
        let Some(button) = Button::from_dom(button) else {
            return actions(&[]);
        };
        actions(&self.core.on_pointer_down(Point::new(x, y), button, modifiers(shift)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64, shift: bool) -> Result<JsValue, JsValue> {
        actions(&self.core.on_pointer_move(Point::new(x, y), modifiers(shift)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16, shift: bool) -> Result<JsValue, JsValue> {
        let button = Button::from_dom(button).unwrap_or(Button::Primary);
        actions(&self.core.on_pointer_up(Point::new(x, y), button, modifiers(shift)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.on_pointer_leave())
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    pub fn wheel(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Result<JsValue, JsValue> {
        actions(&self.core.on_wheel(Point::new(x, y), WheelDelta { dx, dy }, Modifiers::default()))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: String, shift: bool) -> Result<JsValue, JsValue> {
        actions(&self.core.on_key_down(Key(key), modifiers(shift)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: String, shift: bool) -> Result<JsValue, JsValue> {
        actions(&self.core.on_key_up(Key(key), modifiers(shift)))
    }

    /// Start a resize from a handle overlay (`"tl"`, `"tr"`, `"bl"`, `"br"`).
    ///
    /// # Errors
    ///
    /// Rejects malformed ids and unknown handle names.
    #[wasm_bindgen(js_name = beginResize)]
    pub fn begin_resize(&mut self, id: &str, handle: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        let handle: ResizeHandle = parse_name(handle)?;
        actions(&self.core.begin_resize(id, handle, Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Rejects malformed ids.
    #[wasm_bindgen(js_name = pinPointerDown)]
    pub fn pin_pointer_down(&mut self, id: &str, x: f64, y: f64, button: i16) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        let Some(button) = Button::from_dom(button) else {
            return actions(&[]);
        };
        actions(&self.core.on_pin_pointer_down(id, Point::new(x, y), button))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.zoom_step(ZoomDirection::In))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.zoom_step(ZoomDirection::Out))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.reset_view())
    }

    /// Commit a pin once the host has resolved its linked record.
    ///
    /// # Errors
    ///
    /// Rejects unknown pin kinds.
    #[wasm_bindgen(js_name = addPin)]
    pub fn add_pin(&mut self, kind: &str, x: f64, y: f64, linked_id: String) -> Result<JsValue, JsValue> {
        let kind: PinKind = parse_name(kind)?;
        actions(&self.core.add_pin(kind, PctPoint::new(x, y), linked_id))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = deleteSelection)]
    pub fn delete_selection(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.delete_selection())
    }

    /// # Errors
    ///
    /// Rejects malformed ids.
    #[wasm_bindgen(js_name = deletePin)]
    pub fn delete_pin(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        actions(&self.core.delete_pin(id))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be converted to JS.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) -> Result<JsValue, JsValue> {
        actions(&self.core.clear_all())
    }

    /// Layer-panel visibility toggle. `kind` is `"shape"` or `"pin"`.
    ///
    /// # Errors
    ///
    /// Rejects malformed ids and unknown layer kinds.
    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, kind: &str, id: &str, visible: bool) -> Result<JsValue, JsValue> {
        let layer = parse_layer(kind, id)?;
        actions(&self.core.set_visible(layer, visible))
    }

    /// # Errors
    ///
    /// Rejects malformed ids and unknown layer kinds.
    #[wasm_bindgen(js_name = setLocked)]
    pub fn set_locked(&mut self, kind: &str, id: &str, locked: bool) -> Result<JsValue, JsValue> {
        let layer = parse_layer(kind, id)?;
        actions(&self.core.set_locked(layer, locked))
    }

    /// # Errors
    ///
    /// Rejects malformed ids and unknown layer kinds.
    pub fn rename(&mut self, kind: &str, id: &str, name: &str) -> Result<JsValue, JsValue> {
        let layer = parse_layer(kind, id)?;
        actions(&self.core.rename(layer, name))
    }

    /// CSS cursor for the current mode.
    #[must_use]
    pub fn cursor(&self) -> String {
        self.core.cursor().as_css().to_owned()
    }

    /// Current `{ scale, translate_x, translate_y }`.
    ///
    /// # Errors
    ///
    /// Fails only if the value cannot be converted to JS.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        to_js(&self.core.transform())
    }

    /// Selected shape ids, in selection order.
    ///
    /// # Errors
    ///
    /// Fails only if the value cannot be converted to JS.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js(self.core.selection())
    }

    /// In-progress draft or marquee rectangle in image percent, or `null`.
    ///
    /// # Errors
    ///
    /// Fails only if the value cannot be converted to JS.
    #[wasm_bindgen(js_name = draftRect)]
    pub fn draft_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.core.draft_rect().or(self.core.marquee_rect()))
    }

    /// Container-relative pixel bounds of a shape, or `null`.
    ///
    /// # Errors
    ///
    /// Rejects malformed ids.
    #[wasm_bindgen(js_name = shapeScreenRect)]
    pub fn shape_screen_rect(&self, id: &str) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        to_js(&self.core.shape_screen_rect(&id))
    }

    /// Container-relative pixel position of a pin, or `null`.
    ///
    /// # Errors
    ///
    /// Rejects malformed ids.
    #[wasm_bindgen(js_name = pinScreenPosition)]
    pub fn pin_screen_position(&self, id: &str) -> Result<JsValue, JsValue> {
        let id = parse_id(id)?;
        to_js(&self.core.pin_screen_position(&id))
    }
}
