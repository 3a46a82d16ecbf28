//! `Board`: the JavaScript-facing handle to one canvas engine.
//!
//! Every event method returns the engine's actions as a JSON array. The host
//! applies `set_cursor` to the canvas style, repaints on `render_needed`, and
//! refreshes the layers and properties panels on `scene_changed` or
//! `selection_changed`.

use canvas::camera::Point;
use canvas::config::EngineConfig;
use canvas::doc::ObjectId;
use canvas::engine::{Action, Engine};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::dom::{map_button, parse_tool};
use crate::error::BridgeError;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| BridgeError::from(e).into())
}

fn actions(actions: &[Action]) -> Result<String, JsValue> {
    to_json(actions)
}

#[wasm_bindgen]
pub struct Board {
    engine: Engine,
}

#[wasm_bindgen]
impl Board {
    /// Bind to the canvas with DOM id `canvas_id`. `config_json` may be a
    /// partial object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the element is missing or not a canvas, or the config is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<Board, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => EngineConfig::from_json(raw).map_err(BridgeError::from)?,
            None => EngineConfig::default(),
        };
        let document = web_sys::window().and_then(|w| w.document()).ok_or(BridgeError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| BridgeError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BridgeError::CanvasNotFound(canvas_id.to_owned()))?;
        tracing::info!(canvas_id, "board created");
        Ok(Self { engine: Engine::new(canvas, config) })
    }

    // --- Toolbar and viewport ---

    /// # Errors
    ///
    /// Fails for an unknown tool name.
    #[wasm_bindgen(js_name = setTool)]
    pub fn set_tool(&mut self, name: &str) -> Result<String, JsValue> {
        let tool = parse_tool(name)?;
        actions(&self.engine.set_tool(tool))
    }

    #[wasm_bindgen(js_name = setCurrentColor)]
    pub fn set_current_color(&mut self, color: &str) {
        self.engine.set_current_color(color);
    }

    /// Resize the canvas backing store to the CSS size times `dpr`.
    ///
    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<String, JsValue> {
        actions(&self.engine.set_viewport(width_css, height_css, dpr))
    }

    // --- Pointer and wheel ---

    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        actions(&self.engine.on_pointer_down(Point::new(x, y), map_button(button)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        actions(&self.engine.on_pointer_move(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        actions(&self.engine.on_pointer_up(Point::new(x, y), map_button(button)))
    }

    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        actions(&self.engine.on_pointer_leave(Point::new(x, y)))
    }

    /// Zoom from `WheelEvent.deltaY`. The host calls `preventDefault` on the
    /// wheel event before forwarding it.
    ///
    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> Result<String, JsValue> {
        actions(&self.engine.on_wheel(Point::new(x, y), delta_y))
    }

    /// # Errors
    ///
    /// Fails if the canvas has no 2D context or a draw call throws.
    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }

    // --- Panel read models ---

    /// # Errors
    ///
    /// Fails only if the rows cannot be serialized.
    pub fn layers(&self) -> Result<String, JsValue> {
        to_json(&self.engine.core.layers())
    }

    /// Properties of the selection, or `null`.
    ///
    /// # Errors
    ///
    /// Fails only if the properties cannot be serialized.
    pub fn properties(&self) -> Result<String, JsValue> {
        to_json(&self.engine.core.properties())
    }

    /// # Errors
    ///
    /// Fails only if the camera cannot be serialized.
    pub fn camera(&self) -> Result<String, JsValue> {
        to_json(&self.engine.camera())
    }

    // --- Panel commands ---

    /// Select `id`, or clear the selection when `id` is absent.
    ///
    /// # Errors
    ///
    /// Fails only if the actions cannot be serialized.
    pub fn select(&mut self, id: Option<u32>) -> Result<String, JsValue> {
        actions(&self.engine.core.select(id.map(ObjectId::from)))
    }

    /// # Errors
    ///
    /// Fails for an unknown id.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, id: u32, color: &str) -> Result<String, JsValue> {
        let result = self.engine.core.set_color(ObjectId::from(id), color).map_err(BridgeError::from)?;
        actions(&result)
    }

    /// # Errors
    ///
    /// Fails for an unknown id or an object without a name.
    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, id: u32, name: &str) -> Result<String, JsValue> {
        let result = self.engine.core.set_name(ObjectId::from(id), name).map_err(BridgeError::from)?;
        actions(&result)
    }

    /// # Errors
    ///
    /// Fails for an unknown id, a non-positive width, or a zero-width object.
    #[wasm_bindgen(js_name = setWidth)]
    pub fn set_width(&mut self, id: u32, width: f64) -> Result<String, JsValue> {
        let result = self.engine.core.set_width(ObjectId::from(id), width).map_err(BridgeError::from)?;
        actions(&result)
    }

    /// # Errors
    ///
    /// Fails for an unknown id, a non-positive height, or a zero-height object.
    #[wasm_bindgen(js_name = setHeight)]
    pub fn set_height(&mut self, id: u32, height: f64) -> Result<String, JsValue> {
        let result = self.engine.core.set_height(ObjectId::from(id), height).map_err(BridgeError::from)?;
        actions(&result)
    }

    /// # Errors
    ///
    /// Fails for an unknown id.
    #[wasm_bindgen(js_name = toggleVisible)]
    pub fn toggle_visible(&mut self, id: u32) -> Result<String, JsValue> {
        let result = self.engine.core.toggle_visible(ObjectId::from(id)).map_err(BridgeError::from)?;
        actions(&result)
    }

    /// # Errors
    ///
    /// Fails for an unknown id.
    #[wasm_bindgen(js_name = deleteObject)]
    pub fn delete_object(&mut self, id: u32) -> Result<String, JsValue> {
        let result = self.engine.core.delete(ObjectId::from(id)).map_err(BridgeError::from)?;
        actions(&result)
    }
}
