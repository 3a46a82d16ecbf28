use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, wheel_zoom_factor};
use crate::config::EngineConfig;
use crate::doc::{DrawableObject, ObjectId, Scene};
use crate::geom::Shape;
use crate::hit::{self, Hit, HitPart};
use crate::input::{Button, Cursor, InputState, Tool, UiState};
use crate::render::{self, Preview, RenderSnapshot};
use crate::shape::{build_frame, build_shape, frame_is_committable};
use crate::transform::{ResizeGesture, RotateGesture};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notifications returned from handlers for the host to process.
///
/// This is the only channel from the engine outward: the host repaints on
/// `RenderNeeded` and refreshes its panels on `SceneChanged` /
/// `SelectionChanged`, then calls back in with discrete commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    SceneChanged,
    SelectionChanged { id: Option<ObjectId> },
    ObjectCreated { id: ObjectId },
    ObjectDeleted { id: ObjectId },
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let ui = UiState { current_color: config.default_color.clone(), ..UiState::default() };
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            ui,
            input: InputState::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// The view is recentered on the world only while the scene is empty; once
    /// anything is drawn, resizing the viewport keeps the current pan and zoom.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        if self.scene.is_empty() {
            self.camera
                .recenter(width_css, height_css, self.config.world_width, self.config.world_height);
            tracing::debug!(width_css, height_css, "view recentered on empty scene");
        }
        vec![Action::RenderNeeded]
    }

    // --- Toolbar ---

    /// Switch tools. Any in-flight gesture is abandoned without committing.
    ///
    /// A move, resize, or rotate has already edited its object, so abandoning
    /// one still reports the scene change. Switching to the draw tool also
    /// clears the selection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let previous = std::mem::take(&mut self.input);
        let abandoned = previous != InputState::Idle;
        self.ui.tool = tool;
        tracing::debug!(?tool, abandoned, "tool changed");

        let mut actions = Vec::new();
        if previous.edits_in_place() {
            actions.push(Action::SceneChanged);
        }
        if tool == Tool::Draw {
            self.select_into(None, &mut actions);
        }
        actions.push(Action::SetCursor(tool.idle_cursor()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Set the color for objects committed from now on.
    pub fn set_current_color(&mut self, color: &str) {
        color.clone_into(&mut self.ui.current_color);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match button {
            Button::Middle => self.start_pan(screen_pt),
            Button::Secondary => Vec::new(),
            Button::Primary => match self.ui.tool {
                Tool::Draw => {
                    let mut actions = Vec::new();
                    self.select_into(None, &mut actions);
                    self.input = InputState::Drawing { points: vec![world] };
                    actions.push(Action::RenderNeeded);
                    actions
                }
                Tool::Shape(kind) => {
                    self.input = InputState::ShapePreview { kind, start: world, current: world };
                    vec![Action::RenderNeeded]
                }
                Tool::Frame(kind) => {
                    self.input = InputState::FramePreview { kind, start: world, current: world };
                    vec![Action::RenderNeeded]
                }
                Tool::Pan => self.start_pan(screen_pt),
                Tool::Select => self.select_pointer_down(screen_pt, world),
            },
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match &mut self.input {
            InputState::Idle => self.hover(world),
            InputState::Drawing { points } => {
                points.push(world);
                vec![Action::RenderNeeded]
            }
            InputState::ShapePreview { current, .. } | InputState::FramePreview { current, .. } => {
                *current = world;
                vec![Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                self.camera.pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                *last_screen = screen_pt;
                vec![Action::RenderNeeded]
            }
            InputState::Dragging { id, last_world } => {
                let (dx, dy) = (world.x - last_world.x, world.y - last_world.y);
                *last_world = world;
                let Some(obj) = self.scene.get_mut(*id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                obj.translate(dx, dy);
                vec![Action::RenderNeeded]
            }
            InputState::Resizing(gesture) => {
                let shape = gesture.update(world);
                let Some(obj) = self.scene.get_mut(gesture.id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                obj.set_shape(shape);
                vec![Action::RenderNeeded]
            }
            InputState::Rotating(gesture) => {
                let rotation = gesture.rotation_at(world);
                let Some(obj) = self.scene.get_mut(gesture.id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                obj.rotation = rotation;
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Finish the active gesture, committing whatever it built.
    ///
    /// Secondary presses start nothing, so secondary releases end nothing.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Secondary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        let mut actions = match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { points } => {
                if points.len() >= 2 {
                    self.commit(Shape::Freehand { points })
                } else {
                    tracing::debug!(points = points.len(), "stroke too short; discarded");
                    vec![Action::RenderNeeded]
                }
            }
            InputState::ShapePreview { kind, start, current } => self.commit(build_shape(kind, start, current)),
            InputState::FramePreview { kind, start, current } => {
                let shape = build_frame(kind, start, current);
                if frame_is_committable(&shape) {
                    self.commit(shape)
                } else {
                    tracing::debug!(?kind, "empty frame discarded");
                    vec![Action::RenderNeeded]
                }
            }
            InputState::Panning { .. } => Vec::new(),
            InputState::Dragging { .. } | InputState::Resizing(_) | InputState::Rotating(_) => {
                vec![Action::SceneChanged, Action::RenderNeeded]
            }
        };
        actions.push(Action::SetCursor(self.rest_cursor(world)));
        actions
    }

    /// Pointer left the canvas: an implicit release for pans and drags only.
    ///
    /// A freehand stroke keeps collecting points when the pointer comes back.
    pub fn on_pointer_leave(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.input.ends_on_leave() {
            return Vec::new();
        }
        self.on_pointer_up(screen_pt, Button::Primary)
    }

    /// Zoom about the pointer. A wheel event with no vertical delta does nothing.
    pub fn on_wheel(&mut self, screen_pt: Point, delta_y: f64) -> Vec<Action> {
        let Some(factor) = wheel_zoom_factor(delta_y, self.config.zoom_intensity) else {
            return Vec::new();
        };
        self.camera.zoom_at(screen_pt, factor);
        vec![Action::RenderNeeded]
    }

    // --- Render contract ---

    /// Read-only view of everything the renderer paints.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let preview = match &self.input {
            InputState::Drawing { points } => Some(Preview::Stroke(points)),
            InputState::ShapePreview { kind, start, current } => {
                Some(Preview::Shape(build_shape(*kind, *start, *current)))
            }
            InputState::FramePreview { kind, start, current } => {
                Some(Preview::Shape(build_frame(*kind, *start, *current)))
            }
            _ => None,
        };
        RenderSnapshot {
            objects: self.scene.objects(),
            selected: self.scene.selected(),
            camera: self.camera,
            preview,
            preview_color: &self.ui.current_color,
            preview_stroke_width: self.config.default_stroke_width,
            config: &self.config,
        }
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.scene.selected_id()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&DrawableObject> {
        self.scene.get(id)
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    // --- Internals ---

    fn start_pan(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    /// Select mode: handles of the current selection, then bodies, then empty space.
    fn select_pointer_down(&mut self, screen_pt: Point, world: Point) -> Vec<Action> {
        let hit = hit::hit_test(world, &self.scene, self.camera.scale, &self.config);
        let Some(Hit { object_id, part }) = hit else {
            let mut actions = Vec::new();
            self.select_into(None, &mut actions);
            actions.extend(self.start_pan(screen_pt));
            return actions;
        };
        let Some(obj) = self.scene.get(object_id) else {
            return Vec::new();
        };
        match part {
            HitPart::RotateHandle => {
                self.input = InputState::Rotating(RotateGesture::begin(obj, world));
                vec![Action::SetCursor(Cursor::Grab)]
            }
            HitPart::ResizeHandle(anchor) => {
                self.input = InputState::Resizing(ResizeGesture::begin(obj, anchor));
                vec![Action::SetCursor(Cursor::for_anchor(anchor))]
            }
            HitPart::Body => {
                let mut actions = Vec::new();
                self.select_into(Some(object_id), &mut actions);
                self.input = InputState::Dragging { id: object_id, last_world: world };
                actions.push(Action::SetCursor(Cursor::Move));
                actions
            }
        }
    }

    fn hover(&self, world: Point) -> Vec<Action> {
        if self.ui.tool != Tool::Select {
            return Vec::new();
        }
        vec![Action::SetCursor(self.rest_cursor(world))]
    }

    /// Cursor with no gesture active: hover feedback in select mode, the tool's idle cursor otherwise.
    fn rest_cursor(&self, world: Point) -> Cursor {
        if self.ui.tool != Tool::Select {
            return self.ui.tool.idle_cursor();
        }
        hit::hit_test(world, &self.scene, self.camera.scale, &self.config)
            .map_or(Cursor::Default, |h| Cursor::for_hit(h.part))
    }

    /// Add a finished object to the scene and select it.
    fn commit(&mut self, shape: Shape) -> Vec<Action> {
        let kind = shape.kind();
        let id = self.scene.insert(shape, &self.ui.current_color, self.config.default_stroke_width);
        tracing::info!(id, ?kind, "object committed");
        let mut actions = vec![Action::ObjectCreated { id }, Action::SceneChanged];
        self.select_into(Some(id), &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Change the selection, pushing a notification and a repaint if it changed.
    pub(crate) fn select_into(&mut self, id: Option<ObjectId>, actions: &mut Vec<Action>) {
        if self.scene.select(id) {
            actions.push(Action::SelectionChanged { id: self.scene.selected_id() });
            actions.push(Action::RenderNeeded);
        }
    }
}

/// Device-pixel size of the canvas backing store for a CSS viewport.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_store_size(width_css: f64, height_css: f64, dpr: f64) -> (u32, u32) {
    let px = |css: f64| (css * dpr).round().max(1.0) as u32;
    (px(width_css), px(height_css))
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        Self { canvas, core: EngineCore::new(config) }
    }

    // --- Delegated toolbar and viewport ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn set_current_color(&mut self, color: &str) {
        self.core.set_current_color(color);
    }

    /// Size the canvas backing store to the CSS size times `dpr`, then update the core.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let (width_px, height_px) = backing_store_size(width_css, height_css, dpr);
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
        self.core.set_viewport(width_css, height_css, dpr)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_leave(screen_pt)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta_y: f64) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta_y)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core.snapshot(), self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&DrawableObject> {
        self.core.object(id)
    }
}
