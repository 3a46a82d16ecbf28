//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`RenderSnapshot`] and produces pixels; it does not
//! mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::config::EngineConfig;
use crate::doc::DrawableObject;
use crate::geom::{Shape, to_world};
use crate::hit::{self, ResizeAnchor};

/// Selection dash segment length in screen pixels.
const SELECTION_DASH_PX: f64 = 4.0;
/// Frame/section title size in screen pixels.
const LABEL_FONT_PX: f64 = 12.0;
/// Gap between a frame's top edge and its title, in screen pixels.
const LABEL_GAP_PX: f64 = 4.0;

const SELECTION_COLOR: &str = "#1E90FF";
const SECTION_FILL: &str = "rgba(60, 64, 70, 0.06)";

/// Geometry held outside the scene while a creation gesture is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview<'a> {
    /// Freehand samples collected so far.
    Stroke(&'a [Point]),
    /// What the shape or frame tool would commit if released now.
    Shape(Shape),
}

/// Everything the renderer needs, borrowed from the engine.
#[derive(Debug, Clone)]
pub struct RenderSnapshot<'a> {
    /// Committed objects in paint order (bottom first).
    pub objects: &'a [DrawableObject],
    pub selected: Option<&'a DrawableObject>,
    pub camera: Camera,
    pub preview: Option<Preview<'a>>,
    pub preview_color: &'a str,
    pub preview_stroke_width: f64,
    pub config: &'a EngineConfig,
}

/// Draw the full scene: background, objects, selection chrome, then the preview.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    snap: &RenderSnapshot<'_>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let camera = &snap.camera;

    // Layer 1: clear to white and set up the view transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str("#fff");
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.offset_x, camera.offset_y)?;
    ctx.scale(camera.scale, camera.scale)?;

    // Layer 2: visible objects in paint order.
    for obj in snap.objects.iter().filter(|o| o.visible) {
        draw_object(ctx, obj, camera.scale)?;
    }

    // Layer 3: selection chrome.
    if let Some(sel) = snap.selected {
        draw_selection(ctx, sel, camera.scale, snap.config)?;
    }

    // Layer 4: in-flight preview.
    if let Some(preview) = &snap.preview {
        ctx.save();
        ctx.set_stroke_style_str(snap.preview_color);
        ctx.set_line_width(snap.preview_stroke_width);
        match preview {
            Preview::Stroke(points) => trace_polyline(ctx, points, false),
            Preview::Shape(shape) => trace_shape(ctx, shape)?,
        }
        ctx.stroke();
        ctx.restore();
    }

    Ok(())
}

// =============================================================
// Objects
// =============================================================

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &DrawableObject, scale: f64) -> Result<(), JsValue> {
    ctx.save();
    rotate_about_center(ctx, obj)?;

    ctx.set_stroke_style_str(&obj.color);
    ctx.set_line_width(obj.stroke_width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    if let Shape::Section { rect, .. } = &obj.shape {
        ctx.set_fill_style_str(SECTION_FILL);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    trace_shape(ctx, &obj.shape)?;
    ctx.stroke();

    if let Shape::Frame { rect, name, .. } | Shape::Section { rect, name, .. } = &obj.shape {
        ctx.set_fill_style_str(&obj.color);
        ctx.set_font(&format!("{}px sans-serif", LABEL_FONT_PX / scale));
        ctx.set_text_baseline("bottom");
        ctx.fill_text(name, rect.x, rect.y - LABEL_GAP_PX / scale)?;
    }

    ctx.restore();
    Ok(())
}

/// Begin a path tracing `shape` in world coordinates. The caller strokes it.
fn trace_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    match shape {
        Shape::Rectangle { rect } | Shape::Frame { rect, .. } | Shape::Section { rect, .. } => {
            ctx.begin_path();
            ctx.rect(rect.x, rect.y, rect.width, rect.height);
        }
        Shape::Circle { center, r } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, *r, 0.0, 2.0 * PI)?;
        }
        Shape::Freehand { points } => trace_polyline(ctx, points, false),
        Shape::Triangle { points } => trace_polyline(ctx, points, true),
        Shape::Star { points } => trace_polyline(ctx, points, true),
    }
    Ok(())
}

fn trace_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], closed: bool) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
    if closed {
        ctx.close_path();
    }
}

/// Rotate the context about the object's center. No-op for unrotated objects.
fn rotate_about_center(ctx: &CanvasRenderingContext2d, obj: &DrawableObject) -> Result<(), JsValue> {
    if obj.rotation == 0.0 {
        return Ok(());
    }
    let c = obj.center();
    ctx.translate(c.x, c.y)?;
    ctx.rotate(obj.rotation)?;
    ctx.translate(-c.x, -c.y)?;
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection(
    ctx: &CanvasRenderingContext2d,
    obj: &DrawableObject,
    scale: f64,
    config: &EngineConfig,
) -> Result<(), JsValue> {
    // Dashed bounding box, rotated with the object.
    ctx.save();
    rotate_about_center(ctx, obj)?;
    let bb = &obj.bounding_box;
    let dash = SELECTION_DASH_PX / scale;
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0 / scale);
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash.into());
    dash_array.push(&dash.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(bb.min_x, bb.min_y, bb.width(), bb.height());
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();

    // Handles are placed in world coordinates, so the context stays unrotated.
    let half = config.handle_size_px / (2.0 * scale);
    let handles = hit::resize_handle_positions(obj);
    ctx.save();
    ctx.set_fill_style_str("#fff");
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0 / scale);
    for pos in &handles {
        ctx.fill_rect(pos.x - half, pos.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(pos.x - half, pos.y - half, half * 2.0, half * 2.0);
    }

    // Rotate knob, tethered to the N handle.
    let knob = hit::rotate_handle_position(obj, scale, config);
    let n_handle = to_world(ResizeAnchor::N.position(&obj.bounding_box), obj.center(), obj.rotation);
    ctx.begin_path();
    ctx.move_to(n_handle.x, n_handle.y);
    ctx.line_to(knob.x, knob.y);
    ctx.stroke();

    ctx.begin_path();
    ctx.arc(knob.x, knob.y, config.rotate_handle_radius_px / scale, 0.0, 2.0 * PI)?;
    ctx.fill();
    ctx.stroke();
    ctx.restore();
    Ok(())
}
