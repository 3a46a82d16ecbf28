//! Hit-testing: scene bodies, resize handles, and the rotate handle.
//!
//! Handles live in the selected object's local (unrotated) frame. Pointer
//! positions are brought into that frame with [`to_local`] before testing, so
//! rotated objects get correctly placed handles. Handle sizes are given in
//! screen pixels and divided by the view scale, keeping them a constant size
//! on screen at any zoom.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::Serialize;

use crate::camera::Point;
use crate::config::EngineConfig;
use crate::doc::{DrawableObject, ObjectId, Scene};
use crate::geom::{BoundingBox, to_local, to_world};

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    RotateHandle,
}

/// Anchor position for resize handles: four corners and four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Corners first, then edges; this is the handle test order.
    pub const ALL: [Self; 8] = [Self::Nw, Self::Ne, Self::Se, Self::Sw, Self::N, Self::E, Self::S, Self::W];

    /// Direction this handle pulls along x: `+1` east, `-1` west, `None` for n/s edges.
    #[must_use]
    pub fn x_dir(self) -> Option<f64> {
        match self {
            Self::Ne | Self::E | Self::Se => Some(1.0),
            Self::Nw | Self::W | Self::Sw => Some(-1.0),
            Self::N | Self::S => None,
        }
    }

    /// Direction this handle pulls along y: `+1` south, `-1` north, `None` for e/w edges.
    #[must_use]
    pub fn y_dir(self) -> Option<f64> {
        match self {
            Self::Se | Self::S | Self::Sw => Some(1.0),
            Self::Ne | Self::N | Self::Nw => Some(-1.0),
            Self::E | Self::W => None,
        }
    }

    /// Handle position on `bb` in the local frame.
    #[must_use]
    pub fn position(self, bb: &BoundingBox) -> Point {
        let c = bb.center();
        let x = match self.x_dir() {
            Some(d) if d > 0.0 => bb.max_x,
            Some(_) => bb.min_x,
            None => c.x,
        };
        let y = match self.y_dir() {
            Some(d) if d > 0.0 => bb.max_y,
            Some(_) => bb.min_y,
            None => c.y,
        };
        Point::new(x, y)
    }

    /// The handle diagonally or directly across the box.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::Ne => Self::Sw,
            Self::E => Self::W,
            Self::Se => Self::Nw,
            Self::S => Self::N,
            Self::Sw => Self::Ne,
            Self::W => Self::E,
            Self::Nw => Self::Se,
        }
    }

    /// Fixed point while dragging this handle: the opposite corner or edge midpoint.
    #[must_use]
    pub fn pivot(self, bb: &BoundingBox) -> Point {
        self.opposite().position(bb)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub object_id: ObjectId,
    pub part: HitPart,
}

/// Rotate handle center in the local frame, above the top edge.
#[must_use]
pub fn rotate_handle_local(bb: &BoundingBox, scale: f64, config: &EngineConfig) -> Point {
    Point::new(bb.center().x, bb.min_y - config.rotate_handle_distance_px / scale)
}

/// Rotate handle center in world space.
#[must_use]
pub fn rotate_handle_position(obj: &DrawableObject, scale: f64, config: &EngineConfig) -> Point {
    to_world(rotate_handle_local(&obj.bounding_box, scale, config), obj.center(), obj.rotation)
}

/// World positions of the eight resize handles, in [`ResizeAnchor::ALL`] order.
#[must_use]
pub fn resize_handle_positions(obj: &DrawableObject) -> [Point; 8] {
    let center = obj.center();
    ResizeAnchor::ALL.map(|a| to_world(a.position(&obj.bounding_box), center, obj.rotation))
}

/// Test `world` against `obj`'s rotate handle, then its resize handles.
#[must_use]
pub fn handle_at(obj: &DrawableObject, world: Point, scale: f64, config: &EngineConfig) -> Option<HitPart> {
    let local = to_local(world, obj.center(), obj.rotation);
    let bb = &obj.bounding_box;

    let knob = rotate_handle_local(bb, scale, config);
    if local.distance(knob) <= config.rotate_handle_radius_px / scale {
        return Some(HitPart::RotateHandle);
    }

    let half = config.handle_size_px / (2.0 * scale);
    ResizeAnchor::ALL
        .into_iter()
        .find(|a| {
            let h = a.position(bb);
            (local.x - h.x).abs() <= half && (local.y - h.y).abs() <= half
        })
        .map(HitPart::ResizeHandle)
}

/// Test which object (if any) is under `world`, checking the selection's handles first.
#[must_use]
pub fn hit_test(world: Point, scene: &Scene, scale: f64, config: &EngineConfig) -> Option<Hit> {
    if let Some(sel) = scene.selected() {
        if let Some(part) = handle_at(sel, world, scale, config) {
            return Some(Hit { object_id: sel.id, part });
        }
    }
    scene
        .hit_test(world)
        .map(|object_id| Hit { object_id, part: HitPart::Body })
}
