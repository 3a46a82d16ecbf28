//! Resize and rotate gesture math.
//!
//! Both gestures capture what they need at pointer-down and derive every
//! later frame from that capture, never from the previous frame's result.
//! Resizing rescales the pre-gesture geometry snapshot, so dragging a handle
//! back and forth cannot accumulate drift.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::camera::Point;
use crate::doc::{DrawableObject, ObjectId};
use crate::geom::{Shape, center_of, to_local, to_world};
use crate::hit::ResizeAnchor;

/// An in-flight resize of one object from one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub id: ObjectId,
    pub anchor: ResizeAnchor,
    /// Fixed point in the local frame. A circle's pivot is its own center.
    pub pivot: Point,
    /// Center and rotation of the local frame at pointer-down.
    pub center: Point,
    pub rotation: f64,
    /// Geometry at pointer-down; every frame rescales this.
    pub snapshot: Shape,
    /// Extents the scale factors are measured against. For a circle both are the radius.
    pub old_width: f64,
    pub old_height: f64,
    /// Factors applied on the previous frame, kept for axes a frame rejects.
    pub last_scale: (f64, f64),
}

impl ResizeGesture {
    #[must_use]
    pub fn begin(obj: &DrawableObject, anchor: ResizeAnchor) -> Self {
        let bb = &obj.bounding_box;
        let (pivot, old_width, old_height) = match &obj.shape {
            Shape::Circle { center, r } => (*center, *r, *r),
            _ => (anchor.pivot(bb), bb.width(), bb.height()),
        };
        Self {
            id: obj.id,
            anchor,
            pivot,
            center: obj.center(),
            rotation: obj.rotation,
            snapshot: obj.shape.clone(),
            old_width,
            old_height,
            last_scale: (1.0, 1.0),
        }
    }

    /// Scale factors for a pointer at `local` (already in the object's frame).
    ///
    /// An axis the handle does not pull, or whose original extent is zero,
    /// stays at `1.0`. An axis whose new extent would be zero or negative keeps
    /// the previous frame's factor.
    #[must_use]
    pub fn scales_at(&self, local: Point) -> (f64, f64) {
        let offset_x = local.x - self.pivot.x;
        let offset_y = local.y - self.pivot.y;

        if matches!(self.snapshot, Shape::Circle { .. }) {
            if self.old_width <= 0.0 {
                return self.last_scale;
            }
            let pulled = [
                self.anchor.x_dir().map(|d| d * offset_x),
                self.anchor.y_dir().map(|d| d * offset_y),
            ];
            let s = pulled
                .into_iter()
                .flatten()
                .filter(|extent| *extent > 0.0)
                .map(|extent| extent / self.old_width)
                .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))));
            return s.map_or(self.last_scale, |s| (s, s));
        }

        (
            axis_scale(self.anchor.x_dir(), offset_x, self.old_width, self.last_scale.0),
            axis_scale(self.anchor.y_dir(), offset_y, self.old_height, self.last_scale.1),
        )
    }

    /// Geometry for a pointer at `world`. Records the factors for the next frame.
    ///
    /// The rescaled shape rotates about its own new center, so it is shifted
    /// until the pivot lands on the same world point it had at pointer-down.
    pub fn update(&mut self, world: Point) -> Shape {
        let local = to_local(world, self.center, self.rotation);
        let (sx, sy) = self.scales_at(local);
        self.last_scale = (sx, sy);
        let mut shape = self.snapshot.rescaled(self.pivot, sx, sy);
        if self.rotation != 0.0 {
            let fixed = to_world(self.pivot, self.center, self.rotation);
            let moved = to_world(self.pivot, center_of(&shape), self.rotation);
            shape.translate(fixed.x - moved.x, fixed.y - moved.y);
        }
        shape
    }
}

fn axis_scale(dir: Option<f64>, offset: f64, old: f64, last: f64) -> f64 {
    let Some(dir) = dir else {
        return 1.0;
    };
    if old <= 0.0 {
        return 1.0;
    }
    let extent = dir * offset;
    if extent <= 0.0 { last } else { extent / old }
}

/// An in-flight rotation about a center fixed at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateGesture {
    pub id: ObjectId,
    pub center: Point,
    pub start_angle: f64,
    pub initial_rotation: f64,
}

impl RotateGesture {
    #[must_use]
    pub fn begin(obj: &DrawableObject, world: Point) -> Self {
        let center = obj.center();
        Self { id: obj.id, center, start_angle: angle_from(center, world), initial_rotation: obj.rotation }
    }

    /// Rotation for a pointer at `world`. Not normalized, so multi-turn drags stay continuous.
    #[must_use]
    pub fn rotation_at(&self, world: Point) -> f64 {
        self.initial_rotation + (angle_from(self.center, world) - self.start_angle)
    }
}

/// Angle of `p` seen from `center`, in radians.
#[must_use]
pub fn angle_from(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}
