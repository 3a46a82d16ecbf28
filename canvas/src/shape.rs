//! Gesture-to-shape construction.
//!
//! A shape or frame gesture records only a start point and a current point.
//! These builders turn that pair into committed geometry; the renderer uses
//! the same builders for the live preview so preview and commit never differ.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{FRAC_PI_5, STAR_INNER_RATIO, STAR_POINTS};
use crate::geom::{Rect, Shape};

/// Parametric shapes created by the shape tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
}

/// Container variants created by the frame tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Frame,
    Section,
}

/// Build a shape of `kind` from the gesture's start and current points.
#[must_use]
pub fn build_shape(kind: ShapeKind, start: Point, current: Point) -> Shape {
    match kind {
        ShapeKind::Rectangle => Shape::Rectangle { rect: Rect::from_corners(start, current) },
        ShapeKind::Circle => Shape::Circle { center: start, r: start.distance(current) },
        ShapeKind::Triangle => Shape::Triangle {
            points: [start, Point::new(current.x, start.y), Point::new(start.x, current.y)],
        },
        ShapeKind::Star => Shape::Star { points: star_points(&Rect::from_corners(start, current)) },
    }
}

/// Build a frame or section spanning the two corners, named after its kind.
#[must_use]
pub fn build_frame(kind: FrameKind, start: Point, current: Point) -> Shape {
    let rect = Rect::from_corners(start, current);
    match kind {
        FrameKind::Frame => Shape::Frame { rect, name: "Frame".to_owned(), children: Vec::new() },
        FrameKind::Section => Shape::Section { rect, name: "Section".to_owned(), children: Vec::new() },
    }
}

/// Ten vertices alternating outer/inner radius, inscribed in `bounds`.
///
/// The outer radius is half the smaller side. The first vertex sits straight
/// above the center (angle π/2 with y pointing down the screen) and each
/// following vertex steps 36°.
#[must_use]
pub fn star_points(bounds: &Rect) -> [Point; STAR_POINTS] {
    let cx = bounds.x + bounds.width / 2.0;
    let cy = bounds.y + bounds.height / 2.0;
    let outer = bounds.width.min(bounds.height) / 2.0;
    let inner = outer * STAR_INNER_RATIO;

    let mut points = [Point::default(); STAR_POINTS];
    for (i, p) in (0_u32..).zip(points.iter_mut()) {
        let angle = FRAC_PI_5.mul_add(f64::from(i), FRAC_PI_2);
        let r = if i % 2 == 0 { outer } else { inner };
        *p = Point::new(r.mul_add(angle.cos(), cx), (-r).mul_add(angle.sin(), cy));
    }
    points
}

/// Whether a frame gesture is large enough to commit.
///
/// Shapes commit at any size; frames and sections need positive width and height.
#[must_use]
pub fn frame_is_committable(shape: &Shape) -> bool {
    shape.rect().is_some_and(|r| r.width > 0.0 && r.height > 0.0)
}
