//! Geometry kernel: shape variants, bounding boxes, centers, and rotation frames.
//!
//! Every drawable carries exactly one [`Shape`]. Functions here are total: empty
//! point lists and zero-size boxes produce degenerate results instead of NaN,
//! and nothing in this module depends on the scene, the camera, or input.
//!
//! Rotation is stored separately on the object and is never baked into the
//! shape. A shape's coordinates and its [`BoundingBox`] therefore always
//! describe the object's unrotated local frame.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Drawable variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Freehand,
    Rectangle,
    Circle,
    Triangle,
    Star,
    Frame,
    Section,
}

impl ObjectKind {
    /// Human-readable variant name, used for default frame names and layer labels.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Freehand => "Pen",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Star => "Star",
            Self::Frame => "Frame",
            Self::Section => "Section",
        }
    }
}

/// Axis-aligned rectangle in the local frame: origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The rectangle spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }
}

/// Bounding box `{min_x, min_y, max_x, max_y}` in an object's unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Min/max fold over `points`. An empty slice yields the zero box.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };
        rest.iter().fold(
            Self { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y },
            |bb, p| Self {
                min_x: bb.min_x.min(p.x),
                min_y: bb.min_y.min(p.y),
                max_x: bb.max_x.max(p.x),
                max_y: bb.max_y.max(p.y),
            },
        )
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// Inclusive containment test on all four edges.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Shift by a delta without recomputing from geometry.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

/// Geometry of a drawable, one variant per kind.
///
/// Frames and sections carry a user-editable `name` and a reserved `children`
/// slot that nothing in this crate populates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Freehand { points: Vec<Point> },
    Rectangle { rect: Rect },
    Circle { center: Point, r: f64 },
    Triangle { points: [Point; 3] },
    Star { points: [Point; 10] },
    Frame { rect: Rect, name: String, children: Vec<u64> },
    Section { rect: Rect, name: String, children: Vec<u64> },
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Freehand { .. } => ObjectKind::Freehand,
            Self::Rectangle { .. } => ObjectKind::Rectangle,
            Self::Circle { .. } => ObjectKind::Circle,
            Self::Triangle { .. } => ObjectKind::Triangle,
            Self::Star { .. } => ObjectKind::Star,
            Self::Frame { .. } => ObjectKind::Frame,
            Self::Section { .. } => ObjectKind::Section,
        }
    }

    /// The origin/extent for rectangle-like variants.
    #[must_use]
    pub fn rect(&self) -> Option<&Rect> {
        match self {
            Self::Rectangle { rect } | Self::Frame { rect, .. } | Self::Section { rect, .. } => Some(rect),
            _ => None,
        }
    }

    /// The vertex list for point-based variants.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Freehand { points } => Some(points.as_slice()),
            Self::Triangle { points } => Some(points.as_slice()),
            Self::Star { points } => Some(points.as_slice()),
            _ => None,
        }
    }

    /// Whether moving this shape can shift its cached box instead of recomputing it.
    #[must_use]
    pub fn has_parametric_box(&self) -> bool {
        self.points().is_none()
    }

    /// Shift every origin/point field by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Rectangle { rect } | Self::Frame { rect, .. } | Self::Section { rect, .. } => {
                rect.x += dx;
                rect.y += dy;
            }
            Self::Circle { center, .. } => {
                center.x += dx;
                center.y += dy;
            }
            Self::Freehand { points } => shift_points(points, dx, dy),
            Self::Triangle { points } => shift_points(points, dx, dy),
            Self::Star { points } => shift_points(points, dx, dy),
        }
    }

    /// A copy of this shape scaled about `pivot` by `(sx, sy)`.
    ///
    /// Circles stay circular: their center is mapped like a point and their
    /// radius scales by `sx`, so callers pass a uniform factor for circles.
    #[must_use]
    pub fn rescaled(&self, pivot: Point, sx: f64, sy: f64) -> Self {
        let map = |p: Point| scale_point(p, pivot, sx, sy);
        let map_rect = |r: &Rect| {
            let origin = map(Point::new(r.x, r.y));
            Rect { x: origin.x, y: origin.y, width: r.width * sx, height: r.height * sy }
        };
        match self {
            Self::Freehand { points } => Self::Freehand { points: points.iter().copied().map(map).collect() },
            Self::Rectangle { rect } => Self::Rectangle { rect: map_rect(rect) },
            Self::Circle { center, r } => Self::Circle { center: map(*center), r: r * sx },
            Self::Triangle { points } => Self::Triangle { points: points.map(map) },
            Self::Star { points } => Self::Star { points: points.map(map) },
            Self::Frame { rect, name, children } => Self::Frame {
                rect: map_rect(rect),
                name: name.clone(),
                children: children.clone(),
            },
            Self::Section { rect, name, children } => Self::Section {
                rect: map_rect(rect),
                name: name.clone(),
                children: children.clone(),
            },
        }
    }
}

fn shift_points(points: &mut [Point], dx: f64, dy: f64) {
    for p in points {
        p.x += dx;
        p.y += dy;
    }
}

fn scale_point(p: Point, pivot: Point, sx: f64, sy: f64) -> Point {
    Point::new((p.x - pivot.x).mul_add(sx, pivot.x), (p.y - pivot.y).mul_add(sy, pivot.y))
}

/// Bounding box of a shape in its unrotated local frame.
#[must_use]
pub fn bounding_box_of(shape: &Shape) -> BoundingBox {
    match shape {
        Shape::Rectangle { rect } | Shape::Frame { rect, .. } | Shape::Section { rect, .. } => BoundingBox {
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.x + rect.width,
            max_y: rect.y + rect.height,
        },
        Shape::Circle { center, r } => BoundingBox {
            min_x: center.x - r,
            min_y: center.y - r,
            max_x: center.x + r,
            max_y: center.y + r,
        },
        Shape::Freehand { points } => BoundingBox::from_points(points),
        Shape::Triangle { points } => BoundingBox::from_points(points),
        Shape::Star { points } => BoundingBox::from_points(points),
    }
}

/// Rotation pivot of a shape.
///
/// Point-based shapes use their bounding-box center, not the vertex centroid,
/// so resize and rotate agree on a single frame.
#[must_use]
pub fn center_of(shape: &Shape) -> Point {
    match shape {
        Shape::Rectangle { rect } | Shape::Frame { rect, .. } | Shape::Section { rect, .. } => {
            Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
        }
        Shape::Circle { center, .. } => *center,
        Shape::Freehand { .. } | Shape::Triangle { .. } | Shape::Star { .. } => bounding_box_of(shape).center(),
    }
}

/// Inverse-rotate `world` about `center` by `rotation` radians into the local frame.
#[must_use]
pub fn to_local(world: Point, center: Point, rotation: f64) -> Point {
    if rotation == 0.0 {
        return world;
    }
    let (sin, cos) = rotation.sin_cos();
    let dx = world.x - center.x;
    let dy = world.y - center.y;
    Point::new(dx.mul_add(cos, dy * sin) + center.x, dy.mul_add(cos, -dx * sin) + center.y)
}

/// Rotate a local-frame point about `center` by `rotation` radians into world space.
#[must_use]
pub fn to_world(local: Point, center: Point, rotation: f64) -> Point {
    if rotation == 0.0 {
        return local;
    }
    let (sin, cos) = rotation.sin_cos();
    let dx = local.x - center.x;
    let dy = local.y - center.y;
    Point::new(dx.mul_add(cos, -dy * sin) + center.x, dx.mul_add(sin, dy * cos) + center.y)
}

/// Inclusive point-in-box test.
#[must_use]
pub fn point_in_box(p: Point, bb: &BoundingBox) -> bool {
    bb.contains(p)
}
