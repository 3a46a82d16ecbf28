//! View transform: pan offset and zoom scale for the infinite canvas.
//!
//! All pointer input arrives in screen space and is converted to world space
//! exactly once, at the input boundary in [`crate::engine`]. Stored geometry is
//! always world space.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// World-to-screen mapping: `screen = world * scale + offset`.
///
/// `scale` is deliberately unclamped; it may grow or shrink without bound as
/// long as it stays positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Re-centre the world canvas at the current scale.
    pub fn recenter(&mut self, viewport_w: f64, viewport_h: f64, world_w: f64, world_h: f64) {
        self.offset_x = (viewport_w - world_w * self.scale) / 2.0;
        self.offset_y = (viewport_h - world_h * self.scale) / 2.0;
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x.mul_add(self.scale, self.offset_x),
            y: world.y.mul_add(self.scale, self.offset_y),
        }
    }

    /// Translate the view by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiply the scale by `factor`, keeping the world point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: Point, factor: f64) {
        self.scale *= factor;
        self.offset_x = screen.x - (screen.x - self.offset_x) * factor;
        self.offset_y = screen.y - (screen.y - self.offset_y) * factor;
    }
}

/// Zoom factor for one wheel step: `exp(sign * intensity)`.
///
/// A negative vertical delta (wheel away from the user) zooms in. A zero delta
/// yields `None`.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64, intensity: f64) -> Option<f64> {
    let sign = if delta_y < 0.0 {
        1.0
    } else if delta_y > 0.0 {
        -1.0
    } else {
        return None;
    };
    Some((sign * intensity).exp())
}
