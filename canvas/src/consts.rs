//! Shared numeric constants for the canvas crate.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°) — angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Number of vertices in a star polygon (alternating outer/inner).
pub const STAR_POINTS: usize = 10;

/// Inner-to-outer radius ratio for the default 5-point star.
pub const STAR_INNER_RATIO: f64 = 0.5;

// ── World ───────────────────────────────────────────────────────

/// Width of the fixed world canvas centred in the viewport on startup.
pub const WORLD_WIDTH: f64 = 3000.0;

/// Height of the fixed world canvas centred in the viewport on startup.
pub const WORLD_HEIGHT: f64 = 2000.0;

// ── Handles ─────────────────────────────────────────────────────

/// Side of a square resize handle, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 8.0;

/// Distance from the bounding box top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

/// Radius of the circular rotate handle hit zone, in screen pixels.
pub const ROTATE_HANDLE_RADIUS_PX: f64 = 8.0;

// ── View ────────────────────────────────────────────────────────

/// Exponent step applied per wheel notch: `factor = exp(±ZOOM_INTENSITY)`.
pub const ZOOM_INTENSITY: f64 = 0.1;

// ── Presentation defaults ───────────────────────────────────────

/// Stroke color for new objects until the toolbar picks another.
pub const DEFAULT_COLOR: &str = "#000000";

/// Stroke width in world units for new objects.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
