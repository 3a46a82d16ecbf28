//! Input model: tools, mouse buttons, cursors, and the gesture state machine.
//!
//! `Tool` is the mode selected from the toolbar. `InputState` is the active
//! gesture between pointer-down and pointer-up, carrying all the context needed
//! to compute the next frame and to commit on release. A gesture's state is
//! built on pointer-down and dropped on commit, cancel, or tool change.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::camera::Point;
use crate::consts::DEFAULT_COLOR;
use crate::doc::ObjectId;
use crate::hit::{HitPart, ResizeAnchor};
use crate::shape::{FrameKind, ShapeKind};
use crate::transform::{ResizeGesture, RotateGesture};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Draw,
    /// Drag out a parametric shape.
    Shape(ShapeKind),
    /// Select, move, resize, and rotate.
    Select,
    /// Drag to pan the view.
    Pan,
    /// Drag out a frame or section.
    Frame(FrameKind),
}

impl Tool {
    /// Cursor shown while no gesture is active.
    #[must_use]
    pub fn idle_cursor(self) -> Cursor {
        match self {
            Self::Draw | Self::Shape(_) | Self::Frame(_) => Cursor::Crosshair,
            Self::Select => Cursor::Default,
            Self::Pan => Cursor::Grab,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// CSS cursor the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Default,
    Crosshair,
    Grab,
    Grabbing,
    Move,
    NwseResize,
    NeswResize,
    NsResize,
    EwResize,
}

impl Cursor {
    #[must_use]
    pub fn for_anchor(anchor: ResizeAnchor) -> Self {
        match anchor {
            ResizeAnchor::Nw | ResizeAnchor::Se => Self::NwseResize,
            ResizeAnchor::Ne | ResizeAnchor::Sw => Self::NeswResize,
            ResizeAnchor::N | ResizeAnchor::S => Self::NsResize,
            ResizeAnchor::E | ResizeAnchor::W => Self::EwResize,
        }
    }

    /// Hover cursor for a hit in select mode.
    #[must_use]
    pub fn for_hit(part: HitPart) -> Self {
        match part {
            HitPart::Body => Self::Move,
            HitPart::ResizeHandle(anchor) => Self::for_anchor(anchor),
            HitPart::RotateHandle => Self::Grab,
        }
    }
}

/// Persistent toolbar state.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub tool: Tool,
    /// Color given to every newly committed object.
    pub current_color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: Tool::default(), current_color: DEFAULT_COLOR.to_owned() }
    }
}

/// Internal state for the input state machine.
///
/// Each active variant carries the gesture context needed to compute the next
/// frame and to commit on pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Freehand stroke in progress. Points are world-space and never decimated.
    Drawing { points: Vec<Point> },
    /// Shape tool drag. Only the two corners are kept; nothing is in the scene yet.
    ShapePreview { kind: ShapeKind, start: Point, current: Point },
    /// Frame tool drag, same as `ShapePreview` for frames and sections.
    FramePreview { kind: FrameKind, start: Point, current: Point },
    /// Dragging the view.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// Moving the selected object.
    Dragging {
        id: ObjectId,
        /// World-space position of the pointer at the previous event.
        last_world: Point,
    },
    /// Dragging one of the selection's eight resize handles.
    Resizing(ResizeGesture),
    /// Dragging the selection's rotate handle.
    Rotating(RotateGesture),
}

impl InputState {
    /// Whether a pointer leaving the canvas ends this gesture.
    ///
    /// Pans and drags end; freehand strokes continue until an explicit release.
    #[must_use]
    pub fn ends_on_leave(&self) -> bool {
        matches!(self, Self::Panning { .. } | Self::Dragging { .. })
    }

    /// Gestures that mutate an existing object as the pointer moves.
    #[must_use]
    pub fn edits_in_place(&self) -> bool {
        matches!(self, Self::Dragging { .. } | Self::Resizing(_) | Self::Rotating(_))
    }
}
