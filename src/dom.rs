//! Mapping from DOM event values and toolbar names to engine input types.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use canvas::input::{Button, Tool};
use canvas::shape::{FrameKind, ShapeKind};

use crate::error::BridgeError;

/// Resolve a toolbar tool name.
///
/// Shape and frame tools are named by their variant: `rectangle`, `circle`,
/// `triangle`, `star`, `frame`, `section`.
///
/// # Errors
///
/// [`BridgeError::UnknownTool`] for any other name.
pub fn parse_tool(name: &str) -> Result<Tool, BridgeError> {
    let tool = match name.trim().to_ascii_lowercase().as_str() {
        "draw" | "pen" => Tool::Draw,
        "select" => Tool::Select,
        "pan" => Tool::Pan,
        "rectangle" => Tool::Shape(ShapeKind::Rectangle),
        "circle" => Tool::Shape(ShapeKind::Circle),
        "triangle" => Tool::Shape(ShapeKind::Triangle),
        "star" => Tool::Shape(ShapeKind::Star),
        "frame" => Tool::Frame(FrameKind::Frame),
        "section" => Tool::Frame(FrameKind::Section),
        _ => return Err(BridgeError::UnknownTool(name.to_owned())),
    };
    Ok(tool)
}

/// Map `MouseEvent.button` to an engine button. Unknown values count as primary.
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}
