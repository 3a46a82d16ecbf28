//! Layers and properties panels: read models and inbound commands.
//!
//! Panels read the scene through [`LayerRow`] and [`Properties`] and write back
//! through the `EngineCore` commands below. Every command returns the same
//! notifications a pointer gesture would, so the host refreshes panels from one
//! place. A rejected command returns an [`EditError`] and leaves state untouched.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::Serialize;

use crate::camera::Point;
use crate::doc::{DrawableObject, ObjectId};
use crate::engine::{Action, EngineCore};
use crate::error::EditError;
use crate::geom::{ObjectKind, Shape};

/// One row of the layers panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRow {
    pub id: ObjectId,
    pub label: String,
    pub kind: ObjectKind,
    pub visible: bool,
    pub selected: bool,
}

/// The properties panel for the selected object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub color: String,
    /// Bounding-box extents in the local frame.
    pub width: f64,
    pub height: f64,
    /// Editable name; frames and sections only.
    pub name: Option<String>,
}

impl Properties {
    fn of(obj: &DrawableObject) -> Self {
        let name = match &obj.shape {
            Shape::Frame { name, .. } | Shape::Section { name, .. } => Some(name.clone()),
            _ => None,
        };
        Self {
            id: obj.id,
            kind: obj.kind(),
            color: obj.color.clone(),
            width: obj.bounding_box.width(),
            height: obj.bounding_box.height(),
            name,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Width,
    Height,
}

impl Axis {
    fn field(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl EngineCore {
    // --- Read models ---

    /// Layer rows in paint order (bottom first).
    #[must_use]
    pub fn layers(&self) -> Vec<LayerRow> {
        self.scene
            .objects()
            .iter()
            .map(|o| LayerRow { id: o.id, label: o.label(), kind: o.kind(), visible: o.visible, selected: o.selected })
            .collect()
    }

    /// Properties of the selected object, if any.
    #[must_use]
    pub fn properties(&self) -> Option<Properties> {
        self.scene.selected().map(Properties::of)
    }

    // --- Commands ---

    /// Select from the layers panel. Missing or hidden ids are ignored.
    pub fn select(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        let mut actions = Vec::new();
        self.select_into(id, &mut actions);
        actions
    }

    /// Recolor an object.
    ///
    /// # Errors
    ///
    /// [`EditError::NotFound`] if `id` is not in the scene.
    pub fn set_color(&mut self, id: ObjectId, color: &str) -> Result<Vec<Action>, EditError> {
        let obj = self.scene.get_mut(id).ok_or(EditError::NotFound(id))?;
        color.clone_into(&mut obj.color);
        Ok(vec![Action::SceneChanged, Action::RenderNeeded])
    }

    /// Rename a frame or section.
    ///
    /// # Errors
    ///
    /// [`EditError::NotFound`] if `id` is not in the scene, [`EditError::NotNamed`]
    /// if it is not a frame or section.
    pub fn set_name(&mut self, id: ObjectId, text: &str) -> Result<Vec<Action>, EditError> {
        let obj = self.scene.get_mut(id).ok_or(EditError::NotFound(id))?;
        let kind = obj.kind();
        match &mut obj.shape {
            Shape::Frame { name, .. } | Shape::Section { name, .. } => text.clone_into(name),
            _ => return Err(EditError::NotNamed(kind)),
        }
        Ok(vec![Action::SceneChanged, Action::RenderNeeded])
    }

    /// Rescale horizontally so the bounding box is `width` wide, anchored at its left edge.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::set_height`].
    pub fn set_width(&mut self, id: ObjectId, width: f64) -> Result<Vec<Action>, EditError> {
        self.set_extent(id, Axis::Width, width)
    }

    /// Rescale vertically so the bounding box is `height` tall, anchored at its top edge.
    ///
    /// A circle stays a circle: its radius becomes half the new extent and its
    /// center does not move.
    ///
    /// # Errors
    ///
    /// [`EditError::NotFound`] for an unknown id, [`EditError::NonPositive`] for a
    /// value that is not a finite positive number, and
    /// [`EditError::DegenerateAxis`] when the current extent is zero.
    pub fn set_height(&mut self, id: ObjectId, height: f64) -> Result<Vec<Action>, EditError> {
        self.set_extent(id, Axis::Height, height)
    }

    /// Flip visibility. Hiding the selected object also deselects it.
    ///
    /// # Errors
    ///
    /// [`EditError::NotFound`] if `id` is not in the scene.
    pub fn toggle_visible(&mut self, id: ObjectId) -> Result<Vec<Action>, EditError> {
        let was_selected = self.scene.selected_id() == Some(id);
        let visible = self.scene.toggle_visible(id).ok_or(EditError::NotFound(id))?;
        tracing::debug!(id, visible, "visibility toggled");
        let mut actions = vec![Action::SceneChanged];
        if was_selected && !visible {
            actions.push(Action::SelectionChanged { id: None });
        }
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Remove an object. Deleting the selection clears it.
    ///
    /// # Errors
    ///
    /// [`EditError::NotFound`] if `id` is not in the scene.
    pub fn delete(&mut self, id: ObjectId) -> Result<Vec<Action>, EditError> {
        let was_selected = self.scene.selected_id() == Some(id);
        let removed = self.scene.remove(id).ok_or(EditError::NotFound(id))?;
        tracing::info!(id, kind = ?removed.kind(), "object deleted");
        let mut actions = vec![Action::ObjectDeleted { id }, Action::SceneChanged];
        if was_selected {
            actions.push(Action::SelectionChanged { id: None });
        }
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    fn set_extent(&mut self, id: ObjectId, axis: Axis, value: f64) -> Result<Vec<Action>, EditError> {
        if let Err(err) = self.try_set_extent(id, axis, value) {
            tracing::warn!(id, field = axis.field(), value, %err, "edit rejected");
            return Err(err);
        }
        Ok(vec![Action::SceneChanged, Action::RenderNeeded])
    }

    fn try_set_extent(&mut self, id: ObjectId, axis: Axis, value: f64) -> Result<(), EditError> {
        let field = axis.field();
        let obj = self.scene.get_mut(id).ok_or(EditError::NotFound(id))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(EditError::NonPositive { field, value });
        }
        let bb = obj.bounding_box;
        let old = match axis {
            Axis::Width => bb.width(),
            Axis::Height => bb.height(),
        };
        if old <= 0.0 {
            return Err(EditError::DegenerateAxis { field });
        }

        let shape = match &obj.shape {
            Shape::Circle { center, .. } => Shape::Circle { center: *center, r: value / 2.0 },
            other => {
                let s = value / old;
                let (sx, sy) = match axis {
                    Axis::Width => (s, 1.0),
                    Axis::Height => (1.0, s),
                };
                other.rescaled(Point::new(bb.min_x, bb.min_y), sx, sy)
            }
        };
        obj.set_shape(shape);
        Ok(())
    }
}
