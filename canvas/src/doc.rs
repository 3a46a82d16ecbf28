//! Scene model: drawable objects, paint order, and the single selection.
//!
//! `Scene` owns every committed object in creation order. Creation order is
//! paint order and the default z-order: later objects paint on top and are
//! hit-tested first.
//!
//! Selection is tracked twice, as a pointer on the scene and as a flag on each
//! object. Every path that changes one changes the other, so at most one object
//! ever has `selected == true`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::Serialize;

use crate::camera::Point;
use crate::geom::{BoundingBox, ObjectKind, Shape, bounding_box_of, center_of};

/// Unique identifier for a drawable. Assigned monotonically and never reused.
pub type ObjectId = u64;

/// A committed drawable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawableObject {
    pub id: ObjectId,
    pub shape: Shape,
    /// Radians about [`DrawableObject::center`]; `0.0` means unrotated.
    pub rotation: f64,
    /// Cached box of `shape` in the unrotated local frame.
    pub bounding_box: BoundingBox,
    pub visible: bool,
    pub selected: bool,
    pub color: String,
    pub stroke_width: f64,
}

impl DrawableObject {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    /// Rotation pivot in world space.
    #[must_use]
    pub fn center(&self) -> Point {
        center_of(&self.shape)
    }

    /// User-facing name: the editable name for frames and sections, `"{Kind} {id}"` otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.shape {
            Shape::Frame { name, .. } | Shape::Section { name, .. } => name.clone(),
            _ => format!("{} {}", self.kind().display_name(), self.id),
        }
    }

    /// Rebuild the cached bounding box from geometry.
    pub fn recompute_bounding_box(&mut self) {
        self.bounding_box = bounding_box_of(&self.shape);
    }

    /// Move by a world-space delta.
    ///
    /// Parametric shapes shift the cached box by the same delta; point-based
    /// shapes recompute it from the moved points.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.shape.translate(dx, dy);
        if self.shape.has_parametric_box() {
            self.bounding_box = self.bounding_box.translated(dx, dy);
        } else {
            self.recompute_bounding_box();
        }
    }

    /// Replace the geometry and refresh the cached box.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.recompute_bounding_box();
    }
}

/// Ordered collection of drawables plus the selection pointer.
#[derive(Debug)]
pub struct Scene {
    objects: Vec<DrawableObject>,
    selected: Option<ObjectId>,
    next_id: ObjectId,
}

impl Scene {
    /// Create an empty scene. The first object gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Vec::new(), selected: None, next_id: 1 }
    }

    /// Commit a new object on top of the paint order and return its id.
    pub fn insert(&mut self, shape: Shape, color: &str, stroke_width: f64) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        let bounding_box = bounding_box_of(&shape);
        self.objects.push(DrawableObject {
            id,
            shape,
            rotation: 0.0,
            bounding_box,
            visible: true,
            selected: false,
            color: color.to_owned(),
            stroke_width,
        });
        id
    }

    /// Remove an object, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: ObjectId) -> Option<DrawableObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let removed = self.objects.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&DrawableObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DrawableObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Change the selection. Returns `true` if the selection pointer changed.
    ///
    /// `None` clears the selection. Selecting an id that is missing or hidden
    /// is ignored.
    pub fn select(&mut self, id: Option<ObjectId>) -> bool {
        if let Some(target) = id {
            if !self.get(target).is_some_and(|o| o.visible) {
                return false;
            }
        }
        if self.selected == id {
            return false;
        }
        if let Some(prev) = self.selected.and_then(|prev| self.get_mut(prev)) {
            prev.selected = false;
        }
        if let Some(next) = id.and_then(|next| self.get_mut(next)) {
            next.selected = true;
        }
        self.selected = id;
        true
    }

    /// Id of the selected object, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected
    }

    /// The selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&DrawableObject> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Flip visibility. Hiding the selected object deselects it.
    ///
    /// Returns the new visibility, or `None` if the id is unknown.
    pub fn toggle_visible(&mut self, id: ObjectId) -> Option<bool> {
        let obj = self.get_mut(id)?;
        obj.visible = !obj.visible;
        let visible = obj.visible;
        if !visible {
            obj.selected = false;
            if self.selected == Some(id) {
                self.selected = None;
            }
        }
        Some(visible)
    }

    /// Topmost visible object whose unrotated bounding box contains `world`.
    ///
    /// Rotation is not inverse-applied here: a rotated object is hit inside its
    /// local box as if it were unrotated. Only handle tests in [`crate::hit`]
    /// account for rotation.
    #[must_use]
    pub fn hit_test(&self, world: Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.visible)
            .find(|o| o.bounding_box.contains(world))
            .map(|o| o.id)
    }

    /// Rebuild one object's cached box. Returns false if the id is unknown.
    pub fn recompute_bounding_box(&mut self, id: ObjectId) -> bool {
        let Some(obj) = self.get_mut(id) else {
            return false;
        };
        obj.recompute_bounding_box();
        true
    }

    /// All objects in paint order (bottom first).
    #[must_use]
    pub fn objects(&self) -> &[DrawableObject] {
        &self.objects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
