#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::geom::{Rect, Shape};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn bb(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox { min_x, min_y, max_x, max_y }
}

/// Scene with one selected 100x50 rectangle at the origin.
fn scene_with_selected_rect(rotation: f64) -> (Scene, ObjectId) {
    let mut scene = Scene::new();
    let id = scene.insert(Shape::Rectangle { rect: Rect { x: 0.0, y: 0.0, width: 100.0, height: 50.0 } }, "#000", 2.0);
    if let Some(obj) = scene.get_mut(id) {
        obj.rotation = rotation;
    }
    scene.select(Some(id));
    (scene, id)
}

fn selected(scene: &Scene) -> &DrawableObject {
    scene.selected().unwrap_or_else(|| panic!("expected a selection"))
}

// =============================================================
// ResizeAnchor geometry
// =============================================================

#[test]
fn anchor_positions_on_box() {
    let b = bb(0.0, 0.0, 10.0, 20.0);
    assert_eq!(ResizeAnchor::Nw.position(&b), pt(0.0, 0.0));
    assert_eq!(ResizeAnchor::Se.position(&b), pt(10.0, 20.0));
    assert_eq!(ResizeAnchor::N.position(&b), pt(5.0, 0.0));
    assert_eq!(ResizeAnchor::W.position(&b), pt(0.0, 10.0));
}

#[test]
fn pivot_is_opposite_corner_or_edge_midpoint() {
    let b = bb(0.0, 0.0, 10.0, 20.0);
    assert_eq!(ResizeAnchor::Nw.pivot(&b), pt(10.0, 20.0));
    assert_eq!(ResizeAnchor::Ne.pivot(&b), pt(0.0, 20.0));
    assert_eq!(ResizeAnchor::Se.pivot(&b), pt(0.0, 0.0));
    assert_eq!(ResizeAnchor::Sw.pivot(&b), pt(10.0, 0.0));
    assert_eq!(ResizeAnchor::N.pivot(&b), pt(5.0, 20.0));
    assert_eq!(ResizeAnchor::S.pivot(&b), pt(5.0, 0.0));
    assert_eq!(ResizeAnchor::E.pivot(&b), pt(0.0, 10.0));
    assert_eq!(ResizeAnchor::W.pivot(&b), pt(10.0, 10.0));
}

#[test]
fn edge_handles_pull_one_axis() {
    assert!(ResizeAnchor::N.x_dir().is_none());
    assert_eq!(ResizeAnchor::N.y_dir(), Some(-1.0));
    assert_eq!(ResizeAnchor::E.x_dir(), Some(1.0));
    assert!(ResizeAnchor::E.y_dir().is_none());
}

#[test]
fn opposite_is_an_involution() {
    for a in ResizeAnchor::ALL {
        assert_eq!(a.opposite().opposite(), a);
        assert_ne!(a.opposite(), a);
    }
}

// =============================================================
// handle_at — unrotated
// =============================================================

#[test]
fn corner_handle_hits_within_half_size() {
    let (scene, _) = scene_with_selected_rect(0.0);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    assert_eq!(handle_at(obj, pt(103.9, 53.9), 1.0, &config), Some(HitPart::ResizeHandle(ResizeAnchor::Se)));
    assert_eq!(handle_at(obj, pt(-4.0, -4.0), 1.0, &config), Some(HitPart::ResizeHandle(ResizeAnchor::Nw)));
    assert!(handle_at(obj, pt(104.5, 54.5), 1.0, &config).is_none());
}

#[test]
fn edge_midpoint_handles_hit() {
    let (scene, _) = scene_with_selected_rect(0.0);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    assert_eq!(handle_at(obj, pt(50.0, 50.0), 1.0, &config), Some(HitPart::ResizeHandle(ResizeAnchor::S)));
    assert_eq!(handle_at(obj, pt(0.0, 25.0), 1.0, &config), Some(HitPart::ResizeHandle(ResizeAnchor::W)));
    assert!(handle_at(obj, pt(30.0, 50.0), 1.0, &config).is_none());
}

#[test]
fn handles_scale_with_zoom() {
    let (scene, _) = scene_with_selected_rect(0.0);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    // At scale 4 the handle is 2 world units wide (1 each side).
    assert!(handle_at(obj, pt(101.5, 51.5), 4.0, &config).is_none());
    assert!(handle_at(obj, pt(100.9, 50.9), 4.0, &config).is_some());
    // At scale 0.5 it is 16 world units wide.
    assert!(handle_at(obj, pt(107.0, 57.0), 0.5, &config).is_some());
}

#[test]
fn rotate_handle_sits_above_top_edge() {
    let (scene, _) = scene_with_selected_rect(0.0);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    assert_eq!(rotate_handle_position(obj, 1.0, &config), pt(50.0, -24.0));
    assert_eq!(handle_at(obj, pt(50.0, -24.0), 1.0, &config), Some(HitPart::RotateHandle));
    assert_eq!(handle_at(obj, pt(55.0, -20.0), 1.0, &config), Some(HitPart::RotateHandle));
    assert_eq!(rotate_handle_position(obj, 2.0, &config), pt(50.0, -12.0));
}

#[test]
fn rotate_handle_wins_over_resize_handle() {
    // Tiny object: the rotate knob overlaps the N handle at low zoom.
    let mut scene = Scene::new();
    let id = scene.insert(Shape::Rectangle { rect: Rect { x: 0.0, y: 0.0, width: 4.0, height: 4.0 } }, "#000", 2.0);
    scene.select(Some(id));
    let config = EngineConfig { rotate_handle_distance_px: 4.0, ..EngineConfig::default() };
    let obj = selected(&scene);
    assert_eq!(handle_at(obj, pt(2.0, -2.0), 1.0, &config), Some(HitPart::RotateHandle));
}

// =============================================================
// handle_at — rotated
// =============================================================

#[test]
fn rotated_handles_follow_the_object() {
    // Rotating the 100x50 box a quarter turn about (50, 25) moves its SE
    // corner (100, 50) to (25, 75).
    let (scene, _) = scene_with_selected_rect(FRAC_PI_2);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    let positions = resize_handle_positions(obj);
    let se = positions[2];
    assert!((se.x - 25.0).abs() < 1e-9 && (se.y - 75.0).abs() < 1e-9, "{se:?}");
    assert_eq!(handle_at(obj, pt(25.0, 75.0), 1.0, &config), Some(HitPart::ResizeHandle(ResizeAnchor::Se)));
    // The unrotated SE position is no longer a handle.
    assert!(handle_at(obj, pt(100.0, 50.0), 1.0, &config).is_none());
}

#[test]
fn rotated_rotate_handle_is_tested_in_local_frame() {
    let (scene, _) = scene_with_selected_rect(PI);
    let config = EngineConfig::default();
    let obj = selected(&scene);
    let knob = rotate_handle_position(obj, 1.0, &config);
    // Half turn puts the knob below the box.
    assert!((knob.x - 50.0).abs() < 1e-9 && (knob.y - 74.0).abs() < 1e-9, "{knob:?}");
    assert_eq!(handle_at(obj, knob, 1.0, &config), Some(HitPart::RotateHandle));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_test_checks_selection_handles_before_bodies() {
    let (mut scene, first) = scene_with_selected_rect(0.0);
    // A second object covering the first one's SE corner.
    scene.insert(Shape::Rectangle { rect: Rect { x: 90.0, y: 40.0, width: 50.0, height: 50.0 } }, "#000", 2.0);
    let config = EngineConfig::default();
    let hit = hit_test(pt(100.0, 50.0), &scene, 1.0, &config);
    assert_eq!(hit, Some(Hit { object_id: first, part: HitPart::ResizeHandle(ResizeAnchor::Se) }));
}

#[test]
fn hit_test_falls_back_to_topmost_body() {
    let (mut scene, _) = scene_with_selected_rect(0.0);
    let top = scene.insert(Shape::Rectangle { rect: Rect { x: 10.0, y: 10.0, width: 20.0, height: 20.0 } }, "#000", 2.0);
    let config = EngineConfig::default();
    let hit = hit_test(pt(20.0, 20.0), &scene, 1.0, &config);
    assert_eq!(hit, Some(Hit { object_id: top, part: HitPart::Body }));
}

#[test]
fn hit_test_empty_space_is_none() {
    let (scene, _) = scene_with_selected_rect(0.0);
    assert!(hit_test(pt(500.0, 500.0), &scene, 1.0, &EngineConfig::default()).is_none());
}
