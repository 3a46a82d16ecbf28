#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect_shape(x: f64, y: f64, width: f64, height: f64) -> Shape {
    Shape::Rectangle { rect: Rect { x, y, width, height } }
}

fn bb(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox { min_x, min_y, max_x, max_y }
}

// =============================================================
// bounding_box_of
// =============================================================

#[test]
fn rectangle_box_is_origin_plus_extent() {
    assert_eq!(bounding_box_of(&rect_shape(10.0, 20.0, 30.0, 40.0)), bb(10.0, 20.0, 40.0, 60.0));
}

#[test]
fn frame_and_section_box_like_rectangles() {
    let rect = Rect { x: -5.0, y: 5.0, width: 10.0, height: 2.0 };
    let frame = Shape::Frame { rect, name: "Frame".into(), children: Vec::new() };
    let section = Shape::Section { rect, name: "Section".into(), children: Vec::new() };
    assert_eq!(bounding_box_of(&frame), bb(-5.0, 5.0, 5.0, 7.0));
    assert_eq!(bounding_box_of(&section), bb(-5.0, 5.0, 5.0, 7.0));
}

#[test]
fn circle_box_spans_radius() {
    let c = Shape::Circle { center: pt(5.0, 5.0), r: 3.0 };
    assert_eq!(bounding_box_of(&c), bb(2.0, 2.0, 8.0, 8.0));
}

#[test]
fn point_box_folds_min_max() {
    let s = Shape::Freehand { points: vec![pt(3.0, 1.0), pt(-2.0, 7.0), pt(4.0, 4.0)] };
    assert_eq!(bounding_box_of(&s), bb(-2.0, 1.0, 4.0, 7.0));
}

#[test]
fn empty_points_yield_zero_box() {
    let s = Shape::Freehand { points: Vec::new() };
    assert_eq!(bounding_box_of(&s), BoundingBox::default());
    assert_eq!(BoundingBox::from_points(&[]), bb(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn bounding_box_is_idempotent() {
    let shapes = [
        rect_shape(1.0, 2.0, 3.0, 4.0),
        Shape::Circle { center: pt(0.5, 0.25), r: 9.0 },
        Shape::Triangle { points: [pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)] },
        Shape::Freehand { points: vec![pt(1.0, 1.0), pt(2.0, 5.0)] },
    ];
    for s in &shapes {
        assert_eq!(bounding_box_of(s), bounding_box_of(s));
    }
}

// =============================================================
// center_of
// =============================================================

#[test]
fn rectangle_center_is_geometric_center() {
    assert!(point_approx_eq(center_of(&rect_shape(0.0, 0.0, 10.0, 4.0)), pt(5.0, 2.0)));
}

#[test]
fn circle_center_is_center_field() {
    assert_eq!(center_of(&Shape::Circle { center: pt(7.0, -3.0), r: 2.0 }), pt(7.0, -3.0));
}

#[test]
fn point_based_center_is_box_center_not_centroid() {
    // Centroid would be (1.333, 1.0); box center is (2, 1.5).
    let tri = Shape::Triangle { points: [pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)] };
    assert!(point_approx_eq(center_of(&tri), pt(2.0, 1.5)));
}

// =============================================================
// to_local / to_world
// =============================================================

#[test]
fn zero_rotation_is_exact_identity() {
    let p = pt(0.1 + 0.2, 1e-17);
    assert_eq!(to_local(p, pt(3.0, 3.0), 0.0), p);
    assert_eq!(to_world(p, pt(3.0, 3.0), 0.0), p);
}

#[test]
fn to_local_undoes_quarter_turn() {
    // (1, 0) relative to center, rotated +90° lands at (0, 1).
    let center = pt(10.0, 10.0);
    let world = pt(10.0, 11.0);
    assert!(point_approx_eq(to_local(world, center, FRAC_PI_2), pt(11.0, 10.0)));
}

#[test]
fn to_world_inverts_to_local() {
    let center = pt(-4.0, 2.5);
    for &rot in &[0.3, -1.2, PI, 7.0 * PI] {
        let p = pt(13.0, -8.0);
        let back = to_world(to_local(p, center, rot), center, rot);
        assert!(point_approx_eq(back, p), "rotation {rot}");
    }
}

// =============================================================
// point_in_box
// =============================================================

#[test]
fn point_in_box_is_inclusive_on_edges() {
    let b = bb(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_box(pt(0.0, 0.0), &b));
    assert!(point_in_box(pt(10.0, 10.0), &b));
    assert!(point_in_box(pt(10.0, 5.0), &b));
    assert!(point_in_box(pt(5.0, 0.0), &b));
    assert!(!point_in_box(pt(10.000_001, 5.0), &b));
    assert!(!point_in_box(pt(5.0, -0.000_001), &b));
}

#[test]
fn degenerate_box_contains_its_point() {
    let b = bb(3.0, 3.0, 3.0, 3.0);
    assert!(point_in_box(pt(3.0, 3.0), &b));
    assert!(!point_in_box(pt(3.0, 3.1), &b));
}

// =============================================================
// translate / rescaled
// =============================================================

#[test]
fn translate_moves_every_variant() {
    let mut r = rect_shape(0.0, 0.0, 5.0, 5.0);
    r.translate(2.0, 3.0);
    assert_eq!(r.rect().map(|r| (r.x, r.y)), Some((2.0, 3.0)));

    let mut c = Shape::Circle { center: pt(1.0, 1.0), r: 1.0 };
    c.translate(-1.0, -1.0);
    assert_eq!(center_of(&c), pt(0.0, 0.0));

    let mut s = Shape::Freehand { points: vec![pt(0.0, 0.0), pt(1.0, 1.0)] };
    s.translate(10.0, 0.0);
    assert_eq!(s.points(), Some(&[pt(10.0, 0.0), pt(11.0, 1.0)][..]));
}

#[test]
fn rescaled_rect_about_min_corner() {
    let r = rect_shape(0.0, 0.0, 10.0, 10.0).rescaled(pt(0.0, 0.0), 2.0, 0.5);
    assert_eq!(bounding_box_of(&r), bb(0.0, 0.0, 20.0, 5.0));
}

#[test]
fn rescaled_rect_about_far_corner_keeps_pivot() {
    let r = rect_shape(0.0, 0.0, 10.0, 10.0).rescaled(pt(10.0, 10.0), 0.5, 0.5);
    assert_eq!(bounding_box_of(&r), bb(5.0, 5.0, 10.0, 10.0));
}

#[test]
fn rescaled_circle_about_center_only_changes_radius() {
    let c = Shape::Circle { center: pt(4.0, 4.0), r: 2.0 }.rescaled(pt(4.0, 4.0), 3.0, 3.0);
    assert_eq!(c, Shape::Circle { center: pt(4.0, 4.0), r: 6.0 });
}

#[test]
fn rescaled_points_about_pivot() {
    let tri = Shape::Triangle { points: [pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 2.0)] };
    let out = tri.rescaled(pt(0.0, 0.0), 0.5, 2.0);
    assert_eq!(out.points(), Some(&[pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 4.0)][..]));
}

#[test]
fn rescaled_frame_keeps_name() {
    let f = Shape::Frame { rect: Rect { x: 0.0, y: 0.0, width: 2.0, height: 2.0 }, name: "Hero".into(), children: Vec::new() };
    match f.rescaled(pt(0.0, 0.0), 2.0, 2.0) {
        Shape::Frame { rect, name, .. } => {
            assert_eq!(name, "Hero");
            assert_eq!(rect.width, 4.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn rect_from_corners_normalizes() {
    let r = Rect::from_corners(pt(10.0, 2.0), pt(4.0, 8.0));
    assert_eq!(r, Rect { x: 4.0, y: 2.0, width: 6.0, height: 6.0 });
}

#[test]
fn kind_display_names() {
    assert_eq!(ObjectKind::Freehand.display_name(), "Pen");
    assert_eq!(ObjectKind::Section.display_name(), "Section");
}

#[test]
fn shape_serializes_with_kind_tag() {
    let json = serde_json::to_value(Shape::Circle { center: pt(1.0, 2.0), r: 3.0 }).unwrap_or_default();
    assert_eq!(json["kind"], "circle");
    assert_eq!(json["r"], 3.0);
}
