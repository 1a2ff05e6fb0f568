use std::f64::consts::FRAC_PI_2;

use proptest::prelude::*;

use rasterkit_core::{Color, Point};
use rasterkit_shapes::{
    Curve, CurveAlgorithm, Ellipse, EllipseAlgorithm, Line, LineAlgorithm, Polygon, Shape,
    ShapeOps,
};

fn sample_line() -> Line {
    Line::new(
        Point::new(0, 0),
        Point::new(10, 0),
        Color::BLACK,
        LineAlgorithm::Dda,
    )
}

fn sample_polygon() -> Polygon {
    Polygon::new(
        vec![Point::new(3, 4), Point::new(40, 8), Point::new(22, 31)],
        Color::BLACK,
        LineAlgorithm::Default,
    )
    .unwrap()
}

fn sample_curve() -> Curve {
    Curve::new(
        vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
        Color::BLACK,
        CurveAlgorithm::Bezier,
    )
    .unwrap()
}

fn sample_ellipse() -> Ellipse {
    Ellipse::new(
        Point::new(50, 50),
        20,
        10,
        Color::BLACK,
        EllipseAlgorithm::Midpoint,
    )
    .unwrap()
}

#[test]
fn test_rotate_by_zero_is_identity() {
    let mut shapes = [
        Shape::Line(sample_line()),
        Shape::Polygon(sample_polygon()),
        Shape::Ellipse(sample_ellipse()),
        Shape::Curve(sample_curve()),
    ];
    for shape in &mut shapes {
        let before = shape.rect_hull();
        shape.rotate(Point::new(7, -3), 0.0);
        assert_eq!(shape.rect_hull(), before, "{}", shape.kind().name());
    }
}

#[test]
fn test_scale_by_one_is_identity() {
    let mut shapes = [
        Shape::Line(sample_line()),
        Shape::Polygon(sample_polygon()),
        Shape::Ellipse(sample_ellipse()),
        Shape::Curve(sample_curve()),
    ];
    for shape in &mut shapes {
        let before = shape.rect_hull();
        shape.scale(Point::new(100, 100), 1.0);
        assert_eq!(shape.rect_hull(), before, "{}", shape.kind().name());
    }
}

#[test]
fn test_translate_moves_every_point() {
    let mut line = sample_line();
    line.translate(Point::new(5, -2));
    assert_eq!(line.endpoints(), (Point::new(5, -2), Point::new(15, -2)));

    let mut polygon = sample_polygon();
    polygon.translate(Point::new(1, 1));
    assert_eq!(
        polygon.vertices(),
        &[Point::new(4, 5), Point::new(41, 9), Point::new(23, 32)]
    );

    let mut ellipse = sample_ellipse();
    ellipse.translate(Point::new(-10, 10));
    assert_eq!(ellipse.geometry(), (Point::new(40, 60), 20, 10));
}

#[test]
fn test_rotate_quarter_turn_carries_x_onto_y() {
    let mut line = sample_line();
    line.rotate(Point::new(0, 0), FRAC_PI_2);
    assert_eq!(line.endpoints(), (Point::new(0, 0), Point::new(0, 10)));
}

#[test]
fn test_edits_during_transaction_start_from_snapshot() {
    let mut line = sample_line();
    line.begin_transaction();
    line.translate(Point::new(5, 0));
    // The second translate previews from the snapshot, not cumulatively.
    line.translate(Point::new(7, 0));
    assert_eq!(line.endpoints(), (Point::new(7, 0), Point::new(17, 0)));

    line.commit_transaction();
    assert_eq!(line.endpoints(), (Point::new(7, 0), Point::new(17, 0)));

    // After commit, edits work from the live geometry again.
    line.translate(Point::new(1, 0));
    assert_eq!(line.endpoints(), (Point::new(8, 0), Point::new(18, 0)));
}

#[test]
fn test_rollback_restores_each_shape() {
    let mut line = sample_line();
    let before = line.endpoints();
    line.begin_transaction();
    line.rotate(Point::new(3, 3), 1.234);
    line.rollback_transaction();
    assert_eq!(line.endpoints(), before);

    let mut polygon = sample_polygon();
    let before = polygon.vertices().to_vec();
    polygon.begin_transaction();
    polygon.scale(Point::new(0, 0), 2.5);
    polygon.rollback_transaction();
    assert_eq!(polygon.vertices(), before.as_slice());

    let mut ellipse = sample_ellipse();
    let before = ellipse.geometry();
    ellipse.begin_transaction();
    ellipse.translate(Point::new(9, 9));
    ellipse.rollback_transaction();
    assert_eq!(ellipse.geometry(), before);

    let mut curve = sample_curve();
    let before = curve.control_points().to_vec();
    curve.begin_transaction();
    curve.rotate(Point::new(5, 5), -0.5);
    curve.rollback_transaction();
    assert_eq!(curve.control_points(), before.as_slice());
}

#[test]
fn test_rollback_after_commit_is_a_no_op() {
    let mut line = sample_line();
    line.begin_transaction();
    line.translate(Point::new(4, 4));
    line.commit_transaction();
    line.rollback_transaction();
    assert_eq!(line.endpoints(), (Point::new(4, 4), Point::new(14, 4)));
}

#[test]
fn test_center_pin_and_release() {
    let mut line = Line::new(
        Point::new(0, 0),
        Point::new(10, 10),
        Color::BLACK,
        LineAlgorithm::Default,
    );
    assert_eq!(line.center(), Point::new(5, 5));

    line.set_center(Point::new(40, 40));
    assert_eq!(line.center(), Point::new(40, 40));

    // Moving the shape so its centroid lands near the pin releases it.
    line.translate(Point::new(33, 33));
    assert_eq!(line.center(), Point::new(38, 38));

    // The release is sticky even if the shape moves away again.
    line.translate(Point::new(-33, -33));
    assert_eq!(line.center(), Point::new(5, 5));
}

#[test]
fn test_pin_near_centroid_is_not_kept() {
    let mut polygon = sample_polygon();
    let auto = polygon.center();
    polygon.set_center(auto + Point::new(2, -1));
    assert_eq!(polygon.center(), auto);
}

#[test]
fn test_ellipse_quarter_turn_swaps_radii() {
    let mut ellipse = sample_ellipse();
    ellipse.rotate(Point::new(50, 50), FRAC_PI_2);
    assert_eq!(ellipse.geometry(), (Point::new(50, 50), 10, 20));

    ellipse.rotate(Point::new(50, 50), -FRAC_PI_2);
    assert_eq!(ellipse.geometry(), (Point::new(50, 50), 20, 10));
}

#[test]
fn test_ellipse_half_turn_keeps_radii() {
    let mut ellipse = sample_ellipse();
    ellipse.rotate(Point::new(50, 50), std::f64::consts::PI);
    assert_eq!(ellipse.geometry(), (Point::new(50, 50), 20, 10));
}

#[test]
fn test_ellipse_rotation_off_axis_is_ignored() {
    let mut ellipse = sample_ellipse();
    ellipse.rotate(Point::new(0, 0), 0.7);
    assert_eq!(ellipse.geometry(), (Point::new(50, 50), 20, 10));
}

#[test]
fn test_ellipse_scale_truncates_radii() {
    let mut ellipse = Ellipse::new(
        Point::new(50, 50),
        15,
        9,
        Color::BLACK,
        EllipseAlgorithm::Default,
    )
    .unwrap();
    ellipse.scale(Point::new(50, 50), 0.5);
    assert_eq!(ellipse.geometry(), (Point::new(50, 50), 7, 4));
}

proptest! {
    #[test]
    fn prop_rollback_restores_polygon_vertices(
        dx in -200i32..200,
        dy in -200i32..200,
        factor in 0.1f64..4.0,
        radians in -3.1f64..3.1,
    ) {
        let original = vec![Point::new(3, 4), Point::new(40, 8), Point::new(22, 31)];
        let mut polygon =
            Polygon::new(original.clone(), Color::BLACK, LineAlgorithm::Default).unwrap();

        polygon.begin_transaction();
        polygon.translate(Point::new(dx, dy));
        polygon.scale(Point::new(10, 10), factor);
        polygon.rotate(Point::new(10, 10), radians);
        polygon.rollback_transaction();

        prop_assert_eq!(polygon.vertices(), original.as_slice());
    }

    #[test]
    fn prop_translate_round_trips(dx in -500i32..500, dy in -500i32..500) {
        let mut line = Line::new(
            Point::new(12, -7),
            Point::new(90, 44),
            Color::BLACK,
            LineAlgorithm::Bresenham,
        );
        line.translate(Point::new(dx, dy));
        line.translate(Point::new(-dx, -dy));
        prop_assert_eq!(line.endpoints(), (Point::new(12, -7), Point::new(90, 44)));
    }
}
