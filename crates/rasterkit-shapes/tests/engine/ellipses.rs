use rasterkit_core::{Canvas, Color, Point, Rect};
use rasterkit_shapes::{Ellipse, EllipseAlgorithm, ShapeOps};

fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.pixel(x, y) == Some(Color::BLACK) {
                out.push((x, y));
            }
        }
    }
    out
}

fn rasterize(center: Point, rx: i32, ry: i32) -> Vec<(i32, i32)> {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let ellipse = Ellipse::new(center, rx, ry, Color::BLACK, EllipseAlgorithm::Midpoint).unwrap();
    ellipse.draw(&mut canvas);
    painted(&canvas)
}

#[test]
fn test_circle_touches_axis_extremes() {
    let pixels = rasterize(Point::new(20, 20), 8, 8);
    for p in [(28, 20), (12, 20), (20, 28), (20, 12)] {
        assert!(pixels.contains(&p), "missing extreme {p:?}");
    }
}

#[test]
fn test_output_is_four_way_symmetric() {
    let (cx, cy) = (20, 18);
    let pixels = rasterize(Point::new(cx, cy), 12, 7);
    for &(x, y) in &pixels {
        assert!(pixels.contains(&(2 * cx - x, y)), "x mirror of ({x}, {y})");
        assert!(pixels.contains(&(x, 2 * cy - y)), "y mirror of ({x}, {y})");
    }
}

#[test]
fn test_zero_x_radius_degenerates_to_vertical_run() {
    let pixels = rasterize(Point::new(10, 10), 0, 5);
    let expect: Vec<(i32, i32)> = (5..=15).map(|y| (10, y)).collect();
    assert_eq!(pixels, expect);
}

#[test]
fn test_zero_y_radius_degenerates_to_horizontal_run() {
    let pixels = rasterize(Point::new(10, 10), 5, 0);
    let expect: Vec<(i32, i32)> = (5..=15).map(|x| (x, 10)).collect();
    assert_eq!(pixels, expect);
}

#[test]
fn test_point_ellipse_paints_single_pixel() {
    assert_eq!(rasterize(Point::new(7, 9), 0, 0), vec![(7, 9)]);
}

#[test]
fn test_from_box_round_trips_through_hull() {
    let ellipse = Ellipse::from_box(
        Point::new(50, 60),
        Point::new(10, 20),
        Color::BLACK,
        EllipseAlgorithm::Default,
    );
    assert_eq!(ellipse.geometry(), (Point::new(30, 40), 20, 20));
    assert_eq!(
        ellipse.rect_hull(),
        Rect::from_corners(Point::new(10, 20), Point::new(50, 60))
    );
}

#[test]
fn test_from_box_with_odd_extents_truncates() {
    let ellipse = Ellipse::from_box(
        Point::new(0, 0),
        Point::new(9, 7),
        Color::BLACK,
        EllipseAlgorithm::Default,
    );
    assert_eq!(ellipse.geometry(), (Point::new(4, 3), 4, 3));
    assert_eq!(
        ellipse.rect_hull(),
        Rect::from_corners(Point::new(0, 0), Point::new(8, 6))
    );
}

#[test]
fn test_algorithm_tags_parse() {
    assert_eq!("".parse(), Ok(EllipseAlgorithm::Default));
    assert_eq!("Midpoint".parse(), Ok(EllipseAlgorithm::Midpoint));
    assert_eq!("Bresenham".parse(), Ok(EllipseAlgorithm::Midpoint));
    assert!("Wu".parse::<EllipseAlgorithm>().is_err());
}

#[test]
fn test_negative_radius_is_rejected() {
    let err = Ellipse::new(
        Point::new(0, 0),
        -1,
        5,
        Color::BLACK,
        EllipseAlgorithm::Midpoint,
    )
    .unwrap_err();
    assert_eq!(err, rasterkit_shapes::ShapeError::NegativeRadius { rx: -1, ry: 5 });
}
