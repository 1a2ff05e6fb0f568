use rasterkit_core::{Color, Point, Rect};
use rasterkit_shapes::clip::{cohen_sutherland, liang_barsky};
use rasterkit_shapes::{ClipAlgorithm, Line, LineAlgorithm};

fn window() -> Rect {
    Rect::from_corners(Point::new(0, 0), Point::new(100, 80))
}

#[test]
fn test_both_algorithms_agree() {
    // Fully inside, fully outside, and boundary-crossing samples.
    let cases = [
        (Point::new(10, 10), Point::new(50, 50)),
        (Point::new(0, 0), Point::new(100, 80)),
        (Point::new(-30, 10), Point::new(-5, 70)),
        (Point::new(120, -40), Point::new(200, -10)),
        (Point::new(-50, 40), Point::new(150, 40)),
        (Point::new(50, 40), Point::new(150, 40)),
        (Point::new(30, -10), Point::new(30, 200)),
        (Point::new(-20, -20), Point::new(120, 120)),
        (Point::new(10, -5), Point::new(90, -5)),
    ];
    for (a, b) in cases {
        let cs = cohen_sutherland(a, b, &window());
        let lb = liang_barsky(a, b, &window());
        assert_eq!(cs, lb, "disagreement clipping {a:?}..{b:?}");
    }
}

#[test]
fn test_fully_outside_returns_none() {
    let a = Point::new(-10, -10);
    let b = Point::new(-2, -30);
    assert_eq!(cohen_sutherland(a, b, &window()), None);
    assert_eq!(liang_barsky(a, b, &window()), None);
}

#[test]
fn test_crossing_segment_endpoints() {
    let a = Point::new(-20, -20);
    let b = Point::new(120, 120);
    let expect = Some((Point::new(0, 0), Point::new(80, 80)));
    assert_eq!(liang_barsky(a, b, &window()), expect);
    assert_eq!(cohen_sutherland(a, b, &window()), expect);
}

#[test]
fn test_line_clip_produces_new_line() {
    let line = Line::new(
        Point::new(-50, 40),
        Point::new(150, 40),
        Color::new(10, 20, 30),
        LineAlgorithm::Bresenham,
    );
    let clipped = line
        .clip(Point::new(100, 80), Point::new(0, 0), ClipAlgorithm::default())
        .unwrap()
        .expect("segment crosses the window");

    assert_eq!(clipped.endpoints(), (Point::new(0, 40), Point::new(100, 40)));
    // Color and rasterization tag carry over to the clipped segment.
    assert_eq!(clipped.color(), Color::new(10, 20, 30));
    assert_eq!(clipped.algorithm(), LineAlgorithm::Bresenham);
}

#[test]
fn test_line_clip_outside_returns_none() {
    let line = Line::new(
        Point::new(-10, -10),
        Point::new(-40, -2),
        Color::BLACK,
        LineAlgorithm::Default,
    );
    for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
        let clipped = line
            .clip(Point::new(0, 0), Point::new(100, 80), algorithm)
            .unwrap();
        assert!(clipped.is_none());
    }
}

#[test]
fn test_degenerate_window_is_rejected() {
    let line = Line::new(
        Point::new(0, 0),
        Point::new(10, 10),
        Color::BLACK,
        LineAlgorithm::Default,
    );
    let err = line
        .clip(Point::new(5, 5), Point::new(5, 40), ClipAlgorithm::LiangBarsky)
        .unwrap_err();
    assert!(matches!(
        err,
        rasterkit_shapes::ShapeError::EmptyClipWindow { .. }
    ));
}
