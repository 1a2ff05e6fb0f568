use rasterkit_core::{Canvas, Color, Point};
use rasterkit_shapes::{Line, LineAlgorithm, Polygon, ShapeOps};

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

fn rasterize(p1: Point, p2: Point, algorithm: LineAlgorithm) -> Vec<(i32, i32)> {
    let mut canvas = Canvas::new(20, 20).unwrap();
    Line::new(p1, p2, Color::BLACK, algorithm).draw(&mut canvas);
    painted(&canvas)
}

#[test]
fn test_horizontal_line_pixels() {
    let expect: Vec<(i32, i32)> = (2..=9).map(|x| (x, 5)).collect();
    assert_eq!(
        rasterize(Point::new(2, 5), Point::new(9, 5), LineAlgorithm::Dda),
        expect
    );
    assert_eq!(
        rasterize(Point::new(2, 5), Point::new(9, 5), LineAlgorithm::Bresenham),
        expect
    );
}

#[test]
fn test_vertical_line_pixels() {
    let expect: Vec<(i32, i32)> = (1..=8).map(|y| (4, y)).collect();
    assert_eq!(
        rasterize(Point::new(4, 1), Point::new(4, 8), LineAlgorithm::Dda),
        expect
    );
    assert_eq!(
        rasterize(Point::new(4, 8), Point::new(4, 1), LineAlgorithm::Bresenham),
        expect
    );
}

#[test]
fn test_diagonal_line_pixels() {
    let expect: Vec<(i32, i32)> = (0..=4).map(|i| (i, i)).collect();
    assert_eq!(
        rasterize(Point::new(0, 0), Point::new(4, 4), LineAlgorithm::Dda),
        expect
    );
    assert_eq!(
        rasterize(Point::new(0, 0), Point::new(4, 4), LineAlgorithm::Bresenham),
        expect
    );
}

#[test]
fn test_endpoint_order_does_not_matter() {
    let forward = rasterize(Point::new(1, 2), Point::new(11, 7), LineAlgorithm::Bresenham);
    let backward = rasterize(Point::new(11, 7), Point::new(1, 2), LineAlgorithm::Bresenham);
    assert_eq!(forward, backward);
    // One pixel per major-axis column.
    assert_eq!(forward.len(), 11);
}

#[test]
fn test_polygon_draws_closing_edge() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    let polygon = Polygon::new(
        vec![Point::new(0, 0), Point::new(8, 0), Point::new(8, 8)],
        Color::BLACK,
        LineAlgorithm::Bresenham,
    )
    .unwrap();
    polygon.draw(&mut canvas);

    // The closing edge from (8, 8) back to (0, 0) is the diagonal.
    for i in 0..=8 {
        assert_eq!(canvas.pixel(i, i), Some(Color::BLACK), "diagonal pixel {i}");
        assert_eq!(canvas.pixel(i, 0), Some(Color::BLACK), "top edge pixel {i}");
        assert_eq!(canvas.pixel(8, i), Some(Color::BLACK), "right edge pixel {i}");
    }
}

#[test]
fn test_polygon_needs_three_vertices() {
    let err = Polygon::new(
        vec![Point::new(0, 0), Point::new(5, 5)],
        Color::BLACK,
        LineAlgorithm::Default,
    )
    .unwrap_err();
    assert_eq!(
        err,
        rasterkit_shapes::ShapeError::TooFewVertices { needed: 3, got: 2 }
    );
}
