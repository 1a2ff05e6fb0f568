//! Point-level geometry helpers used by every shape.
//!
//! Transforms work in the y-down raster frame and truncate back to the
//! integer grid, so repeated edits stay stable pixel-for-pixel with the
//! interactive painter they serve.

use crate::types::{Point, Rect};

/// Euclidean distance between two grid points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev closeness test: true when `a` lies within the axis-aligned
/// square of the given radius around `b`.
pub fn is_close(a: Point, b: Point, radius: i32) -> bool {
    let d = a - b;
    d.x.abs() <= radius && d.y.abs() <= radius
}

/// Scales `p` about `center` by factor `s`, truncating to the pixel grid.
pub fn scale_point(p: Point, center: Point, s: f64) -> Point {
    let x = s * (p.x - center.x) as f64 + center.x as f64;
    let y = s * (p.y - center.y) as f64 + center.y as f64;
    Point::new(x as i32, y as i32)
}

/// Rotates `p` about `center` by `radians` (anticlockwise in the y-down
/// raster frame), truncating to the pixel grid.
pub fn rotate_point(p: Point, center: Point, radians: f64) -> Point {
    let cos_theta = radians.cos();
    let sin_theta = radians.sin();
    let v = p - center;
    let x = center.x as f64 + cos_theta * v.x as f64 - sin_theta * v.y as f64;
    let y = center.y as f64 + sin_theta * v.x as f64 + cos_theta * v.y as f64;
    Point::new(x as i32, y as i32)
}

/// Inner (dot) product of two integer vectors.
pub fn inner_product(a: Point, b: Point) -> i64 {
    a.x as i64 * b.x as i64 + a.y as i64 * b.y as i64
}

/// Z component of the cross product of two integer vectors.
pub fn cross_product(a: Point, b: Point) -> i64 {
    a.x as i64 * b.y as i64 - a.y as i64 * b.x as i64
}

/// Axis-aligned square of the given radius around a point. Used for grab
/// handles and hit boxes.
pub fn rect_around_point(p: Point, radius: i32) -> Rect {
    Rect::from_corners(
        Point::new(p.x - radius, p.y - radius),
        Point::new(p.x + radius, p.y + radius),
    )
}
