//! Segment clipping against an axis-aligned window.
//!
//! Two independent algorithms with identical observable results:
//! Cohen-Sutherland (outcode iteration) and Liang-Barsky (parametric).
//! Liang-Barsky is the default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rasterkit_core::{Point, Rect};

use crate::error::{Result, ShapeError};

/// Outcode bits, tested in this fixed priority order when resolving an
/// outside endpoint.
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const TOP: u8 = 0b0100;
const BOTTOM: u8 = 0b1000;

/// Which clipper to run. The empty script tag maps to Liang-Barsky.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipAlgorithm {
    CohenSutherland,
    #[default]
    LiangBarsky,
}

impl FromStr for ClipAlgorithm {
    type Err = ShapeError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "Cohen-Sutherland" => Ok(ClipAlgorithm::CohenSutherland),
            "Liang-Barsky" | "" => Ok(ClipAlgorithm::LiangBarsky),
            other => Err(ShapeError::UnknownAlgorithm {
                shape: "clip",
                tag: other.to_string(),
            }),
        }
    }
}

/// Clips the segment `p1..p2` against the window normalized from two
/// opposite corners. Returns the clipped endpoints, `None` when the segment
/// lies entirely outside, or an error for a window with no area.
pub fn clip_segment(
    p1: Point,
    p2: Point,
    corner1: Point,
    corner2: Point,
    algorithm: ClipAlgorithm,
) -> Result<Option<(Point, Point)>> {
    let window = Rect::from_corners(corner1, corner2);
    if window.is_empty() {
        return Err(ShapeError::EmptyClipWindow { window });
    }
    Ok(match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p1, p2, &window),
        ClipAlgorithm::LiangBarsky => liang_barsky(p1, p2, &window),
    })
}

fn outcode(p: Point, window: &Rect) -> u8 {
    let mut code = 0;
    if p.x < window.left() {
        code |= LEFT;
    } else if p.x > window.right() {
        code |= RIGHT;
    }
    if p.y < window.top() {
        code |= TOP;
    } else if p.y > window.bottom() {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland outcode clipping.
///
/// Repeatedly picks an endpoint with a non-zero outcode, intersects the
/// segment with the first violated boundary in left/right/top/bottom order,
/// rounds the intersection onto the grid, and reclassifies until the
/// segment is trivially accepted or rejected.
pub fn cohen_sutherland(mut p1: Point, mut p2: Point, window: &Rect) -> Option<(Point, Point)> {
    loop {
        let code1 = outcode(p1, window);
        let code2 = outcode(p2, window);
        if code1 | code2 == 0 {
            return Some((p1, p2));
        }
        if code1 & code2 != 0 {
            return None;
        }

        let code = if code1 != 0 { code1 } else { code2 };
        let (x1, y1) = p1.to_f64();
        let (x2, y2) = p2.to_f64();
        let replacement = if code & LEFT != 0 {
            let x = window.left() as f64;
            Point::new(
                window.left(),
                (y1 + (y2 - y1) * (x - x1) / (x2 - x1)).round() as i32,
            )
        } else if code & RIGHT != 0 {
            let x = window.right() as f64;
            Point::new(
                window.right(),
                (y1 + (y2 - y1) * (x - x1) / (x2 - x1)).round() as i32,
            )
        } else if code & TOP != 0 {
            let y = window.top() as f64;
            Point::new(
                (x1 + (x2 - x1) * (y - y1) / (y2 - y1)).round() as i32,
                window.top(),
            )
        } else {
            let y = window.bottom() as f64;
            Point::new(
                (x1 + (x2 - x1) * (y - y1) / (y2 - y1)).round() as i32,
                window.bottom(),
            )
        };

        if code == code1 {
            p1 = replacement;
        } else {
            p2 = replacement;
        }
    }
}

/// Liang-Barsky parametric clipping.
///
/// Builds the four (p, q) boundary constraints, tightens the parameter
/// interval [u1, u2] with entering (p < 0) and leaving (p > 0) bounds, and
/// rejects when the interval inverts. A constraint with p = 0 and q < 0
/// means the segment runs parallel to and outside a boundary.
pub fn liang_barsky(a: Point, b: Point, window: &Rect) -> Option<(Point, Point)> {
    let (x1, y1) = a.to_f64();
    let (x2, y2) = b.to_f64();
    let dx = x2 - x1;
    let dy = y2 - y1;

    let p = [-dx, dx, -dy, dy];
    let q = [
        x1 - window.left() as f64,
        window.right() as f64 - x1,
        y1 - window.top() as f64,
        window.bottom() as f64 - y1,
    ];

    let mut u1: f64 = 0.0;
    let mut u2: f64 = 1.0;
    for k in 0..4 {
        if p[k] == 0.0 {
            if q[k] < 0.0 {
                return None;
            }
        } else {
            let u = q[k] / p[k];
            if p[k] < 0.0 {
                u1 = u1.max(u);
            } else {
                u2 = u2.min(u);
            }
        }
    }
    if u1 > u2 {
        return None;
    }

    let at = |u: f64| {
        Point::new(
            (x1 + u * dx).round() as i32,
            (y1 + u * dy).round() as i32,
        )
    };
    Some((at(u1), at(u2)))
}
