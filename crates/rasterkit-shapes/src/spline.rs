//! Parametric curve evaluation: de Casteljau for Bézier curves, de Boor
//! with clamped uniform knot vectors for B-splines.
//!
//! Evaluation runs entirely in `f64`; results are rounded onto the pixel
//! grid only at the very end.

use rasterkit_core::Point;

/// Maximum B-spline order (cubic). Curves with fewer control points are
/// degree-capped to `control_count - 1`.
const MAX_ORDER: usize = 4;

fn lerp(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1))
}

fn to_grid(p: (f64, f64)) -> Point {
    Point::new(p.0.round() as i32, p.1.round() as i32)
}

/// Evaluates the Bézier curve defined by `points` at parameter `u ∈ [0, 1]`
/// via de Casteljau's recursive linear interpolation.
///
/// With n+1 control points, level r replaces point i (for i < n+1-r) with
/// `(1-u)·P[i] + u·P[i+1]`; after n levels point 0 is the curve point.
pub fn de_casteljau(points: &[Point], u: f64) -> Point {
    debug_assert!(points.len() >= 2);
    let mut work: Vec<(f64, f64)> = points.iter().map(|p| p.to_f64()).collect();
    let n = work.len();
    for r in 1..n {
        for i in 0..n - r {
            work[i] = lerp(work[i], work[i + 1], u);
        }
    }
    to_grid(work[0])
}

/// Clamped uniform knot vector for a B-spline over `control_count` points.
///
/// Length is `control_count + order`: the first `order` knots are 0, knots
/// with index beyond `control_count` are 1, and interior knots climb by the
/// uniform step `1/(control_count - order + 1)`.
#[derive(Debug, Clone)]
pub struct KnotVector {
    knots: Vec<f64>,
    order: usize,
}

impl KnotVector {
    pub fn clamped_uniform(control_count: usize) -> Self {
        debug_assert!(control_count >= 3, "degree-0 splines are special-cased");
        let order = (control_count - 1).min(MAX_ORDER);
        let spans = (control_count - order + 1) as f64;
        let knots = (0..control_count + order)
            .map(|i| {
                if i < order {
                    0.0
                } else if i > control_count {
                    1.0
                } else {
                    (i - order + 1) as f64 / spans
                }
            })
            .collect();
        Self { knots, order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn knot(&self, i: usize) -> f64 {
        self.knots[i]
    }

    fn control_count(&self) -> usize {
        self.knots.len() - self.order
    }

    /// Index of the knot span containing `u`: `order - 1 + floor(u / step)`,
    /// clamped so the span stays valid at u = 1.
    pub fn span(&self, u: f64) -> usize {
        let spans = (self.control_count() - self.order + 1) as f64;
        let offset = (u * spans).floor() as usize;
        (self.order - 1 + offset).min(self.control_count() - 1)
    }
}

/// Evaluates the clamped uniform B-spline over `points` at `u ∈ [0, 1]` via
/// the de Boor recurrence.
///
/// Order is `min(control_count - 1, 4)`: cubic from 5 control points up,
/// degree-capped below. Exactly 2 control points bypass the spline
/// machinery entirely and evaluate the straight segment.
pub fn de_boor(points: &[Point], u: f64) -> Point {
    debug_assert!(points.len() >= 2);
    if points.len() == 2 {
        return to_grid(lerp(points[0].to_f64(), points[1].to_f64(), u));
    }

    let kv = KnotVector::clamped_uniform(points.len());
    let degree = kv.order() - 1;
    let k = kv.span(u);

    let mut work: Vec<(f64, f64)> = (0..=degree)
        .map(|j| points[j + k - degree].to_f64())
        .collect();
    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = j + k - degree;
            let denom = kv.knot(i + kv.order() - r) - kv.knot(i);
            let alpha = if denom.abs() < f64::EPSILON {
                0.0
            } else {
                (u - kv.knot(i)) / denom
            };
            work[j] = lerp(work[j - 1], work[j], alpha);
        }
    }
    to_grid(work[degree])
}
