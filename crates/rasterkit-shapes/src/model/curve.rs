//! Parametric curves over a fixed set of control points.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rasterkit_core::geometry::{distance, rotate_point, scale_point};
use rasterkit_core::{Canvas, Color, Point, Rect};

use crate::error::{Result, ShapeError};
use crate::model::{hull_of, remap_points, Pivot, ShapeOps};
use crate::raster::draw_line_dda;
use crate::spline::{de_boor, de_casteljau};

/// Parameter step for curve sampling. Consecutive samples are joined with
/// rasterized segments so coarse grids never leave gaps.
const PARAM_STEPS: u32 = 1000;

/// Curve evaluation modes. The empty tag maps to Bézier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveAlgorithm {
    #[default]
    Bezier,
    Bspline,
}

impl FromStr for CurveAlgorithm {
    type Err = ShapeError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "Bezier" | "" => Ok(CurveAlgorithm::Bezier),
            "B-spline" => Ok(CurveAlgorithm::Bspline),
            other => Err(ShapeError::UnknownAlgorithm {
                shape: "curve",
                tag: other.to_string(),
            }),
        }
    }
}

/// A parametric curve with at least two control points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    control_points: Vec<Point>,
    color: Color,
    algorithm: CurveAlgorithm,
    #[serde(skip)]
    snapshot: Option<Vec<Point>>,
    pivot: Pivot,
}

impl Curve {
    pub fn new(control_points: Vec<Point>, color: Color, algorithm: CurveAlgorithm) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(ShapeError::TooFewControlPoints {
                got: control_points.len(),
            });
        }
        Ok(Self {
            control_points,
            color,
            algorithm,
            snapshot: None,
            pivot: Pivot::default(),
        })
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn algorithm(&self) -> CurveAlgorithm {
        self.algorithm
    }

    /// Length of the control polyline. A cheap stand-in for arc length,
    /// good enough for hit radii and UI feedback.
    pub fn length(&self) -> f64 {
        self.control_points
            .windows(2)
            .map(|w| distance(w[0], w[1]))
            .sum()
    }

    fn eval(&self, u: f64) -> Point {
        match self.algorithm {
            CurveAlgorithm::Bezier => de_casteljau(&self.control_points, u),
            CurveAlgorithm::Bspline => de_boor(&self.control_points, u),
        }
    }
}

impl ShapeOps for Curve {
    fn draw(&self, canvas: &mut Canvas) {
        let mut prev = self.eval(0.0);
        // Zero-length draw paints the start pixel even if every sample
        // collapses onto it.
        draw_line_dda(canvas, prev, prev, self.color);
        for i in 1..=PARAM_STEPS {
            let u = i as f64 / PARAM_STEPS as f64;
            let next = self.eval(u);
            if next != prev {
                draw_line_dda(canvas, prev, next, self.color);
                prev = next;
            }
        }
    }

    fn translate(&mut self, delta: Point) {
        remap_points(&mut self.control_points, self.snapshot.as_deref(), |p| {
            p + delta
        });
    }

    fn scale(&mut self, center: Point, factor: f64) {
        remap_points(&mut self.control_points, self.snapshot.as_deref(), |p| {
            scale_point(p, center, factor)
        });
    }

    fn rotate(&mut self, center: Point, radians: f64) {
        remap_points(&mut self.control_points, self.snapshot.as_deref(), |p| {
            rotate_point(p, center, radians)
        });
    }

    fn rect_hull(&self) -> Rect {
        hull_of(&self.control_points)
    }

    fn center(&mut self) -> Point {
        let hull = self.rect_hull();
        self.pivot.resolve(hull)
    }

    fn set_center(&mut self, center: Point) {
        let hull = self.rect_hull();
        self.pivot.pin(center, hull);
    }

    fn begin_transaction(&mut self) {
        debug_assert!(self.snapshot.is_none(), "transactions do not nest");
        self.snapshot = Some(self.control_points.clone());
    }

    fn commit_transaction(&mut self) {
        self.snapshot = None;
    }

    fn rollback_transaction(&mut self) {
        if let Some(saved) = self.snapshot.take() {
            self.control_points = saved;
        }
    }
}
