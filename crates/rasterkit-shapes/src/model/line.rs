//! Line segments: rasterization variants and the only shape that clips.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rasterkit_core::geometry::{rotate_point, scale_point};
use rasterkit_core::{Canvas, Color, Point, Rect};

use crate::clip::{clip_segment, ClipAlgorithm};
use crate::error::{Result, ShapeError};
use crate::model::{Pivot, ShapeOps};
use crate::raster::{draw_line_bresenham, draw_line_dda};

/// Segment rasterization variants. The empty script tag maps to the
/// library vector draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineAlgorithm {
    #[default]
    Default,
    Dda,
    Bresenham,
}

impl FromStr for LineAlgorithm {
    type Err = ShapeError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "" => Ok(LineAlgorithm::Default),
            "DDA" => Ok(LineAlgorithm::Dda),
            "Bresenham" => Ok(LineAlgorithm::Bresenham),
            other => Err(ShapeError::UnknownAlgorithm {
                shape: "line",
                tag: other.to_string(),
            }),
        }
    }
}

/// A segment with exactly two endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    p1: Point,
    p2: Point,
    color: Color,
    algorithm: LineAlgorithm,
    #[serde(skip)]
    snapshot: Option<(Point, Point)>,
    pivot: Pivot,
}

impl Line {
    pub fn new(p1: Point, p2: Point, color: Color, algorithm: LineAlgorithm) -> Self {
        Self {
            p1,
            p2,
            color,
            algorithm,
            snapshot: None,
            pivot: Pivot::default(),
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }

    /// Clips against the window normalized from two opposite corners.
    ///
    /// Returns a new line carrying this line's color and algorithm tag, or
    /// `None` when the segment lies entirely outside the window.
    pub fn clip(
        &self,
        corner1: Point,
        corner2: Point,
        algorithm: ClipAlgorithm,
    ) -> Result<Option<Line>> {
        let clipped = clip_segment(self.p1, self.p2, corner1, corner2, algorithm)?;
        Ok(clipped.map(|(a, b)| Line::new(a, b, self.color, self.algorithm)))
    }

    /// Endpoints the next edit starts from: the snapshot while a
    /// transaction is open, the live geometry otherwise.
    fn base(&self) -> (Point, Point) {
        self.snapshot.unwrap_or((self.p1, self.p2))
    }
}

impl ShapeOps for Line {
    fn draw(&self, canvas: &mut Canvas) {
        match self.algorithm {
            LineAlgorithm::Default => canvas.stroke_line(self.p1, self.p2, self.color),
            LineAlgorithm::Dda => draw_line_dda(canvas, self.p1, self.p2, self.color),
            LineAlgorithm::Bresenham => draw_line_bresenham(canvas, self.p1, self.p2, self.color),
        }
    }

    fn translate(&mut self, delta: Point) {
        let (p1, p2) = self.base();
        self.p1 = p1 + delta;
        self.p2 = p2 + delta;
    }

    fn scale(&mut self, center: Point, factor: f64) {
        let (p1, p2) = self.base();
        self.p1 = scale_point(p1, center, factor);
        self.p2 = scale_point(p2, center, factor);
    }

    fn rotate(&mut self, center: Point, radians: f64) {
        let (p1, p2) = self.base();
        self.p1 = rotate_point(p1, center, radians);
        self.p2 = rotate_point(p2, center, radians);
    }

    fn rect_hull(&self) -> Rect {
        Rect::from_corners(self.p1, self.p2)
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
        self.snapshot = Some((self.p1, self.p2));
    }

    fn commit_transaction(&mut self) {
        self.snapshot = None;
    }

    fn rollback_transaction(&mut self) {
        if let Some((p1, p2)) = self.snapshot.take() {
            self.p1 = p1;
            self.p2 = p2;
        }
    }
}
