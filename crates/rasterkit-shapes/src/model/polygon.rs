//! Polygons: a closed loop of vertices rasterized edge by edge.

use serde::{Deserialize, Serialize};

use rasterkit_core::geometry::{rotate_point, scale_point};
use rasterkit_core::{Canvas, Color, Point, Rect};

use crate::error::{Result, ShapeError};
use crate::model::{hull_of, remap_points, Pivot, ShapeOps};
use crate::raster::{draw_line_bresenham, draw_line_dda};
use crate::LineAlgorithm;

/// A closed polygon with at least three vertices. The closing edge from the
/// last vertex back to the first is implicit.
///
/// Edits reposition vertices; the vertex count is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
    color: Color,
    algorithm: LineAlgorithm,
    #[serde(skip)]
    snapshot: Option<Vec<Point>>,
    pivot: Pivot,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, color: Color, algorithm: LineAlgorithm) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                needed: 3,
                got: vertices.len(),
            });
        }
        Ok(Self {
            vertices,
            color,
            algorithm,
            snapshot: None,
            pivot: Pivot::default(),
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }

    fn draw_edge(&self, canvas: &mut Canvas, a: Point, b: Point) {
        match self.algorithm {
            LineAlgorithm::Default => canvas.stroke_line(a, b, self.color),
            LineAlgorithm::Dda => draw_line_dda(canvas, a, b, self.color),
            LineAlgorithm::Bresenham => draw_line_bresenham(canvas, a, b, self.color),
        }
    }
}

impl ShapeOps for Polygon {
    fn draw(&self, canvas: &mut Canvas) {
        for window in self.vertices.windows(2) {
            self.draw_edge(canvas, window[0], window[1]);
        }
        // Closing edge back to the first vertex.
        let last = self.vertices[self.vertices.len() - 1];
        self.draw_edge(canvas, last, self.vertices[0]);
    }

    fn translate(&mut self, delta: Point) {
        remap_points(&mut self.vertices, self.snapshot.as_deref(), |p| p + delta);
    }

    fn scale(&mut self, center: Point, factor: f64) {
        remap_points(&mut self.vertices, self.snapshot.as_deref(), |p| {
            scale_point(p, center, factor)
        });
    }

    fn rotate(&mut self, center: Point, radians: f64) {
        remap_points(&mut self.vertices, self.snapshot.as_deref(), |p| {
            rotate_point(p, center, radians)
        });
    }

    fn rect_hull(&self) -> Rect {
        hull_of(&self.vertices)
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
        self.snapshot = Some(self.vertices.clone());
    }

    fn commit_transaction(&mut self) {
        self.snapshot = None;
    }

    fn rollback_transaction(&mut self) {
        if let Some(saved) = self.snapshot.take() {
            self.vertices = saved;
        }
    }
}
