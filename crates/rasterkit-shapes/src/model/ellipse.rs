//! Axis-aligned ellipses.
//!
//! Rotation is limited to multiples of 90 degrees (axis swaps); rasterizing
//! an ellipse at an arbitrary angle is out of scope for this engine and
//! attempts are reported to the caller through a warning, not silently
//! approximated.

use std::f64::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rasterkit_core::geometry::rotate_point;
use rasterkit_core::{Canvas, Color, Point, Rect};

use crate::error::{Result, ShapeError};
use crate::model::{Pivot, ShapeOps};
use crate::raster::draw_ellipse_midpoint;

/// Axis-aligned angles an ellipse rotation may snap to, with the index
/// parity telling whether the radii swap.
const AXIS_ANGLES: [f64; 4] = [-FRAC_PI_2, 0.0, FRAC_PI_2, PI];

/// Angular tolerance (radians) for snapping a rotation onto an axis.
const AXIS_SNAP_TOLERANCE: f64 = 0.1;

/// Ellipse rasterization variants. The empty tag maps to the library
/// vector draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EllipseAlgorithm {
    #[default]
    Default,
    Midpoint,
}

impl FromStr for EllipseAlgorithm {
    type Err = ShapeError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "" => Ok(EllipseAlgorithm::Default),
            "Midpoint" | "Bresenham" => Ok(EllipseAlgorithm::Midpoint),
            other => Err(ShapeError::UnknownAlgorithm {
                shape: "ellipse",
                tag: other.to_string(),
            }),
        }
    }
}

/// An axis-aligned ellipse: center plus non-negative radii.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point,
    rx: i32,
    ry: i32,
    color: Color,
    algorithm: EllipseAlgorithm,
    #[serde(skip)]
    snapshot: Option<(Point, i32, i32)>,
    pivot: Pivot,
}

impl Ellipse {
    pub fn new(
        center: Point,
        rx: i32,
        ry: i32,
        color: Color,
        algorithm: EllipseAlgorithm,
    ) -> Result<Self> {
        if rx < 0 || ry < 0 {
            return Err(ShapeError::NegativeRadius { rx, ry });
        }
        Ok(Self {
            center,
            rx,
            ry,
            color,
            algorithm,
            snapshot: None,
            pivot: Pivot::default(),
        })
    }

    /// Builds an ellipse inscribed in the box spanned by two opposite
    /// corners: center at the box midpoint, radii at the half-extents.
    pub fn from_box(
        corner1: Point,
        corner2: Point,
        color: Color,
        algorithm: EllipseAlgorithm,
    ) -> Self {
        let rect = Rect::from_corners(corner1, corner2);
        Self {
            center: rect.center(),
            rx: rect.width() / 2,
            ry: rect.height() / 2,
            color,
            algorithm,
            snapshot: None,
            pivot: Pivot::default(),
        }
    }

    pub fn geometry(&self) -> (Point, i32, i32) {
        (self.center, self.rx, self.ry)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn base(&self) -> (Point, i32, i32) {
        self.snapshot.unwrap_or((self.center, self.rx, self.ry))
    }
}

impl ShapeOps for Ellipse {
    fn draw(&self, canvas: &mut Canvas) {
        match self.algorithm {
            EllipseAlgorithm::Default => {
                canvas.stroke_ellipse(self.center, self.rx, self.ry, self.color)
            }
            EllipseAlgorithm::Midpoint => {
                draw_ellipse_midpoint(canvas, self.center, self.rx, self.ry, self.color)
            }
        }
    }

    fn translate(&mut self, delta: Point) {
        let (center, rx, ry) = self.base();
        self.center = center + delta;
        self.rx = rx;
        self.ry = ry;
    }

    fn scale(&mut self, center: Point, factor: f64) {
        let (c, rx, ry) = self.base();
        self.center = rasterkit_core::geometry::scale_point(c, center, factor);
        self.rx = (rx as f64 * factor) as i32;
        self.ry = (ry as f64 * factor) as i32;
    }

    fn rotate(&mut self, center: Point, radians: f64) {
        let Some(idx) = AXIS_ANGLES
            .iter()
            .position(|&theta| (theta - radians).abs() <= AXIS_SNAP_TOLERANCE)
        else {
            tracing::warn!(
                radians,
                "ellipse rotation only supports multiples of 90 degrees; ignored"
            );
            return;
        };

        let (c, rx, ry) = self.base();
        // The center always rotates by the actual (unsnapped) angle.
        self.center = rotate_point(c, center, radians);
        if idx % 2 == 0 {
            // Odd multiple of 90 degrees: the axes trade places.
            self.rx = ry;
            self.ry = rx;
        } else {
            self.rx = rx;
            self.ry = ry;
        }
    }

    fn rect_hull(&self) -> Rect {
        Rect::from_corners(
            Point::new(self.center.x - self.rx, self.center.y - self.ry),
            Point::new(self.center.x + self.rx, self.center.y + self.ry),
        )
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
        self.snapshot = Some((self.center, self.rx, self.ry));
    }

    fn commit_transaction(&mut self) {
        self.snapshot = None;
    }

    fn rollback_transaction(&mut self) {
        if let Some((center, rx, ry)) = self.snapshot.take() {
            self.center = center;
            self.rx = rx;
            self.ry = ry;
        }
    }
}
