//! The drawable shape model.
//!
//! Four primitives implement the [`ShapeOps`] contract and dispatch through
//! the closed [`Shape`] enum. The set is closed; scripts can only name
//! these four kinds.

use serde::{Deserialize, Serialize};

use rasterkit_core::geometry::is_close;
use rasterkit_core::{Canvas, Point, Rect};

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{Curve, CurveAlgorithm};
pub use ellipse::{Ellipse, EllipseAlgorithm};
pub use line::{Line, LineAlgorithm};
pub use polygon::Polygon;

/// Pixel radius within which a pinned center snaps back to automatic. UI
/// hit-testing depends on this exact constant; do not retune it casually.
pub(crate) const CENTER_SNAP_RADIUS: i32 = 6;

/// The capability contract every primitive implements.
///
/// `draw` rasterizes into a caller-owned canvas; translate/scale/rotate
/// reposition the shape's defining points (from the transaction snapshot
/// while one is open); the hull/center queries feed hit-testing and UI
/// overlays.
pub trait ShapeOps {
    /// Rasterizes the shape with its selected algorithm.
    fn draw(&self, canvas: &mut Canvas);

    /// Moves every defining point by `delta`.
    fn translate(&mut self, delta: Point);

    /// Scales about `center` by `factor`.
    fn scale(&mut self, center: Point, factor: f64);

    /// Rotates about `center` by `radians` (anticlockwise, y-down frame).
    fn rotate(&mut self, center: Point, radians: f64);

    /// Normalized bounding rectangle of the defining points.
    fn rect_hull(&self) -> Rect;

    /// Effective center: the hull centroid, or the pinned point if one is
    /// set and the centroid has not drifted back onto it.
    fn center(&mut self) -> Point;

    /// Pins the center to an explicit point.
    fn set_center(&mut self, center: Point);

    /// Snapshots the geometry. Transactions do not nest.
    fn begin_transaction(&mut self);

    /// Keeps the current geometry and drops the snapshot.
    fn commit_transaction(&mut self);

    /// Restores the geometry captured at `begin_transaction`.
    fn rollback_transaction(&mut self);
}

/// Discriminant for the closed shape set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Polygon,
    Ellipse,
    Curve,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Curve => "Curve",
        }
    }
}

/// A drawable primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Polygon(Polygon),
    Ellipse(Ellipse),
    Curve(Curve),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Curve(_) => ShapeKind::Curve,
        }
    }
}

impl ShapeOps for Shape {
    fn draw(&self, canvas: &mut Canvas) {
        match self {
            Shape::Line(s) => s.draw(canvas),
            Shape::Polygon(s) => s.draw(canvas),
            Shape::Ellipse(s) => s.draw(canvas),
            Shape::Curve(s) => s.draw(canvas),
        }
    }

    fn translate(&mut self, delta: Point) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Polygon(s) => s.translate(delta),
            Shape::Ellipse(s) => s.translate(delta),
            Shape::Curve(s) => s.translate(delta),
        }
    }

    fn scale(&mut self, center: Point, factor: f64) {
        match self {
            Shape::Line(s) => s.scale(center, factor),
            Shape::Polygon(s) => s.scale(center, factor),
            Shape::Ellipse(s) => s.scale(center, factor),
            Shape::Curve(s) => s.scale(center, factor),
        }
    }

    fn rotate(&mut self, center: Point, radians: f64) {
        match self {
            Shape::Line(s) => s.rotate(center, radians),
            Shape::Polygon(s) => s.rotate(center, radians),
            Shape::Ellipse(s) => s.rotate(center, radians),
            Shape::Curve(s) => s.rotate(center, radians),
        }
    }

    fn rect_hull(&self) -> Rect {
        match self {
            Shape::Line(s) => s.rect_hull(),
            Shape::Polygon(s) => s.rect_hull(),
            Shape::Ellipse(s) => s.rect_hull(),
            Shape::Curve(s) => s.rect_hull(),
        }
    }

    fn center(&mut self) -> Point {
        match self {
            Shape::Line(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Curve(s) => s.center(),
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            Shape::Line(s) => s.set_center(center),
            Shape::Polygon(s) => s.set_center(center),
            Shape::Ellipse(s) => s.set_center(center),
            Shape::Curve(s) => s.set_center(center),
        }
    }

    fn begin_transaction(&mut self) {
        match self {
            Shape::Line(s) => s.begin_transaction(),
            Shape::Polygon(s) => s.begin_transaction(),
            Shape::Ellipse(s) => s.begin_transaction(),
            Shape::Curve(s) => s.begin_transaction(),
        }
    }

    fn commit_transaction(&mut self) {
        match self {
            Shape::Line(s) => s.commit_transaction(),
            Shape::Polygon(s) => s.commit_transaction(),
            Shape::Ellipse(s) => s.commit_transaction(),
            Shape::Curve(s) => s.commit_transaction(),
        }
    }

    fn rollback_transaction(&mut self) {
        match self {
            Shape::Line(s) => s.rollback_transaction(),
            Shape::Polygon(s) => s.rollback_transaction(),
            Shape::Ellipse(s) => s.rollback_transaction(),
            Shape::Curve(s) => s.rollback_transaction(),
        }
    }
}

/// Auto/pinned center state shared by every shape.
///
/// The center is automatic (hull centroid) until explicitly pinned. A pin is
/// dropped again the next time the centroid lands within
/// [`CENTER_SNAP_RADIUS`] of it, so an explicit pin does not outlive the
/// shape moving back onto its natural center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Pivot {
    pinned: Option<Point>,
}

impl Pivot {
    /// Resolves the effective center against the current hull, releasing
    /// the pin when the centroid has snapped back onto it.
    pub(crate) fn resolve(&mut self, hull: Rect) -> Point {
        let auto = hull.center();
        match self.pinned {
            Some(p) if is_close(auto, p, CENTER_SNAP_RADIUS) => {
                self.pinned = None;
                auto
            }
            Some(p) => p,
            None => auto,
        }
    }

    /// Pins the center, unless it already coincides with the centroid
    /// within the snap radius.
    pub(crate) fn pin(&mut self, center: Point, hull: Rect) {
        if is_close(hull.center(), center, CENTER_SNAP_RADIUS) {
            self.pinned = None;
        } else {
            self.pinned = Some(center);
        }
    }
}

/// Rewrites `current` through `f`, reading from `base` when a transaction
/// snapshot is open so repeated previews stay anchored to the drag origin.
pub(crate) fn remap_points(current: &mut [Point], base: Option<&[Point]>, f: impl Fn(Point) -> Point) {
    match base {
        Some(saved) => {
            debug_assert_eq!(saved.len(), current.len());
            for (dst, src) in current.iter_mut().zip(saved) {
                *dst = f(*src);
            }
        }
        None => {
            for p in current.iter_mut() {
                *p = f(*p);
            }
        }
    }
}

/// Bounding box of a non-empty point set.
pub(crate) fn hull_of(points: &[Point]) -> Rect {
    debug_assert!(!points.is_empty());
    let mut top_left = points[0];
    let mut bottom_right = points[0];
    for p in &points[1..] {
        top_left.x = top_left.x.min(p.x);
        top_left.y = top_left.y.min(p.y);
        bottom_right.x = bottom_right.x.max(p.x);
        bottom_right.y = bottom_right.y.max(p.y);
    }
    Rect::from_corners(top_left, bottom_right)
}
