//! # Rasterkit Shapes
//!
//! The drawable-shape engine: four primitives behind one closed contract.
//!
//! ## Core Components
//!
//! - **Model**: [`Line`], [`Polygon`], [`Ellipse`], [`Curve`] behind the
//!   [`ShapeOps`] trait and the closed [`Shape`] enum
//! - **Rasterizers**: DDA and Bresenham segment scan conversion, two-region
//!   midpoint ellipse scan conversion
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky segment clippers
//! - **Curves**: de Casteljau (Bézier) and de Boor (B-spline) evaluation
//!
//! ## Editing model
//!
//! Every shape supports translate/scale/rotate edits and a single-level
//! transaction: `begin_transaction` snapshots the geometry, edits issued
//! while the transaction is open are computed from the snapshot (so an
//! interactive drag preview is idempotent against its starting point), and
//! `rollback_transaction` restores the snapshot bit-identically.

pub mod clip;
pub mod error;
pub mod model;
pub mod raster;
pub mod spline;

pub use clip::ClipAlgorithm;
pub use error::{Result, ShapeError};
pub use model::{
    Curve, CurveAlgorithm, Ellipse, EllipseAlgorithm, Line, LineAlgorithm, Polygon, Shape,
    ShapeKind, ShapeOps,
};
