//! # Rasterkit Core
//!
//! Core value types and utilities shared by the whole workspace:
//!
//! - **Types**: integer [`Point`], normalized [`Rect`], opaque RGB [`Color`]
//! - **Geometry**: point rotation/scaling about a pivot, closeness tests,
//!   products, handle boxes
//! - **Canvas**: the mutable pixel buffer every shape rasterizes into, with
//!   a vector-draw fallback path and BMP export
//!
//! The engine works in whole pixels. All coordinates are `i32`; the few
//! computations that need fractional precision (rotation, scaling, curve
//! evaluation) are done in `f64` and brought back to the pixel grid at the
//! last step.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod types;

pub use canvas::Canvas;
pub use error::{CoreError, Result};
pub use types::{Color, Point, Rect};
