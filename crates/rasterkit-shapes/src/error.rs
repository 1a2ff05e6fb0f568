//! Error types for shape construction and clipping.
//!
//! Invariant violations (too few points, inverted clip windows) are caller
//! bugs or malformed input; constructors reject them outright instead of
//! rasterizing undefined geometry.

use rasterkit_core::Rect;
use thiserror::Error;

/// Errors raised when building or clipping shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices
    #[error("Too few vertices: {needed} required, got {got}")]
    TooFewVertices {
        /// Minimum vertex count for the shape.
        needed: usize,
        /// Vertex count actually supplied.
        got: usize,
    },

    /// A curve needs at least two control points
    #[error("Too few control points: 2 required, got {got}")]
    TooFewControlPoints {
        /// Control point count actually supplied.
        got: usize,
    },

    /// Ellipse radii must be non-negative
    #[error("Negative ellipse radius: rx={rx}, ry={ry}")]
    NegativeRadius {
        /// Supplied horizontal radius.
        rx: i32,
        /// Supplied vertical radius.
        ry: i32,
    },

    /// The clip window collapsed to a line or point
    #[error("Clip window has no area: {window:?}")]
    EmptyClipWindow {
        /// The normalized degenerate window.
        window: Rect,
    },

    /// An algorithm tag was not recognized for the shape kind
    #[error("Unknown {shape} algorithm: {tag:?}")]
    UnknownAlgorithm {
        /// Shape kind the tag was parsed for.
        shape: &'static str,
        /// The offending tag.
        tag: String,
    },
}

/// Result type using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;
