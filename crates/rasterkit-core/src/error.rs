//! Error types for the core crate.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised by the canvas and core utilities.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canvas dimensions must be positive
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: i32,
        /// Requested height in pixels.
        height: i32,
    },

    /// Image encoding failed
    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] image::ImageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
