//! # Rasterkit
//!
//! A 2D vector-shape geometry engine with classical scan-conversion
//! rasterizers and a line-oriented batch drawing front end.
//!
//! ## Architecture
//!
//! Rasterkit is organized as a workspace:
//!
//! 1. **rasterkit-core** - Value types, geometry utilities, the pixel canvas
//! 2. **rasterkit-shapes** - Shape model, rasterizers, clippers, curve evaluation
//! 3. **rasterkit** - The batch script runner binary
//!
//! ## Features
//!
//! - **Segments**: library vector draw, DDA, and Bresenham rasterization;
//!   Cohen-Sutherland and Liang-Barsky clipping
//! - **Polygons**: closed vertex loops drawn edge by edge
//! - **Ellipses**: two-region midpoint scan conversion with 4-way symmetry
//! - **Curves**: Bézier (de Casteljau) and B-spline (de Boor) evaluation
//! - **Editing**: translate/scale/rotate with single-level transactional undo
//! - **Batch protocol**: one command per line, BMP output

pub mod script;

pub use script::ScriptRunner;

pub use rasterkit_core::{Canvas, Color, Point, Rect};
pub use rasterkit_shapes::{
    ClipAlgorithm, Curve, CurveAlgorithm, Ellipse, EllipseAlgorithm, Line, LineAlgorithm, Polygon,
    Shape, ShapeKind, ShapeOps,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, honoring the `RUST_LOG`
/// environment variable and defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
