//! The mutable pixel buffer shapes rasterize into.
//!
//! The canvas is deliberately dumb: it owns a [`tiny_skia::Pixmap`], exposes
//! bounds-checked single-pixel writes for the scan-conversion algorithms,
//! and a pair of non-antialiased vector strokes used as the "library draw"
//! default when a shape carries no algorithm tag. Export goes through the
//! `image` crate as BMP.

use std::path::Path as FsPath;

use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{CoreError, Result};
use crate::types::{Color, Point};

/// Default canvas width for the batch front end, in pixels.
pub const DEFAULT_WIDTH: i32 = 400;
/// Default canvas height for the batch front end, in pixels.
pub const DEFAULT_HEIGHT: i32 = 300;

/// A white-initialized RGB pixel buffer.
///
/// Owned by the caller and passed by mutable reference into every draw call;
/// the engine never holds onto it (see the concurrency notes in the crate
/// docs: access is exclusive and single-threaded).
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a white canvas of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let pixmap = if width > 0 && height > 0 {
            Pixmap::new(width as u32, height as u32)
        } else {
            None
        };
        let mut pixmap = pixmap.ok_or(CoreError::InvalidCanvasSize { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self { pixmap })
    }

    /// Creates the 400x300 default canvas.
    pub fn with_default_size() -> Self {
        // The defaults are positive, so this cannot fail.
        match Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) {
            Ok(canvas) => canvas,
            Err(_) => unreachable!("default canvas size is valid"),
        }
    }

    /// Discards all content and reallocates at the new size, filled white.
    pub fn reset(&mut self, width: i32, height: i32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.pixmap.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.pixmap.height() as i32
    }

    /// Writes one pixel. Writes outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }
        let idx = (y * self.width() + x) as usize;
        self.pixmap.pixels_mut()[idx] =
            tiny_skia::ColorU8::from_rgba(color.r, color.g, color.b, 255).premultiply();
    }

    /// Reads one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        // Both axes need checking here: the pixmap's own lookup only
        // bounds-checks the flat index, so an overflowing x would alias
        // into the next row.
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x as u32, y as u32)?.demultiply();
        Some(Color::new(c.red(), c.green(), c.blue()))
    }

    /// Default vector line draw: a 1-px non-antialiased stroke.
    pub fn stroke_line(&mut self, p1: Point, p2: Point, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(p1.x as f32, p1.y as f32);
        pb.line_to(p2.x as f32, p2.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke(&path, color);
        }
    }

    /// Default vector ellipse draw: a 1-px non-antialiased oval stroke.
    ///
    /// Degenerate radii collapse to a straight stroke or a single pixel.
    pub fn stroke_ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Color) {
        if rx <= 0 || ry <= 0 {
            self.stroke_line(
                Point::new(center.x - rx.max(0), center.y - ry.max(0)),
                Point::new(center.x + rx.max(0), center.y + ry.max(0)),
                color,
            );
            return;
        }
        let oval = tiny_skia::Rect::from_ltrb(
            (center.x - rx) as f32,
            (center.y - ry) as f32,
            (center.x + rx) as f32,
            (center.y + ry) as f32,
        );
        if let Some(path) = oval.and_then(PathBuilder::from_oval) {
            self.stroke(&path, color);
        }
    }

    fn stroke(&mut self, path: &tiny_skia::Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Saves the canvas as a BMP file, mirrored vertically.
    ///
    /// BMP stores rows bottom-up; the batch protocol expects the mirrored
    /// orientation, so rows are emitted in reverse.
    pub fn save_bmp(&self, path: &FsPath) -> Result<()> {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let mut img = image::RgbImage::new(w, h);
        for y in 0..h {
            let src_row = h - 1 - y;
            for x in 0..w {
                let c = self
                    .pixel(x as i32, src_row as i32)
                    .unwrap_or(Color::WHITE);
                img.put_pixel(x, y, image::Rgb([c.r, c.g, c.b]));
            }
        }
        img.save_with_format(path, image::ImageFormat::Bmp)?;
        tracing::debug!(path = %path.display(), width = w, height = h, "canvas exported");
        Ok(())
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
