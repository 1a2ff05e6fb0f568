//! Classical scan-conversion rasterizers.
//!
//! These are the pixel-exact algorithms the shape model dispatches to when a
//! shape carries an explicit algorithm tag. The canvas vector strokes cover
//! the untagged default path.
//!
//! All three functions plot through [`Canvas::set_pixel`], so out-of-canvas
//! pixels are silently dropped and degenerate inputs (zero-length segments,
//! zero radii) produce a single pixel or a straight run instead of crashing.

use rasterkit_core::{Canvas, Color, Point};

/// DDA segment rasterization.
///
/// Steps one pixel at a time along the major axis while the minor coordinate
/// accumulates the per-step slope as a floating-point sum, rounded to the
/// nearest pixel at every step.
pub fn draw_line_dda(canvas: &mut Canvas, p1: Point, p2: Point, color: Color) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        canvas.set_pixel(p1.x, p1.y, color);
        return;
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = p1.x as f64;
    let mut y = p1.y as f64;
    for _ in 0..=steps {
        canvas.set_pixel(x.round() as i32, y.round() as i32, color);
        x += x_inc;
        y += y_inc;
    }
}

/// Bresenham segment rasterization.
///
/// Integer-only midpoint algorithm. Steep segments swap into the gentle
/// octants, and endpoints are reordered so the walk always moves toward
/// increasing major coordinate; together with the minor-step sign this
/// covers all four slope regimes. The decision variable starts at
/// `2·dy − dx` and each major-axis step plots exactly one pixel.
pub fn draw_line_bresenham(canvas: &mut Canvas, p1: Point, p2: Point, color: Color) {
    let (mut x1, mut y1) = (p1.x, p1.y);
    let (mut x2, mut y2) = (p2.x, p2.y);

    let steep = (y2 - y1).abs() > (x2 - x1).abs();
    if steep {
        std::mem::swap(&mut x1, &mut y1);
        std::mem::swap(&mut x2, &mut y2);
    }
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }

    let dx = x2 - x1;
    let dy = (y2 - y1).abs();
    let y_step = if y1 < y2 { 1 } else { -1 };

    let mut d = 2 * dy - dx;
    let mut y = y1;
    for x in x1..=x2 {
        if steep {
            canvas.set_pixel(y, x, color);
        } else {
            canvas.set_pixel(x, y, color);
        }
        if d > 0 {
            y += y_step;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
}

/// Two-region midpoint ellipse rasterization with 4-way symmetry.
///
/// Region 1 covers the shallow arc (`ry²·x < rx²·y`), stepping x and
/// conditionally y; region 2 covers the steep arc down to `y = 0`, stepping
/// y and conditionally x. Decision variables are kept scaled by 4 so the
/// whole walk stays in integer arithmetic.
pub fn draw_ellipse_midpoint(canvas: &mut Canvas, center: Point, rx: i32, ry: i32, color: Color) {
    // Degenerate axes collapse to a point or an axis-aligned run.
    if rx == 0 && ry == 0 {
        canvas.set_pixel(center.x, center.y, color);
        return;
    }
    if rx == 0 {
        for y in center.y - ry..=center.y + ry {
            canvas.set_pixel(center.x, y, color);
        }
        return;
    }
    if ry == 0 {
        for x in center.x - rx..=center.x + rx {
            canvas.set_pixel(x, center.y, color);
        }
        return;
    }

    let rx2 = rx as i64 * rx as i64;
    let ry2 = ry as i64 * ry as i64;
    let mut x: i64 = 0;
    let mut y: i64 = ry as i64;

    let plot4 = |canvas: &mut Canvas, x: i64, y: i64| {
        let (x, y) = (x as i32, y as i32);
        canvas.set_pixel(center.x + x, center.y + y, color);
        canvas.set_pixel(center.x + x, center.y - y, color);
        canvas.set_pixel(center.x - x, center.y + y, color);
        canvas.set_pixel(center.x - x, center.y - y, color);
    };

    // Region 1: tangent slope magnitude below 1.
    let mut d = 4 * (ry2 - rx2 * ry as i64) + rx2;
    while ry2 * x < rx2 * y {
        plot4(canvas, x, y);
        x += 1;
        if d < 0 {
            d += 4 * (2 * ry2 * x + ry2);
        } else {
            y -= 1;
            d += 4 * (2 * ry2 * x - 2 * rx2 * y + ry2);
        }
    }

    // Region 2: reseed at the crossover and walk y down to the axis.
    let mut d = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
    while y >= 0 {
        plot4(canvas, x, y);
        y -= 1;
        if d > 0 {
            d += 4 * (rx2 - 2 * rx2 * y);
        } else {
            x += 1;
            d += 4 * (2 * ry2 * x - 2 * rx2 * y + rx2);
        }
    }
}
