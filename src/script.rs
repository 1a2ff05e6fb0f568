//! The batch drawing-script interpreter.
//!
//! One command per line, space-separated tokens, first token = command name.
//! `drawPolygon` and `drawCurve` consume a second line carrying their
//! coordinate list. Malformed input is fatal and aborts the whole run;
//! references to unknown shape ids (and `clip` on a non-line) are reported
//! and skipped so the rest of the script still executes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use tracing::{debug, warn};

use rasterkit_core::{Canvas, Color, Point};
use rasterkit_shapes::{
    ClipAlgorithm, Curve, CurveAlgorithm, Ellipse, EllipseAlgorithm, Line, LineAlgorithm, Polygon,
    Shape, ShapeOps,
};

/// Executes drawing scripts against an id-keyed shape store.
///
/// Defaults match the interactive painter: a 400x300 white canvas and a
/// black pen. `saveCanvas` writes `<name>.bmp` into the output directory,
/// vertically mirrored.
pub struct ScriptRunner {
    canvas: Canvas,
    pen: Color,
    shapes: HashMap<i32, Shape>,
    out_dir: PathBuf,
}

impl ScriptRunner {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            canvas: Canvas::with_default_size(),
            pen: Color::BLACK,
            shapes: HashMap::new(),
            out_dir: out_dir.into(),
        }
    }

    /// Reads and executes a script file.
    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("cannot open script file {}", path.display()))?;
        self.run(&script)
    }

    /// Executes a script. The first malformed command aborts the run.
    pub fn run(&mut self, script: &str) -> Result<()> {
        let mut lines = script.lines().enumerate();
        while let Some((idx, raw)) = lines.next() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let cmd = tokens.next().unwrap_or_default();
            let args: Vec<&str> = tokens.collect();
            debug!(line_no, command = cmd, "executing");

            match cmd {
                "resetCanvas" => {
                    ensure_arity(cmd, &args, 2, line_no)?;
                    let width = parse(args[0], "width", line_no)?;
                    let height = parse(args[1], "height", line_no)?;
                    self.canvas
                        .reset(width, height)
                        .with_context(|| format!("line {line_no}: resetCanvas"))?;
                }
                "saveCanvas" => {
                    ensure_arity(cmd, &args, 1, line_no)?;
                    let path = self.out_dir.join(format!("{}.bmp", args[0]));
                    self.canvas
                        .save_bmp(&path)
                        .with_context(|| format!("line {line_no}: saveCanvas {}", args[0]))?;
                    debug!(path = %path.display(), "canvas saved");
                }
                "setColor" => {
                    ensure_arity(cmd, &args, 3, line_no)?;
                    let r = parse(args[0], "red channel", line_no)?;
                    let g = parse(args[1], "green channel", line_no)?;
                    let b = parse(args[2], "blue channel", line_no)?;
                    self.pen = Color::new(r, g, b);
                }
                "drawLine" => {
                    ensure_arity(cmd, &args, 6, line_no)?;
                    let id = parse(args[0], "shape id", line_no)?;
                    let p1 = Point::new(
                        parse(args[1], "x1", line_no)?,
                        parse(args[2], "y1", line_no)?,
                    );
                    let p2 = Point::new(
                        parse(args[3], "x2", line_no)?,
                        parse(args[4], "y2", line_no)?,
                    );
                    let algorithm: LineAlgorithm = parse_tag(args[5], line_no)?;
                    let line = Line::new(p1, p2, self.pen, algorithm);
                    line.draw(&mut self.canvas);
                    self.shapes.insert(id, Shape::Line(line));
                }
                "drawPolygon" => {
                    ensure_arity(cmd, &args, 3, line_no)?;
                    let id = parse(args[0], "shape id", line_no)?;
                    let n: usize = parse(args[1], "vertex count", line_no)?;
                    let algorithm: LineAlgorithm = parse_tag(args[2], line_no)?;
                    let points = read_points(lines.next(), n, cmd, line_no)?;
                    let polygon = Polygon::new(points, self.pen, algorithm)
                        .with_context(|| format!("line {line_no}: drawPolygon"))?;
                    polygon.draw(&mut self.canvas);
                    self.shapes.insert(id, Shape::Polygon(polygon));
                }
                "drawEllipse" => {
                    ensure_arity(cmd, &args, 5, line_no)?;
                    let id = parse(args[0], "shape id", line_no)?;
                    let center = Point::new(
                        parse(args[1], "x", line_no)?,
                        parse(args[2], "y", line_no)?,
                    );
                    let rx = parse(args[3], "rx", line_no)?;
                    let ry = parse(args[4], "ry", line_no)?;
                    let ellipse =
                        Ellipse::new(center, rx, ry, self.pen, EllipseAlgorithm::default())
                            .with_context(|| format!("line {line_no}: drawEllipse"))?;
                    ellipse.draw(&mut self.canvas);
                    self.shapes.insert(id, Shape::Ellipse(ellipse));
                }
                "drawCurve" => {
                    ensure_arity(cmd, &args, 3, line_no)?;
                    let id = parse(args[0], "shape id", line_no)?;
                    let n: usize = parse(args[1], "control point count", line_no)?;
                    let algorithm: CurveAlgorithm = parse_tag(args[2], line_no)?;
                    let points = read_points(lines.next(), n, cmd, line_no)?;
                    let curve = Curve::new(points, self.pen, algorithm)
                        .with_context(|| format!("line {line_no}: drawCurve"))?;
                    curve.draw(&mut self.canvas);
                    self.shapes.insert(id, Shape::Curve(curve));
                }
                "translate" => {
                    ensure_arity(cmd, &args, 3, line_no)?;
                    let id: i32 = parse(args[0], "shape id", line_no)?;
                    let delta = Point::new(
                        parse(args[1], "dx", line_no)?,
                        parse(args[2], "dy", line_no)?,
                    );
                    match self.shapes.get_mut(&id) {
                        Some(shape) => shape.translate(delta),
                        None => warn!(id, command = cmd, "unknown shape id; ignored"),
                    }
                }
                "rotate" => {
                    ensure_arity(cmd, &args, 4, line_no)?;
                    let id: i32 = parse(args[0], "shape id", line_no)?;
                    let center = Point::new(
                        parse(args[1], "x", line_no)?,
                        parse(args[2], "y", line_no)?,
                    );
                    let degrees: f64 = parse(args[3], "degrees", line_no)?;
                    // The protocol speaks clockwise degrees; the engine
                    // rotates anticlockwise radians.
                    let radians = -degrees.to_radians();
                    match self.shapes.get_mut(&id) {
                        Some(shape) => shape.rotate(center, radians),
                        None => warn!(id, command = cmd, "unknown shape id; ignored"),
                    }
                }
                "scale" => {
                    ensure_arity(cmd, &args, 4, line_no)?;
                    let id: i32 = parse(args[0], "shape id", line_no)?;
                    let center = Point::new(
                        parse(args[1], "x", line_no)?,
                        parse(args[2], "y", line_no)?,
                    );
                    let factor: f64 = parse(args[3], "factor", line_no)?;
                    match self.shapes.get_mut(&id) {
                        Some(shape) => shape.scale(center, factor),
                        None => warn!(id, command = cmd, "unknown shape id; ignored"),
                    }
                }
                "clip" => {
                    ensure_arity(cmd, &args, 6, line_no)?;
                    let id: i32 = parse(args[0], "shape id", line_no)?;
                    let c1 = Point::new(
                        parse(args[1], "x1", line_no)?,
                        parse(args[2], "y1", line_no)?,
                    );
                    let c2 = Point::new(
                        parse(args[3], "x2", line_no)?,
                        parse(args[4], "y2", line_no)?,
                    );
                    let algorithm: ClipAlgorithm = parse_tag(args[5], line_no)?;
                    match self.shapes.get(&id) {
                        None => warn!(id, command = cmd, "unknown shape id; ignored"),
                        Some(Shape::Line(line)) => {
                            let clipped = line
                                .clip(c1, c2, algorithm)
                                .with_context(|| format!("line {line_no}: clip"))?;
                            match clipped {
                                Some(line) => {
                                    self.shapes.insert(id, Shape::Line(line));
                                }
                                None => {
                                    debug!(id, "segment fully outside clip window; removed");
                                    self.shapes.remove(&id);
                                }
                            }
                        }
                        Some(other) => warn!(
                            id,
                            kind = other.kind().name(),
                            "clip only applies to lines; ignored"
                        ),
                    }
                }
                other => bail!("line {line_no}: undefined command: {other}"),
            }
        }
        Ok(())
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn pen_color(&self) -> Color {
        self.pen
    }

    pub fn shape(&self, id: i32) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

fn ensure_arity(cmd: &str, args: &[&str], expected: usize, line_no: usize) -> Result<()> {
    ensure!(
        args.len() == expected,
        "line {line_no}: {cmd} expects {expected} arguments, got {}",
        args.len()
    );
    Ok(())
}

fn parse<T>(token: &str, what: &str, line_no: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    token
        .parse()
        .with_context(|| format!("line {line_no}: invalid {what}: {token:?}"))
}

fn parse_tag<T>(token: &str, line_no: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    token
        .parse()
        .with_context(|| format!("line {line_no}: unknown algorithm tag {token:?}"))
}

/// Parses the coordinate continuation line of `drawPolygon`/`drawCurve`.
fn read_points(
    next_line: Option<(usize, &str)>,
    n: usize,
    cmd: &str,
    line_no: usize,
) -> Result<Vec<Point>> {
    let Some((_, raw)) = next_line else {
        bail!("line {line_no}: {cmd} is missing its coordinate line");
    };
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    ensure!(
        tokens.len() == 2 * n,
        "line {}: {cmd} expects {} coordinates, got {}",
        line_no + 1,
        2 * n,
        tokens.len()
    );
    let mut points = Vec::with_capacity(n);
    for pair in tokens.chunks(2) {
        points.push(Point::new(
            parse(pair[0], "x coordinate", line_no + 1)?,
            parse(pair[1], "y coordinate", line_no + 1)?,
        ));
    }
    Ok(points)
}
