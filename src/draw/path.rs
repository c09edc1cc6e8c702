//! The accumulating path that shape primitives build and paint.

use std::f64::consts::PI;

/// One geometric command recorded in a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Full 0..2π ellipse centred on (`cx`, `cy`) with no rotation.
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Close,
}

/// Mutable, append-only path in user-space coordinates.
///
/// Coordinates are stored untransformed; the transform active when the path
/// is painted is the one that applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.segments.push(PathSegment::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.segments.push(PathSegment::LineTo { x, y });
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        self.segments.push(PathSegment::Ellipse { cx, cy, rx, ry });
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if the last segment closes the current subpath.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// Vertices of the move/line segments, in insertion order.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.segments
            .iter()
            .filter_map(|segment| match *segment {
                PathSegment::MoveTo { x, y } | PathSegment::LineTo { x, y } => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    /// Replaces the context's path with this one.
    ///
    /// Ellipses are drawn as a scaled unit arc; a zero or non-finite radius
    /// would leave the cairo matrix singular, so such ellipses are skipped.
    pub fn replay(&self, ctx: &cairo::Context) {
        ctx.new_path();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo { x, y } => ctx.move_to(x, y),
                PathSegment::LineTo { x, y } => ctx.line_to(x, y),
                PathSegment::Ellipse { cx, cy, rx, ry } => {
                    if rx == 0.0 || ry == 0.0 || !rx.is_finite() || !ry.is_finite() {
                        log::trace!("Skipping degenerate ellipse rx={rx} ry={ry}");
                        continue;
                    }
                    let matrix = ctx.matrix();
                    ctx.translate(cx, cy);
                    ctx.scale(rx, ry);
                    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
                    ctx.set_matrix(matrix);
                }
                PathSegment::Close => ctx.close_path(),
            }
        }
    }
}
