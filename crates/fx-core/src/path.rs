use glam::Vec2;
use serde::Serialize;
use std::fmt::Write;

/// One drawing command of a 2D outline.
///
/// Outlines are built as typed segments and only turned into a path
/// description string at the rendering boundary (see
/// [`PathOutline::to_svg_path`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Close,
}

impl PathSegment {
    /// The point this segment ends on, if it has one.
    pub fn end_point(&self) -> Option<Vec2> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    /// Apply `f` to every point (including control points) of the segment.
    pub fn map_points(&self, mut f: impl FnMut(Vec2) -> Vec2) -> PathSegment {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
            PathSegment::CubicTo { c1, c2, to } => PathSegment::CubicTo {
                c1: f(c1),
                c2: f(c2),
                to: f(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Evaluate a cubic Bezier at `t` in [0, 1].
pub fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;

    p0 * mt3 + c1 * (3.0 * mt2 * t) + c2 * (3.0 * mt * t2) + p3 * t3
}

/// An ordered list of path segments describing one outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathOutline {
    pub segments: Vec<PathSegment>,
}

impl PathOutline {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// End points of every segment in drawing order (control points excluded).
    pub fn vertices(&self) -> Vec<Vec2> {
        self.segments.iter().filter_map(|s| s.end_point()).collect()
    }

    pub fn has_curves(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, PathSegment::CubicTo { .. }))
    }

    /// Sample segment `index` at drawing progress `t` in [0, 1].
    ///
    /// Lines interpolate linearly, cubics are evaluated as Bezier curves. A
    /// `Close` segment runs from the current point back to the subpath start.
    pub fn point_at(&self, index: usize, t: f32) -> Option<Vec2> {
        let segment = self.segments.get(index)?;
        let mut start = Vec2::ZERO;
        let mut subpath_start = Vec2::ZERO;
        for s in &self.segments[..index] {
            match *s {
                PathSegment::MoveTo(p) => {
                    start = p;
                    subpath_start = p;
                }
                PathSegment::Close => start = subpath_start,
                _ => start = s.end_point().unwrap_or(start),
            }
        }

        let t = t.clamp(0.0, 1.0);
        Some(match *segment {
            PathSegment::MoveTo(p) => p,
            PathSegment::LineTo(p) => start.lerp(p, t),
            PathSegment::CubicTo { c1, c2, to } => cubic_point(start, c1, c2, to, t),
            PathSegment::Close => start.lerp(subpath_start, t),
        })
    }

    /// Axis-aligned bounds of all points, control points included.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.segments.iter().flat_map(|s| match *s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::CubicTo { c1, c2, to } => vec![c1, c2, to],
            PathSegment::Close => Vec::new(),
        });
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    pub fn translated(&self, offset: Vec2) -> PathOutline {
        PathOutline {
            segments: self.segments.iter().map(|s| s.map_points(|p| p + offset)).collect(),
        }
    }

    /// Serialize to SVG path data, e.g. `M0,60 C300,42 480,10 600,10 L1200,120 Z`.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = match *segment {
                PathSegment::MoveTo(p) => write!(out, "M{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathSegment::LineTo(p) => write!(out, "L{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathSegment::CubicTo { c1, c2, to } => write!(
                    out,
                    "C{},{} {},{} {},{}",
                    fmt_num(c1.x),
                    fmt_num(c1.y),
                    fmt_num(c2.x),
                    fmt_num(c2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ),
                PathSegment::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Shortest round-trippable form, with `-0` printed as `0`.
fn fmt_num(v: f32) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Incremental builder for [`PathOutline`].
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Append a pre-built segment.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn build(self) -> PathOutline {
        PathOutline::new(self.segments)
    }
}
