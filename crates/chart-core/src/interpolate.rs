// File: crates/chart-core/src/interpolate.rs
// Summary: Line interpolation: straight segments or Catmull-Rom splines as cubic Béziers.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interpolation {
    Linear,
    #[default]
    CatmullRom,
}

/// Path building blocks shared by the draw list and the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Build a path through `points`. Fewer than two points yields no path.
pub fn path_through(points: &[Point], method: Interpolation) -> Vec<PathVerb> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut verbs = Vec::with_capacity(points.len());
    verbs.push(PathVerb::MoveTo(points[0]));
    match method {
        Interpolation::Linear => {
            verbs.extend(points[1..].iter().copied().map(PathVerb::LineTo));
        }
        Interpolation::CatmullRom => {
            let last = points.len() - 1;
            for i in 0..last {
                // End segments reuse the endpoint as the phantom neighbour.
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(last)];
                let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
                let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
                verbs.push(PathVerb::CubicTo { c1, c2, to: p2 });
            }
        }
    }
    verbs
}

/// Evaluate a cubic Bézier at `t` in [0, 1].
pub fn cubic_point(p0: Point, c1: Point, c2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p3.x,
        a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    )
}

/// Flatten a path into `steps` points per curve segment.
pub fn flatten(verbs: &[PathVerb], steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    let mut out = Vec::new();
    let mut cursor = Point::default();
    for verb in verbs {
        match *verb {
            PathVerb::MoveTo(p) => {
                out.push(p);
                cursor = p;
            }
            PathVerb::LineTo(p) => {
                out.push(p);
                cursor = p;
            }
            PathVerb::CubicTo { c1, c2, to } => {
                out.extend((1..=steps).map(|k| cubic_point(cursor, c1, c2, to, k as f32 / steps as f32)));
                cursor = to;
            }
        }
    }
    out
}
