//! Minimum-area enclosing rotated rectangle.
//!
//! The hull of the input is computed first; the optimal rectangle has one
//! side collinear with a hull edge, so every edge is tried as the base and
//! the remaining extents are measured by projection (rotating calipers in
//! their simplest, quadratic form; hulls here have a handful of vertices).
//!
//! Angle convention: the reported `angle` lies in `[-90, 0)` and is measured
//! from the x axis to the `width` side. An axis-aligned rectangle is thus
//! reported with `angle = -90` and `width` running along the y axis.

use super::polygon::convex_hull;
use super::rect::{RectSize, RotatedRect};
use crate::angle::fold_quarter_turn_deg;
use nalgebra::{Point2, Vector2};

const EDGE_EPS: f32 = 1e-9;

/// Fit the minimum-area rotated rectangle around `points`.
///
/// Degenerate inputs never panic: an empty set yields a zero-size rectangle
/// at the origin, a single point a zero-size rectangle at that point, and
/// collinear points a zero-height rectangle spanning the segment.
pub fn min_area_rect(points: &[Point2<f32>]) -> RotatedRect {
    let hull = convex_hull(points);
    match hull.len() {
        0 => RotatedRect::new(Point2::origin(), RectSize::default(), -90.0),
        1 => RotatedRect::new(hull[0], RectSize::default(), -90.0),
        2 => segment_rect(hull[0], hull[1]),
        _ => calipers(&hull),
    }
}

/// Same as [`min_area_rect`] for integer contour points.
pub fn min_area_rect_i32(points: &[Point2<i32>]) -> RotatedRect {
    let pts: Vec<Point2<f32>> = points
        .iter()
        .map(|p| Point2::new(p.x as f32, p.y as f32))
        .collect();
    min_area_rect(&pts)
}

fn segment_rect(a: Point2<f32>, b: Point2<f32>) -> RotatedRect {
    let d = b - a;
    let center = Point2::from((a.coords + b.coords) * 0.5);
    let angle = d.y.atan2(d.x).to_degrees();
    folded(center, RectSize::new(d.norm(), 0.0), angle)
}

fn calipers(hull: &[Point2<f32>]) -> RotatedRect {
    let n = hull.len();
    let mut best: Option<(f32, RotatedRect)> = None;
    for i in 0..n {
        let p0 = hull[i];
        let edge = hull[(i + 1) % n] - p0;
        let len = edge.norm();
        if len < EDGE_EPS {
            continue;
        }
        let u = edge / len;
        let v = Vector2::new(-u.y, u.x);

        let (mut min_u, mut max_u) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut min_v, mut max_v) = (f32::INFINITY, f32::NEG_INFINITY);
        for p in hull {
            let d = p - p0;
            let a = d.dot(&u);
            let b = d.dot(&v);
            min_u = min_u.min(a);
            max_u = max_u.max(a);
            min_v = min_v.min(b);
            max_v = max_v.max(b);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        let area = width * height;
        if best.as_ref().map_or(true, |(best_area, _)| area < *best_area) {
            let center = p0 + u * ((min_u + max_u) * 0.5) + v * ((min_v + max_v) * 0.5);
            let angle = u.y.atan2(u.x).to_degrees();
            best = Some((area, folded(center, RectSize::new(width, height), angle)));
        }
    }
    match best {
        Some((_, rect)) => rect,
        None => RotatedRect::new(hull[0], RectSize::default(), -90.0),
    }
}

fn folded(center: Point2<f32>, size: RectSize, angle: f32) -> RotatedRect {
    let (angle, swap) = fold_quarter_turn_deg(angle);
    let size = if swap { size.swapped() } else { size };
    RotatedRect::new(center, size, angle)
}
