//! Polygon helpers: shoelace area and monotone-chain convex hull.

use nalgebra::Point2;
use std::cmp::Ordering;

/// Signed shoelace area of a closed polygon given in vertex order.
pub fn signed_area(points: &[Point2<f32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
    }
    (acc * 0.5) as f32
}

/// Absolute polygon area with vertices taken in the given order.
#[inline]
pub fn polygon_area(points: &[Point2<f32>]) -> f32 {
    signed_area(points).abs()
}

/// Absolute area enclosed by an integer contour (exact in `i64`).
pub fn contour_area(contour: &[Point2<i32>]) -> f32 {
    if contour.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    for (i, p) in contour.iter().enumerate() {
        let q = contour[(i + 1) % contour.len()];
        twice += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice.abs() as f32 * 0.5
}

/// Convex hull by Andrew's monotone chain, counter-clockwise in a y-up frame.
///
/// The hull only depends on the point set, not on the input order. Collinear
/// points on hull edges are dropped.
pub fn convex_hull(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    let mut pts: Vec<Point2<f32>> = points.to_vec();
    pts.sort_by(|a, b| lexicographic(a, b));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Area of the convex hull of a point set; independent of point order.
#[inline]
pub fn hull_area(points: &[Point2<f32>]) -> f32 {
    polygon_area(&convex_hull(points))
}

#[inline]
fn cross(o: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn lexicographic(a: &Point2<f32>, b: &Point2<f32>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2<f32>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn shoelace_area_of_square() {
        assert_eq!(polygon_area(&square()), 16.0);
        let mut cw = square();
        cw.reverse();
        assert_eq!(signed_area(&cw), -signed_area(&square()));
    }

    #[test]
    fn self_intersecting_order_loses_area() {
        let pts = square();
        let bowtie = vec![pts[0], pts[2], pts[1], pts[3]];
        assert!(polygon_area(&bowtie) < 16.0);
        assert_eq!(hull_area(&bowtie), 16.0);
    }

    #[test]
    fn contour_area_matches_float_shoelace() {
        let contour = vec![
            Point2::new(0, 0),
            Point2::new(10, 0),
            Point2::new(10, 40),
            Point2::new(0, 40),
        ];
        assert_eq!(contour_area(&contour), 400.0);
        assert_eq!(contour_area(&contour[..2]), 0.0);
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let mut pts = square();
        pts.push(Point2::new(2.0, 2.0));
        pts.push(Point2::new(2.0, 0.0));
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(signed_area(&hull) > 0.0);
    }

    #[test]
    fn hull_of_collinear_points_is_degenerate() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = convex_hull(&pts);
        assert!(hull.len() < 3);
        assert_eq!(hull_area(&pts), 0.0);
    }
}
