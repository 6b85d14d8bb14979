//! Fusion of two light-bar rectangles into one armor rectangle.
//!
//! The eight corners of both lights are pooled and every 4-point subset is
//! scored by the area it encloses. The rectangle fitted around the best
//! subset is the raw armor candidate.
//!
//! Subset area is the area of the convex hull of the four points, so the
//! score does not depend on the order the points happen to be listed in.
//! Subsets are visited in lexicographic index order and only a strictly
//! larger area replaces the incumbent, so ties go to the first subset.

use crate::geometry::{hull_area, min_area_rect, RotatedRect};
use crate::light::LightInfo;
use nalgebra::Point2;

/// Winning 4-point subset of a corner pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSelection {
    /// Indices into the pool, strictly increasing.
    pub indices: [usize; 4],
    pub points: [Point2<f32>; 4],
    pub area: f32,
}

/// Exhaustive search for the 4-point subset of `pool` enclosing the most area.
///
/// Returns `None` when the pool has fewer than four points or every subset
/// is degenerate (zero area).
pub fn max_area_quad(pool: &[Point2<f32>]) -> Option<QuadSelection> {
    let n = pool.len();
    let mut best: Option<QuadSelection> = None;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    let points = [pool[i], pool[j], pool[k], pool[l]];
                    let area = hull_area(&points);
                    let incumbent = best.as_ref().map_or(0.0, |b| b.area);
                    if area > incumbent {
                        best = Some(QuadSelection {
                            indices: [i, j, k, l],
                            points,
                            area,
                        });
                    }
                }
            }
        }
    }
    best
}

/// Corner pool of a light pair: the four corners of `first` followed by the
/// four corners of `second`.
pub fn corner_pool(first: &LightInfo, second: &LightInfo) -> [Point2<f32>; 8] {
    let a = first.bounding_rect().corners();
    let b = second.bounding_rect().corners();
    [a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]]
}

/// Minimum-area rectangle around the best-area quadrilateral of both lights'
/// corners. The result uses the fitting convention of
/// [`min_area_rect`](crate::geometry::min_area_rect) and is not yet
/// normalized to the armor orientation.
pub fn combine_lights(first: &LightInfo, second: &LightInfo) -> RotatedRect {
    let pool = corner_pool(first, second);
    match max_area_quad(&pool) {
        Some(quad) => min_area_rect(&quad.points),
        None => min_area_rect(&pool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RectSize;

    fn light(x: f32, y: f32, w: f32, h: f32, angle: f32) -> LightInfo {
        LightInfo::new(RotatedRect::new(
            Point2::new(x, y),
            RectSize::new(w, h),
            angle,
        ))
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn sorted_keys(points: &[Point2<f32>]) -> Vec<(i64, i64)> {
        let mut keys: Vec<(i64, i64)> = points
            .iter()
            .map(|p| ((p.x * 1000.0).round() as i64, (p.y * 1000.0).round() as i64))
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn parallel_lights_fuse_into_outer_box() {
        let a = light(100.0, 100.0, 10.0, 40.0, 0.0);
        let b = light(160.0, 100.0, 10.0, 40.0, 0.0);
        let quad = max_area_quad(&corner_pool(&a, &b)).expect("non-degenerate pool");
        assert!(approx_eq(quad.area, 70.0 * 40.0));
        assert_eq!(
            sorted_keys(&quad.points),
            sorted_keys(&[
                Point2::new(95.0, 80.0),
                Point2::new(95.0, 120.0),
                Point2::new(165.0, 80.0),
                Point2::new(165.0, 120.0),
            ])
        );

        let rect = combine_lights(&a, &b).to_landscape();
        assert!(approx_eq(rect.center.x, 130.0));
        assert!(approx_eq(rect.center.y, 100.0));
        assert!(approx_eq(rect.size.width, 70.0));
        assert!(approx_eq(rect.size.height, 40.0));
        assert!(approx_eq(rect.angle, 0.0));
    }

    #[test]
    fn fusion_is_bit_identical_across_calls() {
        let a = light(10.0, 50.0, 6.0, 25.0, -7.0);
        let b = light(48.0, 53.0, 5.0, 23.0, 4.0);
        let first = combine_lights(&a, &b);
        for _ in 0..5 {
            let again = combine_lights(&a, &b);
            assert_eq!(first.center.x.to_bits(), again.center.x.to_bits());
            assert_eq!(first.center.y.to_bits(), again.center.y.to_bits());
            assert_eq!(first.size.width.to_bits(), again.size.width.to_bits());
            assert_eq!(first.size.height.to_bits(), again.size.height.to_bits());
            assert_eq!(first.angle.to_bits(), again.angle.to_bits());
        }
    }

    #[test]
    fn permuted_pool_selects_same_points() {
        let a = light(100.0, 100.0, 10.0, 40.0, -5.0);
        let b = light(170.0, 104.0, 12.0, 44.0, 3.0);
        let pool = corner_pool(&a, &b);
        let reference = max_area_quad(&pool).expect("non-degenerate pool");

        let orders: [[usize; 8]; 3] = [
            [7, 6, 5, 4, 3, 2, 1, 0],
            [4, 0, 5, 1, 6, 2, 7, 3],
            [2, 7, 0, 5, 3, 6, 1, 4],
        ];
        for order in orders {
            let permuted: Vec<Point2<f32>> = order.iter().map(|&i| pool[i]).collect();
            let quad = max_area_quad(&permuted).expect("non-degenerate pool");
            assert_eq!(sorted_keys(&quad.points), sorted_keys(&reference.points));
            assert_eq!(quad.area.to_bits(), reference.area.to_bits());
        }
    }

    #[test]
    fn ties_resolve_to_first_subset() {
        // Square corners, its center and a repeated corner: several subsets tie.
        let pool = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let quad = max_area_quad(&pool).expect("non-degenerate pool");
        assert_eq!(quad.indices, [0, 1, 2, 3]);
        assert!(approx_eq(quad.area, 4.0));
    }

    #[test]
    fn degenerate_pool_has_no_quad() {
        let pool = [Point2::new(1.0, 1.0); 8];
        assert!(max_area_quad(&pool).is_none());
        assert!(max_area_quad(&pool[..3]).is_none());
    }
}
