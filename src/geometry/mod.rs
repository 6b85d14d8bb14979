//! Planar geometry primitives shared by the detection stages.
//!
//! - [`RotatedRect`]: center/size/angle rectangle with deterministic corners.
//! - [`polygon`]: shoelace areas and the monotone-chain convex hull.
//! - [`min_area_rect`]: minimum-area enclosing rectangle of a point set.

mod min_rect;
pub mod polygon;
mod rect;

pub use min_rect::{min_area_rect, min_area_rect_i32};
pub use polygon::{contour_area, convex_hull, hull_area, polygon_area};
pub use rect::{RectSize, RotatedRect};

use nalgebra::Point2;

/// External boundary of a connected mask region, in pixel coordinates.
pub type Contour = Vec<Point2<i32>>;
