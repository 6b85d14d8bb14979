use crate::detector::params::ArmorParams;
use crate::geometry::RotatedRect;
use nalgebra::Point2;
use serde::Serialize;

/// Validated armor candidate: a landscape rectangle (`width >= height`)
/// with the indices of the two lights it was built from.
///
/// `left` and `right` index the frame's x-sorted light list; they are only
/// meaningful together with that list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub rect: RotatedRect,
    pub center: Point2<f32>,
    pub angle: f32,
    pub area: f32,
    pub left: usize,
    pub right: usize,
}

impl Armor {
    fn from_landscape(rect: RotatedRect, left: usize, right: usize) -> Self {
        Self {
            rect,
            center: rect.center,
            angle: rect.angle,
            area: rect.area(),
            left,
            right,
        }
    }
}

/// Orientation normalization and angle gate for fused rectangles.
pub struct ArmorValidator<'a> {
    params: &'a ArmorParams,
}

impl<'a> ArmorValidator<'a> {
    pub fn new(params: &'a ArmorParams) -> Self {
        Self { params }
    }

    /// Normalize `raw` to landscape and keep it if its angle is within the
    /// configured limit.
    pub fn validate(&self, raw: RotatedRect, left: usize, right: usize) -> Option<Armor> {
        let rect = raw.to_landscape();
        (rect.angle.abs() <= self.params.angle_limit_deg)
            .then(|| Armor::from_landscape(rect, left, right))
    }
}

/// Order armors by descending area; equal areas keep discovery order.
pub fn rank_by_area(armors: &mut [Armor]) {
    armors.sort_by(|a, b| b.area.total_cmp(&a.area));
}
