use super::LightInfo;
use crate::detector::params::LightFilterParams;
use crate::diagnostics::{LightRejection, LightRejectionCounts};
use crate::geometry::{contour_area, min_area_rect_i32, Contour};
use nalgebra::Point2;

/// Output of [`LightBarExtractor::extract`]: x-sorted light bars plus the
/// per-reason count of contours that were filtered out.
#[derive(Clone, Debug, Default)]
pub struct LightExtraction {
    pub lights: Vec<LightInfo>,
    pub rejected: LightRejectionCounts,
}

/// Turns external mask contours into normalized light-bar descriptors.
pub struct LightBarExtractor<'a> {
    params: &'a LightFilterParams,
}

impl<'a> LightBarExtractor<'a> {
    pub fn new(params: &'a LightFilterParams) -> Self {
        Self { params }
    }

    /// Run every filter on a single contour.
    ///
    /// Rejections are expected outcomes, returned as the reason that fired
    /// first. Accepted rectangles are already scaled by `extend_ratio`.
    pub fn classify(&self, contour: &[Point2<i32>]) -> Result<LightInfo, LightRejection> {
        let p = self.params;
        let area = contour_area(contour);
        if area < p.min_area {
            return Err(LightRejection::Area);
        }

        let rect = min_area_rect_i32(contour).to_portrait();
        if rect.angle.abs() > p.max_angle_deg {
            return Err(LightRejection::Angle);
        }

        let (width, height) = (rect.size.width, rect.size.height);
        if !(width > 0.0 && height > 0.0) {
            return Err(LightRejection::Ratio);
        }
        let ratio = height / width;
        if ratio > p.max_ratio || ratio < p.min_ratio {
            return Err(LightRejection::Ratio);
        }
        if area / rect.area() < p.min_solidity {
            return Err(LightRejection::Solidity);
        }

        Ok(LightInfo::new(rect.scaled(p.extend_ratio)))
    }

    /// Filter all contours of a frame and sort survivors by center x.
    ///
    /// The sort is stable, so lights sharing an x coordinate keep contour
    /// order.
    pub fn extract(&self, contours: &[Contour]) -> LightExtraction {
        let mut out = LightExtraction {
            lights: Vec::with_capacity(contours.len()),
            rejected: LightRejectionCounts::default(),
        };
        for contour in contours {
            match self.classify(contour) {
                Ok(light) => out.lights.push(light),
                Err(reason) => out.rejected.record(reason),
            }
        }
        out.lights.sort_by(|a, b| a.center().x.total_cmp(&b.center().x));
        out
    }
}
