//! Detector pipeline driving armor detection end-to-end.
//!
//! The [`ArmorDetector`] exposes a small API: feed the external contours of a
//! color mask (or the mask itself, or an HSV frame) and get ranked armors
//! with diagnostics.
//!
//! Typical usage:
//! ```no_run
//! use armor_detector::{ArmorDetector, DetectorParams};
//! use armor_detector::geometry::Contour;
//!
//! # fn example(contours: Vec<Contour>) {
//! let detector = ArmorDetector::new(DetectorParams::default());
//! let report = detector.process_with_diagnostics(&contours);
//! if let Some(best) = report.detections.best() {
//!     println!("armor at ({:.1}, {:.1})", best.center.x, best.center.y);
//! }
//! # }
//! ```
use super::params::DetectorParams;
use crate::armor::ArmorPairer;
use crate::diagnostics::{
    elapsed_ms, DetectionReport, InputDescriptor, LightStage, PipelineTrace, StageTiming,
    TimingBreakdown,
};
use crate::geometry::Contour;
use crate::light::LightBarExtractor;
use crate::segmentation::{external_contours, segment_frame, LightColor};
use crate::types::FrameDetections;
use image::{GrayImage, RgbImage};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Stateless per-frame detector: light extraction, pairing, fusion and
/// ranking. Nothing is carried from one frame to the next, so a shared
/// reference can serve several threads.
#[derive(Clone, Debug)]
pub struct ArmorDetector {
    params: DetectorParams,
}

impl ArmorDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run the detector on one frame's contours, returning only detections.
    pub fn process_contours(&self, contours: &[Contour]) -> FrameDetections {
        self.process_with_diagnostics(contours).detections
    }

    /// Run the detector and return both the detections and a stage trace.
    pub fn process_with_diagnostics(&self, contours: &[Contour]) -> DetectionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let light_start = Instant::now();
        let extraction = LightBarExtractor::new(&self.params.light).extract(contours);
        let light_ms = elapsed_ms(light_start);
        timings.push("lights", light_ms);
        debug!(
            "ArmorDetector::process contours={} lights={} rejected(area={} angle={} ratio={} solidity={})",
            contours.len(),
            extraction.lights.len(),
            extraction.rejected.area,
            extraction.rejected.angle,
            extraction.rejected.ratio,
            extraction.rejected.solidity,
        );

        let pair_start = Instant::now();
        let mut outcome =
            ArmorPairer::new(&self.params.pairing, &self.params.armor).pair(&extraction.lights);
        let pair_ms = elapsed_ms(pair_start);
        outcome.stage.elapsed_ms = pair_ms;
        timings.push("pairing", pair_ms);
        debug!(
            "ArmorDetector::process pairs_tested={} compatible={} armors={} rejected_by_angle={}",
            outcome.stage.pairs_tested,
            outcome.stage.compatible,
            outcome.stage.accepted,
            outcome.stage.rejected_by_angle,
        );

        timings.total_ms = elapsed_ms(total_start);
        let lights = LightStage {
            contours: contours.len(),
            accepted: extraction.lights.len(),
            rejected: extraction.rejected,
            elapsed_ms: light_ms,
        };

        DetectionReport {
            detections: FrameDetections {
                lights: extraction.lights,
                armors: outcome.armors,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: None,
                    height: None,
                    contours: contours.len(),
                },
                lights,
                pairing: outcome.stage,
                timings,
            },
        }
    }

    /// Extract external contours from a binary mask and run the detector.
    pub fn process_mask(&self, mask: &GrayImage) -> DetectionReport {
        let contour_start = Instant::now();
        let contours = external_contours(mask);
        let contour_ms = elapsed_ms(contour_start);

        let report = self.process_with_diagnostics(&contours);
        with_image_input(report, mask, "contours", contour_ms)
    }

    /// Threshold an HSV frame with `color`'s bounds, dilate it and run the
    /// detector on its external contours. The dilated mask is returned with
    /// the report so callers can draw overlays on it.
    pub fn process_hsv(
        &self,
        hsv: &RgbImage,
        color: LightColor,
        dilate_radius: u8,
    ) -> (GrayImage, DetectionReport) {
        let segment_start = Instant::now();
        let (mask, contours) = segment_frame(hsv, color, dilate_radius);
        let segment_ms = elapsed_ms(segment_start);
        debug!(
            "ArmorDetector::process_hsv color={color} dilate_radius={dilate_radius} contours={}",
            contours.len()
        );

        let report = self.process_with_diagnostics(&contours);
        let report = with_image_input(report, &mask, "segmentation", segment_ms);
        (mask, report)
    }

    /// Process independent frames in parallel. Output order follows input
    /// order.
    pub fn process_batch(&self, frames: &[Vec<Contour>]) -> Vec<FrameDetections> {
        frames
            .par_iter()
            .map(|contours| self.process_contours(contours))
            .collect()
    }
}

/// Record the source image size and the time spent turning it into
/// contours.
fn with_image_input(
    mut report: DetectionReport,
    image: &GrayImage,
    label: &str,
    elapsed: f64,
) -> DetectionReport {
    report.trace.input.width = Some(image.width());
    report.trace.input.height = Some(image.height());
    report.trace.timings.stages.insert(
        0,
        StageTiming {
            label: label.to_string(),
            elapsed_ms: elapsed,
        },
    );
    report.trace.timings.total_ms += elapsed;
    report
}

impl Default for ArmorDetector {
    fn default() -> Self {
        Self::new(DetectorParams::default())
    }
}
