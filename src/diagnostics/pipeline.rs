use crate::diagnostics::{LightStage, PairingStage, TimingBreakdown};
use crate::types::FrameDetections;
use serde::Serialize;

/// Result produced by
/// [`ArmorDetector::process_with_diagnostics`](crate::ArmorDetector::process_with_diagnostics).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub detections: FrameDetections,
    pub trace: PipelineTrace,
}

/// What the detector did with one frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub lights: LightStage,
    pub pairing: PairingStage,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    /// Mask dimensions when the frame came in as an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub contours: usize,
}
