//! Diagnostics data model returned by the detector.
//!
//! `DetectionReport` bundles the frame's detections with a `PipelineTrace`
//! describing how many contours each filter removed, how many light pairs
//! were examined and how long each stage took. Everything serializes to
//! JSON for offline inspection.

pub mod lights;
pub mod pairing;
pub mod pipeline;
pub mod timing;

pub use lights::{LightRejection, LightRejectionCounts, LightStage};
pub use pairing::PairingStage;
pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
