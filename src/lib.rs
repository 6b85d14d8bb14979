#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod io;
pub mod segmentation;
pub mod types;

// Building blocks – public for tools and tests, less stable.
pub mod angle;
pub mod armor;
pub mod geometry;
pub mod light;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{ArmorDetector, DetectorParams};
pub use crate::types::FrameDetections;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Configuration and the per-frame value types.
pub use crate::armor::Armor;
pub use crate::config::{load_config, ConfigError, RuntimeConfig};
pub use crate::geometry::{Contour, RotatedRect};
pub use crate::light::LightInfo;
pub use crate::segmentation::{FrameFormat, LightColor};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use armor_detector::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let mask = armor_detector::io::load_mask(std::path::Path::new("mask.png"))?;
/// let detector = ArmorDetector::new(DetectorParams::default());
/// let report = detector.process_mask(&mask);
/// for armor in &report.detections.armors {
///     println!("center=({:.1}, {:.1}) area={:.1}", armor.center.x, armor.center.y, armor.area);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::{Contour, RectSize, RotatedRect};
    pub use crate::{Armor, ArmorDetector, DetectorParams, FrameDetections, LightColor, LightInfo};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::armor::{combine_lights, max_area_quad, ArmorPairer, ArmorValidator};
    pub use crate::light::{LightBarExtractor, LightExtraction};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        InputDescriptor, LightRejection, LightRejectionCounts, LightStage, PairingStage,
        StageTiming, TimingBreakdown,
    };
}
