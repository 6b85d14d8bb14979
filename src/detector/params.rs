//! Parameter types configuring the detector stages.
//!
//! Thresholds are grouped by the stage that consumes them: light-bar
//! filtering, light-pair compatibility and armor validation. All angles are
//! in degrees and all ratios are dimensionless.
//!
//! Defaults are a reasonable starting point for 640×480 masks; real
//! deployments load every value from the runtime configuration.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the light → armor pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    pub light: LightFilterParams,
    pub pairing: PairingParams,
    pub armor: ArmorParams,
}

/// Per-contour light-bar filters.
///
/// - `min_area`: minimum contour area in pixels².
/// - `max_angle_deg`: maximum |angle| of the portrait-normalized rectangle.
/// - `min_ratio`/`max_ratio`: accepted height/width range.
/// - `min_solidity`: minimum contour area over fitted rectangle area.
/// - `extend_ratio`: uniform size scale applied to accepted rectangles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightFilterParams {
    pub min_area: f32,
    pub max_angle_deg: f32,
    pub min_ratio: f32,
    pub max_ratio: f32,
    pub min_solidity: f32,
    pub extend_ratio: f32,
}

impl Default for LightFilterParams {
    fn default() -> Self {
        Self {
            min_area: 10.0,
            max_angle_deg: 45.0,
            min_ratio: 1.5,
            max_ratio: 20.0,
            min_solidity: 0.5,
            extend_ratio: 1.1,
        }
    }
}

/// Geometric compatibility between two light bars.
///
/// Ratios are normalized by the mean light height `L`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairingParams {
    /// Maximum |angle_i - angle_j| in degrees.
    pub max_angle_diff_deg: f32,
    /// Maximum |h_i - h_j| / max(h_i, h_j).
    pub max_height_diff_ratio: f32,
    /// Maximum |y_i - y_j| / L.
    pub max_y_diff_ratio: f32,
    /// Minimum |x_i - x_j| / L.
    pub min_x_diff_ratio: f32,
    /// Accepted range of center distance / L.
    pub min_distance_ratio: f32,
    pub max_distance_ratio: f32,
}

impl Default for PairingParams {
    fn default() -> Self {
        Self {
            max_angle_diff_deg: 10.0,
            max_height_diff_ratio: 0.3,
            max_y_diff_ratio: 0.5,
            min_x_diff_ratio: 0.5,
            min_distance_ratio: 1.0,
            max_distance_ratio: 3.0,
        }
    }
}

/// Validation of fused armor rectangles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmorParams {
    /// Maximum |angle| of the landscape-normalized armor.
    pub angle_limit_deg: f32,
}

impl Default for ArmorParams {
    fn default() -> Self {
        Self {
            angle_limit_deg: 20.0,
        }
    }
}
