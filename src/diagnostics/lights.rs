use serde::{Deserialize, Serialize};

/// Why a contour did not become a light bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LightRejection {
    Area,
    Angle,
    Ratio,
    Solidity,
}

/// Per-reason rejection counters for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightRejectionCounts {
    pub area: usize,
    pub angle: usize,
    pub ratio: usize,
    pub solidity: usize,
}

impl LightRejectionCounts {
    pub fn record(&mut self, reason: LightRejection) {
        match reason {
            LightRejection::Area => self.area += 1,
            LightRejection::Angle => self.angle += 1,
            LightRejection::Ratio => self.ratio += 1,
            LightRejection::Solidity => self.solidity += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.area + self.angle + self.ratio + self.solidity
    }
}

/// Summary of the light-bar extraction stage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightStage {
    pub contours: usize,
    pub accepted: usize,
    pub rejected: LightRejectionCounts,
    pub elapsed_ms: f64,
}
