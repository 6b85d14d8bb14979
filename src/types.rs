use crate::armor::Armor;
use crate::light::LightInfo;
use serde::Serialize;

/// Detections for a single frame.
///
/// `lights` are sorted by center x; `armors` are ranked by descending area
/// and reference `lights` by index.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDetections {
    pub lights: Vec<LightInfo>,
    pub armors: Vec<Armor>,
}

impl FrameDetections {
    /// Largest armor of the frame, if any.
    pub fn best(&self) -> Option<&Armor> {
        self.armors.first()
    }

    pub fn is_empty(&self) -> bool {
        self.armors.is_empty()
    }
}
