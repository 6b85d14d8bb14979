use serde::{Deserialize, Serialize};

/// Counters describing the pairing, fusion and validation stages.
///
/// `pairs_tested` counts every (left, right) combination evaluated against
/// the compatibility predicates; `compatible` counts those that reached
/// rectangle fusion. Each compatible pair ends up either in `accepted` or in
/// `rejected_by_angle`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingStage {
    pub lights: usize,
    pub pairs_tested: usize,
    pub compatible: usize,
    pub rejected_by_angle: usize,
    pub accepted: usize,
    pub elapsed_ms: f64,
}
