//! Greedy left-to-right pairing of light bars.
//!
//! Lights arrive sorted by center x. For every light `i` the lights to its
//! right are scanned in order and the first one passing all compatibility
//! predicates becomes its partner; the scan for `i` then stops, whether or
//! not the fused rectangle survives validation. A light is therefore the
//! left member of at most one pair. The same light may still be picked as
//! the right member by several earlier lights: overlapping armors are
//! possible and are not deduplicated.

use super::fusion::combine_lights;
use super::validate::{rank_by_area, Armor, ArmorValidator};
use crate::angle::abs_difference_deg;
use crate::detector::params::{ArmorParams, PairingParams};
use crate::diagnostics::PairingStage;
use crate::light::LightInfo;
use log::trace;
use nalgebra::distance;
use serde::Serialize;

/// Geometric relation between two light bars, normalized by their mean
/// height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairMetrics {
    pub angle_diff: f32,
    pub height_diff_ratio: f32,
    pub y_diff_ratio: f32,
    pub x_diff_ratio: f32,
    pub distance_ratio: f32,
}

impl PairMetrics {
    pub fn between(a: &LightInfo, b: &LightInfo) -> Self {
        let (ca, cb) = (a.center(), b.center());
        let mean_height = (a.height() + b.height()) * 0.5;
        Self {
            angle_diff: abs_difference_deg(a.angle(), b.angle()),
            height_diff_ratio: (a.height() - b.height()).abs() / a.height().max(b.height()),
            y_diff_ratio: (ca.y - cb.y).abs() / mean_height,
            x_diff_ratio: (ca.x - cb.x).abs() / mean_height,
            distance_ratio: distance(&ca, &cb) / mean_height,
        }
    }

    /// All predicates are phrased positively so that NaN metrics (zero-height
    /// lights) never pass.
    pub fn is_compatible(&self, p: &PairingParams) -> bool {
        self.angle_diff <= p.max_angle_diff_deg
            && self.height_diff_ratio <= p.max_height_diff_ratio
            && self.y_diff_ratio <= p.max_y_diff_ratio
            && self.x_diff_ratio >= p.min_x_diff_ratio
            && self.distance_ratio >= p.min_distance_ratio
            && self.distance_ratio <= p.max_distance_ratio
    }
}

/// Result of pairing one frame's lights.
#[derive(Clone, Debug, Default)]
pub struct PairingOutcome {
    /// Validated armors, ranked by descending area.
    pub armors: Vec<Armor>,
    pub stage: PairingStage,
}

/// Pairs lights, fuses compatible pairs and validates the fused rectangles.
pub struct ArmorPairer<'a> {
    pairing: &'a PairingParams,
    validator: ArmorValidator<'a>,
}

impl<'a> ArmorPairer<'a> {
    pub fn new(pairing: &'a PairingParams, armor: &'a ArmorParams) -> Self {
        Self {
            pairing,
            validator: ArmorValidator::new(armor),
        }
    }

    /// Index of the first light right of `left` compatible with it, along
    /// with the number of candidates examined.
    pub fn find_partner(&self, lights: &[LightInfo], left: usize) -> (Option<usize>, usize) {
        let mut tested = 0;
        for right in left + 1..lights.len() {
            tested += 1;
            let metrics = PairMetrics::between(&lights[left], &lights[right]);
            if metrics.is_compatible(self.pairing) {
                return (Some(right), tested);
            }
            trace!("pair ({left}, {right}) incompatible: {metrics:?}");
        }
        (None, tested)
    }

    /// Pair `lights` (sorted by center x) and return ranked armors.
    pub fn pair(&self, lights: &[LightInfo]) -> PairingOutcome {
        let mut out = PairingOutcome::default();
        out.stage.lights = lights.len();
        for left in 0..lights.len() {
            let (partner, tested) = self.find_partner(lights, left);
            out.stage.pairs_tested += tested;
            let Some(right) = partner else {
                continue;
            };
            out.stage.compatible += 1;
            let raw = combine_lights(&lights[left], &lights[right]);
            match self.validator.validate(raw, left, right) {
                Some(armor) => out.armors.push(armor),
                None => {
                    trace!(
                        "pair ({left}, {right}) fused angle {:.2} over limit",
                        raw.to_landscape().angle
                    );
                    out.stage.rejected_by_angle += 1;
                }
            }
        }
        rank_by_area(&mut out.armors);
        out.stage.accepted = out.armors.len();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{RectSize, RotatedRect};
    use nalgebra::Point2;

    fn light(x: f32, y: f32, w: f32, h: f32, angle: f32) -> LightInfo {
        LightInfo::new(RotatedRect::new(
            Point2::new(x, y),
            RectSize::new(w, h),
            angle,
        ))
    }

    fn armor_params() -> ArmorParams {
        ArmorParams {
            angle_limit_deg: 20.0,
        }
    }

    #[test]
    fn metrics_of_side_by_side_pair() {
        let a = light(100.0, 100.0, 10.0, 40.0, 0.0);
        let b = light(160.0, 100.0, 10.0, 40.0, 0.0);
        let m = PairMetrics::between(&a, &b);
        assert_eq!(m.angle_diff, 0.0);
        assert_eq!(m.height_diff_ratio, 0.0);
        assert_eq!(m.y_diff_ratio, 0.0);
        assert!((m.x_diff_ratio - 1.5).abs() < 1e-6);
        assert!((m.distance_ratio - 1.5).abs() < 1e-6);
        assert!(m.is_compatible(&PairingParams::default()));
    }

    #[test]
    fn zero_height_lights_never_pair() {
        let a = light(0.0, 0.0, 0.0, 0.0, 0.0);
        let b = light(10.0, 0.0, 0.0, 0.0, 0.0);
        let m = PairMetrics::between(&a, &b);
        assert!(!m.is_compatible(&PairingParams::default()));
    }

    #[test]
    fn first_compatible_partner_wins() {
        let pairing = PairingParams::default();
        let armor = armor_params();
        let lights = vec![
            light(100.0, 100.0, 10.0, 40.0, 0.0),
            light(160.0, 100.0, 10.0, 40.0, 0.0),
            light(220.0, 100.0, 10.0, 40.0, 0.0),
        ];
        let pairer = ArmorPairer::new(&pairing, &armor);
        assert_eq!(pairer.find_partner(&lights, 0), (Some(1), 1));
        let out = pairer.pair(&lights);
        // 0 pairs with 1 (nearest), 1 pairs with 2; 2 has nobody to its right.
        assert_eq!(out.armors.len(), 2);
        let mut lefts: Vec<usize> = out.armors.iter().map(|a| a.left).collect();
        lefts.sort_unstable();
        assert_eq!(lefts, vec![0, 1]);
        assert_eq!(out.stage.compatible, 2);
        assert_eq!(out.stage.accepted, 2);
    }

    #[test]
    fn right_member_can_be_shared() {
        let pairing = PairingParams {
            max_angle_diff_deg: 10.0,
            max_height_diff_ratio: 0.3,
            max_y_diff_ratio: 0.5,
            min_x_diff_ratio: 0.5,
            min_distance_ratio: 1.0,
            max_distance_ratio: 3.0,
        };
        let armor = armor_params();
        // Light 1 is too close to light 0 (distance ratio 0.75), so light 0
        // skips it and pairs with light 2, which light 1 also picks.
        let lights = vec![
            light(100.0, 100.0, 10.0, 40.0, 0.0),
            light(130.0, 100.0, 10.0, 40.0, 0.0),
            light(180.0, 100.0, 10.0, 40.0, 0.0),
        ];
        let out = ArmorPairer::new(&pairing, &armor).pair(&lights);
        assert_eq!(out.armors.len(), 2);
        assert!(out.armors.iter().all(|a| a.right == 2));
        assert!(out.armors[0].area >= out.armors[1].area);
    }

    #[test]
    fn angle_difference_blocks_pairing() {
        let pairing = PairingParams::default();
        let armor = armor_params();
        let lights = vec![
            light(100.0, 100.0, 10.0, 40.0, -8.0),
            light(160.0, 100.0, 10.0, 40.0, 8.0),
        ];
        let out = ArmorPairer::new(&pairing, &armor).pair(&lights);
        assert!(out.armors.is_empty());
        assert_eq!(out.stage.compatible, 0);
        assert_eq!(out.stage.pairs_tested, 1);
    }

    #[test]
    fn rejected_fusion_still_ends_the_scan() {
        let pairing = PairingParams::default();
        let armor = ArmorParams {
            angle_limit_deg: 1.0,
        };
        // Vertically offset pair: the fused box is tilted beyond 1 degree.
        let lights = vec![
            light(100.0, 100.0, 10.0, 40.0, 0.0),
            light(160.0, 115.0, 10.0, 40.0, 0.0),
            light(200.0, 100.0, 10.0, 40.0, 0.0),
        ];
        let pairer = ArmorPairer::new(&pairing, &armor);
        let out = pairer.pair(&lights);
        assert_eq!(pairer.find_partner(&lights, 0).0, Some(1));
        assert!(out.armors.iter().all(|a| a.left != 0));
        assert!(out.stage.rejected_by_angle >= 1);
    }
}
