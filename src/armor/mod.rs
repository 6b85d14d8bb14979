//! Armor construction from paired light bars.
//!
//! - [`pairing`]: greedy compatibility scan over x-sorted lights.
//! - [`fusion`]: best-area quadrilateral over both lights' corners and the
//!   rectangle fitted around it.
//! - [`validate`]: landscape normalization, angle gate and area ranking.

pub mod fusion;
pub mod pairing;
pub mod validate;

pub use fusion::{combine_lights, max_area_quad, QuadSelection};
pub use pairing::{ArmorPairer, PairMetrics, PairingOutcome};
pub use validate::{rank_by_area, Armor, ArmorValidator};
