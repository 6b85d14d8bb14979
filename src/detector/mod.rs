//! Armor detector orchestrating the per-frame light → armor pipeline.
//!
//! Overview
//! - Fits a minimum-area rotated rectangle to every external contour of the
//!   color mask and keeps the ones that look like light bars (area, tilt,
//!   elongation and solidity filters), extending each survivor slightly.
//! - Sorts the lights by center x and scans them left to right. Each light is
//!   paired with the first light to its right that passes the geometric
//!   compatibility test (angle, height, vertical offset, horizontal gap and
//!   distance normalized by the mean height).
//! - Fuses every pair into one rectangle fitted to the largest-area
//!   quadrilateral among the eight bar corners, normalizes it to landscape and
//!   keeps it when its tilt is within the armor angle limit.
//! - Ranks the surviving armors by descending area.
//!
//! Modules
//! - [`params`] – thresholds grouped by stage.
//! - `pipeline` – the [`ArmorDetector`] façade and its diagnostics.
//!
//! The detector holds no per-frame state: each call works on its own inputs,
//! so [`ArmorDetector::process_batch`] can fan frames out with rayon.

pub mod params;
mod pipeline;

pub use params::{ArmorParams, DetectorParams, LightFilterParams, PairingParams};
pub use pipeline::ArmorDetector;
