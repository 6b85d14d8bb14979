//! Light-bar extraction.
//!
//! Each external contour of the color mask is measured (area), fitted with a
//! minimum-area rectangle, normalized so the long side is the height, and
//! filtered by angle, aspect ratio and solidity. Survivors are slightly
//! enlarged to make up for under-segmented edges and sorted left to right,
//! which is the order the pairing stage relies on.

mod extractor;
mod info;

pub use extractor::{LightBarExtractor, LightExtraction};
pub use info::LightInfo;
