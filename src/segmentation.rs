//! Mask front-end: color bounds, thresholding, dilation and external
//! contours.
//!
//! Color conversion itself is out of scope. [`threshold_hsv`] expects a
//! three-channel image already encoded as 8-bit HSV with hue in `0..180`,
//! the usual layout produced by camera pipelines and image libraries.

use crate::geometry::Contour;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::distance_transform::Norm;
use imageproc::morphology::dilate;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius of the default dilation disk (an 11×11 ellipse).
pub const DEFAULT_DILATE_RADIUS: u8 = 5;

/// Target light color. Only the two team colors exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightColor {
    Red,
    Blue,
}

impl LightColor {
    /// HSV bounds selecting this color's light bars.
    pub fn hsv_range(self) -> HsvRange {
        match self {
            Self::Blue => HsvRange::new([100, 100, 100], [140, 255, 255]),
            Self::Red => HsvRange::new([0, 100, 100], [10, 255, 255]),
        }
    }

    /// Outline color for light bars in debug overlays.
    pub fn light_draw_color(self) -> Rgb<u8> {
        match self {
            Self::Blue => Rgb([0, 0, 255]),
            Self::Red => Rgb([255, 0, 0]),
        }
    }

    /// Outline color for armors in debug overlays.
    pub fn armor_draw_color(self) -> Rgb<u8> {
        Rgb([0, 255, 0])
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// Error for color names other than `red` and `blue`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown light color {:?} (expected \"red\" or \"blue\")", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for LightColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "blue" => Ok(Self::Blue),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}

/// How frames on disk encode the lights.
///
/// `Mask` frames are already binary; `Hsv` frames are three-channel 8-bit
/// HSV images thresholded with the configured [`LightColor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    #[default]
    Mask,
    Hsv,
}

/// Inclusive per-channel bounds in HSV space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Binary mask (0/255) of pixels inside `range`.
pub fn threshold_hsv(hsv: &RgbImage, range: HsvRange) -> GrayImage {
    let mut mask = GrayImage::new(hsv.width(), hsv.height());
    for (x, y, px) in hsv.enumerate_pixels() {
        if range.contains(px.0) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

/// Grow the mask by a Euclidean disk of `radius` pixels.
pub fn dilate_mask(mask: &GrayImage, radius: u8) -> GrayImage {
    if radius == 0 {
        return mask.clone();
    }
    dilate(mask, Norm::L2, radius)
}

/// Outer boundaries of the top-level foreground regions of `mask`.
///
/// Regions nested inside holes of other regions are skipped, matching an
/// external-only retrieval mode.
pub fn external_contours(mask: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| c.points.iter().map(|p| Point2::new(p.x, p.y)).collect())
        .collect()
}

/// Full front-end for one already-HSV frame: threshold, dilate, contours.
pub fn segment_frame(
    hsv: &RgbImage,
    color: LightColor,
    dilate_radius: u8,
) -> (GrayImage, Vec<Contour>) {
    let mask = dilate_mask(&threshold_hsv(hsv, color.hsv_range()), dilate_radius);
    let contours = external_contours(&mask);
    (mask, contours)
}
