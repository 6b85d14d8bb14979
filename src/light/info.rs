use crate::geometry::RotatedRect;
use nalgebra::Point2;
use serde::Serialize;

/// Read-only view over a portrait light-bar rectangle.
///
/// Construction enforces `height >= width`; the derived fields are cached so
/// the pairing stage can compare them without touching the rectangle again.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightInfo {
    bounding_rect: RotatedRect,
    angle: f32,
    aspect_ratio: f32,
    area: f32,
    height: f32,
    center: Point2<f32>,
}

impl LightInfo {
    pub fn new(rect: RotatedRect) -> Self {
        let rect = rect.to_portrait();
        Self {
            bounding_rect: rect,
            angle: rect.angle,
            aspect_ratio: rect.size.height / rect.size.width,
            area: rect.area(),
            height: rect.size.height,
            center: rect.center,
        }
    }

    #[inline]
    pub fn bounding_rect(&self) -> &RotatedRect {
        &self.bounding_rect
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Height over width; at least 1 by construction.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.area
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounding_rect.size.width
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        self.center
    }
}

impl From<RotatedRect> for LightInfo {
    fn from(rect: RotatedRect) -> Self {
        Self::new(rect)
    }
}
