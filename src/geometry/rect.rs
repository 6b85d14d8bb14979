use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Width/height pair of a rotated rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectSize {
    pub width: f32,
    pub height: f32,
}

impl RectSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Rectangle described by its center, size and rotation in degrees.
///
/// `angle` is measured from the image x axis to the `width` side. The value
/// is immutable in spirit: normalizations return a new rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatedRect {
    pub center: Point2<f32>,
    pub size: RectSize,
    pub angle: f32,
}

impl RotatedRect {
    pub fn new(center: Point2<f32>, size: RectSize, angle: f32) -> Self {
        Self {
            center,
            size,
            angle,
        }
    }

    /// Unit vector along the `width` side.
    #[inline]
    pub fn width_axis(&self) -> Vector2<f32> {
        let rad = self.angle.to_radians();
        Vector2::new(rad.cos(), rad.sin())
    }

    /// Unit vector along the `height` side.
    #[inline]
    pub fn height_axis(&self) -> Vector2<f32> {
        let u = self.width_axis();
        Vector2::new(-u.y, u.x)
    }

    /// The four corners in a fixed order: (-w,+h), (-w,-h), (+w,-h), (+w,+h)
    /// in the rectangle's own frame.
    pub fn corners(&self) -> [Point2<f32>; 4] {
        let half_w = self.width_axis() * (self.size.width * 0.5);
        let half_h = self.height_axis() * (self.size.height * 0.5);
        let c = self.center;
        [
            c - half_w + half_h,
            c - half_w - half_h,
            c + half_w - half_h,
            c + half_w + half_h,
        ]
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.area()
    }

    /// Rectangle with `height >= width`, rotating the frame a quarter turn
    /// when the sides need to swap.
    pub fn to_portrait(self) -> Self {
        if self.size.width > self.size.height {
            Self::new(self.center, self.size.swapped(), self.angle + 90.0)
        } else {
            self
        }
    }

    /// Rectangle with `width >= height`; the counterpart of [`to_portrait`].
    ///
    /// [`to_portrait`]: RotatedRect::to_portrait
    pub fn to_landscape(self) -> Self {
        if self.size.width < self.size.height {
            Self::new(self.center, self.size.swapped(), self.angle + 90.0)
        } else {
            self
        }
    }

    /// Center-preserving uniform scale of both sides.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(
            self.center,
            RectSize::new(self.size.width * factor, self.size.height * factor),
            self.angle,
        )
    }
}
