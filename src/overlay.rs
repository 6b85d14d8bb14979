//! Debug overlays: light bars and armors drawn over the frame mask.
use crate::geometry::RotatedRect;
use crate::segmentation::LightColor;
use crate::types::FrameDetections;
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Outline of a rotated rectangle, corner to corner.
pub fn draw_rotated_rect(canvas: &mut RgbImage, rect: &RotatedRect, color: Rgb<u8>) {
    let corners = rect.corners();
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        draw_line_segment_mut(canvas, (a.x, a.y), (b.x, b.y), color);
    }
}

/// Render `detections` over a dimmed copy of `mask`: lights in the color's
/// light draw color, armors in its armor draw color.
pub fn render_overlay(
    mask: &GrayImage,
    detections: &FrameDetections,
    color: LightColor,
) -> RgbImage {
    let mut canvas = RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        let v = mask.get_pixel(x, y).0[0] / 3;
        Rgb([v, v, v])
    });
    for light in &detections.lights {
        draw_rotated_rect(&mut canvas, light.bounding_rect(), color.light_draw_color());
    }
    for armor in &detections.armors {
        draw_rotated_rect(&mut canvas, &armor.rect, color.armor_draw_color());
    }
    canvas
}
