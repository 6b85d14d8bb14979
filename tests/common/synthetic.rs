use armor_detector::geometry::{Contour, RectSize, RotatedRect};
use image::{GrayImage, Luma, Rgb, RgbImage};
use nalgebra::Point2;

/// Four-corner contour of a rotated rectangle, corners rounded to pixels.
///
/// `angle` follows `RotatedRect`: degrees from the x axis to the `width`
/// side, so a vertical bar is `bar(x, y, 10.0, 40.0, 0.0)`.
pub fn bar(x: f32, y: f32, width: f32, height: f32, angle: f32) -> Contour {
    RotatedRect::new(Point2::new(x, y), RectSize::new(width, height), angle)
        .corners()
        .iter()
        .map(|c| Point2::new(c.x.round() as i32, c.y.round() as i32))
        .collect()
}

/// Blank mask of the given size.
pub fn blank_mask(width: u32, height: u32) -> GrayImage {
    GrayImage::new(width, height)
}

/// Paint the axis-aligned block `[x0, x1) × [y0, y1)` as foreground.
pub fn paint_block(mask: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1.min(mask.height()) {
        for x in x0..x1.min(mask.width()) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
}

/// Mask with two vertical light bars, `gap` pixels between their left edges.
pub fn two_bar_mask(gap: u32) -> GrayImage {
    let mut mask = blank_mask(320, 240);
    paint_block(&mut mask, 95, 80, 105, 120);
    paint_block(&mut mask, 95 + gap, 80, 105 + gap, 120);
    mask
}

pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Three-channel HSV frame with two upright bars painted in `hsv`, laid out
/// like [`two_bar_mask`].
pub fn two_bar_hsv(gap: u32, hsv: [u8; 3]) -> RgbImage {
    let mut frame = RgbImage::from_pixel(320, 240, Rgb([0, 0, 40]));
    for (x0, x1) in [(95, 105), (95 + gap, 105 + gap)] {
        for y in 80..120 {
            for x in x0..x1 {
                frame.put_pixel(x, y, Rgb(hsv));
            }
        }
    }
    frame
}
