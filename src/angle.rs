//! Angle utilities for rotated rectangles (degrees).

/// Folds a rectangle angle into `[-90, 0)` by whole quarter turns.
///
/// Returns the folded angle and whether an odd number of quarter turns was
/// removed, in which case the rectangle's width and height swap roles.
#[inline]
pub fn fold_quarter_turn_deg(angle: f32) -> (f32, bool) {
    let turns = (angle / 90.0).floor() + 1.0;
    let mut folded = angle - turns * 90.0;
    let mut odd = (turns as i64).rem_euclid(2) == 1;
    // Rounding can leave the value a hair outside the interval.
    if folded >= 0.0 {
        folded -= 90.0;
        odd = !odd;
    }
    if folded < -90.0 {
        folded += 90.0;
        odd = !odd;
    }
    (folded, odd)
}

/// Absolute difference between two rectangle angles in degrees.
///
/// No wrap-around is applied: normalized light-bar angles share one
/// half-open range, so the plain difference is what the pairing rules use.
#[inline]
pub fn abs_difference_deg(a: f32, b: f32) -> f32 {
    (a - b).abs()
}
