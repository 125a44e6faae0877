use crate::Color;

/// Conventional upper end of the tolerance range.
///
/// Any tolerance at or above the largest achievable redmean distance
/// (about 764.8, black against white) matches every color.
pub const MAX_TOLERANCE: f64 = 765.0;

/// Redmean color difference between two colors.
///
/// Weighted Euclidean distance where the red and blue weights follow the mean
/// red level of both colors. The mean is kept fractional; truncating it moves
/// results at channel-difference boundaries.
pub fn color_distance(a: Color, b: Color) -> f64 {
    let (r_1, g_1, b_1) = (f64::from(a.r), f64::from(a.g), f64::from(a.b));
    let (r_2, g_2, b_2) = (f64::from(b.r), f64::from(b.g), f64::from(b.b));

    let delta_r_2 = (r_1 - r_2) * (r_1 - r_2);
    let delta_g_2 = (g_1 - g_2) * (g_1 - g_2);
    let delta_b_2 = (b_1 - b_2) * (b_1 - b_2);
    let avg_r = (r_1 + r_2) / 2.0;

    ((2.0 + avg_r / 256.0) * delta_r_2 + 4.0 * delta_g_2 + (2.0 + (255.0 - avg_r) / 256.0) * delta_b_2).sqrt()
}

/// Returns `true` if `color_a` lies within `tolerance` of `color_b`, with the
/// result flipped when `invert` is set.
///
/// A negative tolerance matches nothing, a tolerance of 0 only equal colors.
pub fn colors_match(color_a: Color, color_b: Color, tolerance: f64, invert: bool) -> bool {
    (color_distance(color_a, color_b) <= tolerance) ^ invert
}

/// [`colors_match`] on packed `0xRRGGBB` values. Bits above the low 24 are
/// ignored.
pub fn compare_colors(color_1: u32, color_2: u32, tolerance: f64, invert: bool) -> bool {
    colors_match(Color::from_u32(color_1), Color::from_u32(color_2), tolerance, invert)
}
