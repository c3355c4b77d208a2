//! Unit conversion utilities.
//!
//! WordprocessingML stores paragraph spacing and indentation in twentieths of
//! a point (twips), font sizes in half-points and auto line spacing in 240ths
//! of a line.

pub const TWIPS_PER_PT: f64 = 20.0;
pub const HALF_POINTS_PER_PT: f64 = 2.0;
pub const LINE_SPACING_UNITS_PER_LINE: f64 = 240.0;

#[inline]
pub fn pt_to_twips(pt: f64) -> i64 {
    (pt * TWIPS_PER_PT).round() as i64
}

#[inline]
pub fn twips_to_pt(twips: i64) -> f64 {
    twips as f64 / TWIPS_PER_PT
}

#[inline]
pub fn pt_to_half_points(pt: f64) -> u32 {
    (pt * HALF_POINTS_PER_PT).round().max(0.0) as u32
}

#[inline]
pub fn half_points_to_pt(half_points: u32) -> f64 {
    half_points as f64 / HALF_POINTS_PER_PT
}

/// Convert a line-spacing multiplier (1.0 = single) to `w:line` units.
#[inline]
pub fn multiple_to_line_units(multiple: f64) -> i64 {
    (multiple * LINE_SPACING_UNITS_PER_LINE).round() as i64
}

#[inline]
pub fn line_units_to_multiple(units: i64) -> f64 {
    units as f64 / LINE_SPACING_UNITS_PER_LINE
}
