use std::f64::consts::TAU;

pub use kurbo::{Point, Vec2};

/// Fractional digits used for every number written into SVG output.
pub const DEFAULT_FRACTION_DIGITS: usize = 3;

/// Format a coordinate with [`DEFAULT_FRACTION_DIGITS`] fixed digits.
///
/// Output is deterministic for a given input; `-0.000` is written as `0.000`.
pub fn fmt_num(v: f64) -> String {
    fmt_fixed(v, DEFAULT_FRACTION_DIGITS)
}

pub(crate) fn fmt_fixed(v: f64, digits: usize) -> String {
    let s = format!("{v:.digits$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Point at `angle` radians on a circle of `radius` around `center`.
///
/// Angle zero points along +x and grows towards +y (clockwise on screen).
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg / 360.0 * TAU
}

pub(crate) fn rad_to_deg(rad: f64) -> f64 {
    rad / TAU * 360.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
