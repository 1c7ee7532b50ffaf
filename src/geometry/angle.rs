use std::f64::consts::TAU;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    foundation::math::deg_to_rad,
    model::range::{DateRange, NormalizedRange, start_of_day},
};

/// Maps instants in a normalized range onto one full turn.
///
/// Position `p = (t - start) / (end - start)` is not clamped: instants outside the range
/// extrapolate linearly to angles outside one turn. A zero-length range is a caller error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleMapper {
    start: NaiveDateTime,
    span_ms: f64,
    direction: f64,
    offset: f64,
}

impl AngleMapper {
    /// Mapper for `range`, turning counterclockwise when `reverse` is set and starting
    /// `angle_offset_deg` degrees from +x.
    pub fn new(range: &NormalizedRange, reverse: bool, angle_offset_deg: f64) -> Self {
        Self {
            start: range.start,
            span_ms: range.span_ms() as f64,
            direction: if reverse { -1.0 } else { 1.0 },
            offset: deg_to_rad(angle_offset_deg),
        }
    }

    /// Fractional position of `t` within the range.
    pub fn fraction(&self, t: NaiveDateTime) -> f64 {
        (t - self.start).num_milliseconds() as f64 / self.span_ms
    }

    /// Angle in radians for `t`.
    pub fn angle_of(&self, t: NaiveDateTime) -> f64 {
        self.fraction(t) * TAU * self.direction + self.offset
    }

    /// Angle of the start of day `d`.
    pub fn angle_of_day(&self, d: NaiveDate) -> f64 {
        self.angle_of(start_of_day(d))
    }

    /// Angle of the range start.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `1.0` clockwise, `-1.0` counterclockwise.
    pub fn direction(&self) -> f64 {
        self.direction
    }
}

/// One-shot form of [`AngleMapper::angle_of`] over an unnormalized date range.
pub fn angle_of(
    t: NaiveDateTime,
    min: NaiveDate,
    max: NaiveDate,
    reverse: bool,
    angle_offset_deg: f64,
) -> f64 {
    let range = DateRange { min, max }.normalized();
    AngleMapper::new(&range, reverse, angle_offset_deg).angle_of(t)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/angle.rs"]
mod tests;
