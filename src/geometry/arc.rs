//! SVG path data for arcs around a center.
//!
//! Angles are radians in the [`crate::AngleMapper`] convention. The sweep flag follows
//! the sign of `end - start`; spans above half a turn need `large_arc` set, otherwise
//! the renderer picks the complementary short arc.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use crate::foundation::math::{Point, fmt_num, polar};

/// Spans of a full turn or more are drawn this wide: an arc whose endpoints coincide
/// renders nothing.
const MAX_SPAN: f64 = TAU - 1e-4;

/// Whether an arc from `start` to `end` must set the large-arc flag.
pub fn needs_large_arc(start: f64, end: f64) -> bool {
    (end - start).abs() > PI
}

fn clamp_span(start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.abs() >= TAU {
        start + MAX_SPAN.copysign(span)
    } else {
        end
    }
}

fn sweep_flag(start: f64, end: f64, reverse: bool) -> u8 {
    if end > start {
        1
    } else if end < start {
        0
    } else if reverse {
        0
    } else {
        1
    }
}

fn push_point(d: &mut String, p: Point) {
    let _ = write!(d, "{} {}", fmt_num(p.x), fmt_num(p.y));
}

fn push_arc_to(d: &mut String, radius: f64, large_arc: bool, sweep: u8, to: Point) {
    let r = fmt_num(radius);
    let _ = write!(d, " A {r} {r} 0 {} {sweep} ", u8::from(large_arc));
    push_point(d, to);
}

/// Single arc at a fixed radius; used as a text baseline.
pub fn thin_arc(center: Point, radius: f64, start: f64, end: f64, large_arc: bool) -> String {
    let end = clamp_span(start, end);
    let mut d = String::with_capacity(64);
    d.push_str("M ");
    push_point(&mut d, polar(center, radius, start));
    push_arc_to(
        &mut d,
        radius,
        large_arc,
        sweep_flag(start, end, false),
        polar(center, radius, end),
    );
    d
}

/// Closed ring segment: outer arc, radial line in, inner arc back, close.
///
/// `reverse` only decides the sweep of a zero-length span. `inner == outer` yields a
/// valid zero-width outline.
pub fn fat_arc(
    center: Point,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
    reverse: bool,
    large_arc: bool,
) -> String {
    let end = clamp_span(start, end);
    let sweep = sweep_flag(start, end, reverse);
    let mut d = String::with_capacity(128);
    d.push_str("M ");
    push_point(&mut d, polar(center, outer, start));
    push_arc_to(&mut d, outer, large_arc, sweep, polar(center, outer, end));
    d.push_str(" L ");
    push_point(&mut d, polar(center, inner, end));
    push_arc_to(&mut d, inner, large_arc, 1 - sweep, polar(center, inner, start));
    d.push_str(" Z");
    d
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
