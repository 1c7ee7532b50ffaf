use std::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Shape};

use super::*;

const O: Point = Point::new(0.0, 0.0);

#[test]
fn thin_arc_quarter_turn() {
    let d = thin_arc(O, 10.0, 0.0, FRAC_PI_2, false);
    assert_eq!(d, "M 10.000 0.000 A 10.000 10.000 0 0 1 0.000 10.000");
}

#[test]
fn thin_arc_backwards_uses_negative_sweep() {
    let d = thin_arc(O, 10.0, FRAC_PI_2, 0.0, false);
    assert_eq!(d, "M 0.000 10.000 A 10.000 10.000 0 0 0 10.000 0.000");
}

#[test]
fn fat_arc_outline_is_closed_and_reverses_inner_arc() {
    let d = fat_arc(O, 5.0, 10.0, 0.0, FRAC_PI_2, false, false);
    assert_eq!(
        d,
        "M 10.000 0.000 A 10.000 10.000 0 0 1 0.000 10.000 L 0.000 5.000 \
         A 5.000 5.000 0 0 0 5.000 0.000 Z"
    );

    let rev = fat_arc(O, 5.0, 10.0, 0.0, -FRAC_PI_2, true, false);
    assert!(rev.contains("A 10.000 10.000 0 0 0 0.000 -10.000"));
    assert!(rev.contains("A 5.000 5.000 0 0 1 5.000 0.000"));
}

#[test]
fn large_arc_flag_is_written_when_forced() {
    let span = 1.5 * std::f64::consts::PI;
    assert!(needs_large_arc(0.0, span));
    assert!(!needs_large_arc(0.0, 1.0));
    let d = fat_arc(O, 5.0, 10.0, 0.0, span, false, needs_large_arc(0.0, span));
    assert!(d.contains("A 10.000 10.000 0 1 1"));
    assert!(d.contains("A 5.000 5.000 0 1 0"));

    // Three quarters of a circle reaches up to y = -10 only via the large arc.
    let bbox = BezPath::from_svg(&d).unwrap().bounding_box();
    assert!(bbox.y0 < -9.9);
}

#[test]
fn zero_width_and_zero_span_paths_still_parse() {
    let d = fat_arc(O, 7.0, 7.0, 0.3, 1.2, false, false);
    BezPath::from_svg(&d).unwrap();

    let fwd = fat_arc(O, 5.0, 10.0, 1.0, 1.0, false, false);
    let rev = fat_arc(O, 5.0, 10.0, 1.0, 1.0, true, false);
    assert!(fwd.contains(" 0 0 1 "));
    assert!(rev.contains(" 0 0 0 "));
    BezPath::from_svg(&fwd).unwrap();
}

#[test]
fn full_turn_stays_renderable() {
    let d = fat_arc(O, 0.0, 10.0, 0.0, TAU, false, true);
    let bbox = BezPath::from_svg(&d).unwrap().bounding_box();
    assert!(bbox.width() > 19.9 && bbox.height() > 19.9);
}

#[test]
fn output_is_deterministic() {
    let center = Point::new(500.0, 500.0);
    let a = fat_arc(center, 230.0, 450.0, -1.234_567, 0.987_654, false, false);
    let b = fat_arc(center, 230.0, 450.0, -1.234_567, 0.987_654, false, false);
    assert_eq!(a, b);
    assert!(!a.contains("-0.000"));
}
