use super::*;

#[test]
fn fmt_num_uses_fixed_digits() {
    assert_eq!(fmt_num(1.0), "1.000");
    assert_eq!(fmt_num(-12.34567), "-12.346");
    assert_eq!(fmt_num(0.0005), "0.001");
}

#[test]
fn fmt_num_drops_negative_zero() {
    assert_eq!(fmt_num(-0.0), "0.000");
    assert_eq!(fmt_num(-0.0001), "0.000");
    assert_eq!(fmt_fixed(-0.04, 1), "0.0");
}

#[test]
fn polar_follows_screen_orientation() {
    let c = Point::new(10.0, 20.0);
    let p = polar(c, 5.0, 0.0);
    assert!((p.x - 15.0).abs() < 1e-12 && (p.y - 20.0).abs() < 1e-12);

    let p = polar(c, 5.0, std::f64::consts::FRAC_PI_2);
    assert!((p.x - 10.0).abs() < 1e-12 && (p.y - 25.0).abs() < 1e-12);
}

#[test]
fn degree_conversions_are_inverse() {
    for d in [-90.0, 0.0, 1.0, 45.0, 360.0] {
        assert!((rad_to_deg(deg_to_rad(d)) - d).abs() < 1e-9);
    }
}
