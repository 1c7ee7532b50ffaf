use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::model::range::end_of_day;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_mapper(reverse: bool, offset_deg: f64) -> (NormalizedRange, AngleMapper) {
    let r = DateRange::year(2026).unwrap().normalized();
    (r, AngleMapper::new(&r, reverse, offset_deg))
}

#[test]
fn full_range_closes_exactly() {
    let (r, m) = year_mapper(false, -90.0);
    assert_eq!(m.angle_of(r.start), -FRAC_PI_2);
    assert_eq!(m.angle_of(r.end), -FRAC_PI_2 + TAU);

    let (r, m) = year_mapper(true, -90.0);
    assert_eq!(m.angle_of(r.start), -FRAC_PI_2);
    assert_eq!(m.angle_of(r.end), -FRAC_PI_2 - TAU);
}

#[test]
fn angles_are_monotonic_and_flip_with_reverse() {
    let (_, fwd) = year_mapper(false, 0.0);
    let (_, rev) = year_mapper(true, 0.0);
    let days: Vec<_> = [(1, 1), (2, 14), (6, 30), (12, 31)]
        .into_iter()
        .map(|(m, d)| ymd(2026, m, d))
        .collect();
    for pair in days.windows(2) {
        assert!(fwd.angle_of_day(pair[0]) < fwd.angle_of_day(pair[1]));
        assert!(rev.angle_of_day(pair[0]) > rev.angle_of_day(pair[1]));
    }
}

#[test]
fn outside_range_extrapolates() {
    let (_, m) = year_mapper(false, 0.0);
    assert!(m.angle_of_day(ymd(2025, 12, 1)) < 0.0);
    assert!(m.angle_of_day(ymd(2027, 2, 1)) > TAU);
}

#[test]
fn midpoint_is_half_turn() {
    let r = DateRange::new(ymd(2026, 1, 1), ymd(2026, 1, 2))
        .unwrap()
        .normalized();
    let m = AngleMapper::new(&r, false, 0.0);
    let mid = r.start + (r.end - r.start) / 2;
    assert!((m.angle_of(mid) - PI).abs() < 1e-6);
}

#[test]
fn one_shot_matches_mapper() {
    let (_, m) = year_mapper(true, 30.0);
    let t = end_of_day(ymd(2026, 4, 1));
    assert_eq!(angle_of(t, ymd(2026, 1, 1), ymd(2026, 12, 31), true, 30.0), m.angle_of(t));
    assert_eq!(m.direction(), -1.0);
    assert!((m.offset() - deg_to_rad(30.0)).abs() < 1e-15);
}
