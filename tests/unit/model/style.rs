use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_style_for_1000() {
    let s = WheelStyleConfig::for_size(1000.0);
    assert!(close(s.month_outer_radius, 450.0));
    assert!(close(s.month_inner_radius, 230.0));
    assert!(close(s.week_inner_radius, 450.0));
    assert!(close(s.week_outer_radius, 465.0));
    assert!(close(s.lane_width, 20.0));
    assert!(close(s.lane_gap, 7.0));
    assert!(close(s.date_inner_radius, 235.0));
    assert!(close(s.date_outer_radius, 445.0));
    assert!(close(s.event_inner_radius, 420.0));
    assert_eq!(s.angle_offset_deg, -90.0);
    assert_eq!(s.past_color.as_deref(), Some("#666666"));
    assert!(s.future_color.is_none());
    assert_eq!(s, WheelStyleConfig::default());
    s.validate().unwrap();
}

#[test]
fn bands_and_extents() {
    let s = WheelStyleConfig::default();
    assert!(s.month_band().is_visible());
    assert!(close(s.week_band().mid(), 457.5));
    assert!(close(s.outer_extent(), 465.0));
    assert!(close(s.inner_extent(), 230.0));

    let mut hidden = s.clone();
    hidden.month_inner_radius = hidden.month_outer_radius;
    hidden.week_inner_radius = hidden.week_outer_radius;
    hidden.date_inner_radius = hidden.date_outer_radius;
    hidden.lane_width = 0.0;
    assert!(!hidden.any_ring_visible());
}

#[test]
fn serde_uses_camel_case_keys() {
    let v = serde_json::to_value(WheelStyleConfig::default()).unwrap();
    assert!(close(v["eventInnerRadius"].as_f64().unwrap(), 420.0));
    assert_eq!(v["alignWheelToToday"], false);
    assert!(v["futureColor"].is_null());
}

#[test]
fn validation_rejects_bad_values() {
    let mut s = WheelStyleConfig::default();
    s.past_color_opacity = 1.5;
    assert!(s.validate().is_err());

    let mut s = WheelStyleConfig::default();
    s.lane_width = f64::NAN;
    assert!(s.validate().is_err());

    let mut s = WheelStyleConfig::default();
    s.future_color = Some("red".to_string());
    assert!(s.validate().is_err());
}
