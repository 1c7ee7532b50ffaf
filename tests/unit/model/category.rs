use chrono::NaiveDate;

use super::*;

fn event_in(category_id: &str) -> CalendarEvent {
    let t = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    CalendarEvent {
        uid: "e".to_string(),
        start: t,
        end: t,
        subject: String::new(),
        lane: 1,
        category_id: category_id.to_string(),
    }
}

#[test]
fn resolves_known_category_colors() {
    let cats = default_categories();
    let colors = resolve_colors(&cats, &event_in("spring"));
    assert_eq!(colors.fill, "#90ee90");
    assert_eq!(colors.font, "#000000");
}

#[test]
fn dangling_reference_falls_back_to_defaults() {
    let cats = default_categories();
    let colors = resolve_colors(&cats, &event_in("deleted"));
    assert_eq!(colors.fill, DEFAULT_EVENT_FILL);
    assert_eq!(colors.font, DEFAULT_EVENT_FONT);

    let colors = resolve_colors(&[], &event_in("winter"));
    assert_eq!(colors.fill, "#f5f6fa");
}

#[test]
fn empty_color_strings_fall_back_too() {
    let cats = vec![Category {
        id: "x".to_string(),
        name: "X".to_string(),
        color: String::new(),
        font_color: "#123456".to_string(),
    }];
    let colors = resolve_colors(&cats, &event_in("x"));
    assert_eq!(colors.fill, DEFAULT_EVENT_FILL);
    assert_eq!(colors.font, "#123456");
}

#[test]
fn new_and_remove_category() {
    let mut cats = default_categories();
    let id = new_category(&mut cats);
    assert_eq!(cats.len(), 5);
    assert_eq!(find_category(&cats, &id).unwrap().color, "#ffffff");
    assert!(remove_category(&mut cats, &id));
    assert!(!remove_category(&mut cats, &id));
}

#[test]
fn hex_color_validation() {
    assert!(is_hex_color("#fff"));
    assert!(is_hex_color("#A0b1C2"));
    assert!(!is_hex_color("fff"));
    assert!(!is_hex_color("#ffff"));
    assert!(!is_hex_color("#ggg"));

    validate_categories(&default_categories()).unwrap();
    let mut bad = default_categories();
    bad[0].color = "blue".to_string();
    assert!(validate_categories(&bad).is_err());
    let mut dup = default_categories();
    dup[1].id = "winter".to_string();
    assert!(validate_categories(&dup).is_err());
}
