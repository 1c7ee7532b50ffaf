use chrono::NaiveDate;

use super::*;

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn ev(uid: &str, start: NaiveDateTime, subject: &str) -> CalendarEvent {
    CalendarEvent {
        uid: uid.to_string(),
        start,
        end: start,
        subject: subject.to_string(),
        lane: 1,
        category_id: String::new(),
    }
}

#[test]
fn deserializes_plain_dates_and_datetimes() {
    let json = r#"{"uid":"a","start":"2026-03-13","end":"2026-03-20T12:30:00.000Z","subject":"s","lane":2,"categoryId":"spring"}"#;
    let e: CalendarEvent = serde_json::from_str(json).unwrap();
    assert_eq!(e.start, at(2026, 3, 13));
    assert_eq!(e.end.to_string(), "2026-03-20 12:30:00");
    assert_eq!(e.lane, 2);
    assert_eq!(e.category_id, "spring");

    let back = serde_json::to_value(&e).unwrap();
    assert_eq!(back["start"], "2026-03-13T00:00:00");
    assert_eq!(back["categoryId"], "spring");
}

#[test]
fn rejects_garbage_dates() {
    let json = r#"{"uid":"a","start":"soon","end":"2026-01-01","subject":"","lane":1,"categoryId":""}"#;
    assert!(serde_json::from_str::<CalendarEvent>(json).is_err());
}

#[test]
fn sort_orders_by_start_then_end_then_subject() {
    let mut events = vec![
        ev("c", at(2026, 5, 1), "b"),
        ev("a", at(2026, 1, 1), "z"),
        ev("b", at(2026, 5, 1), "a"),
    ];
    sort_events(&mut events);
    let order: Vec<_> = events.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn copy_creates_new_uid_with_same_fields() {
    let mut events = vec![ev("a", at(2026, 1, 1), "party")];
    let new_uid = copy_event(&mut events, "a").unwrap();
    assert_ne!(new_uid, "a");
    assert_eq!(events.len(), 2);
    let copy = events.iter().find(|e| e.uid == new_uid).unwrap();
    assert_eq!(copy.subject, "party");
    assert_eq!(copy.start, at(2026, 1, 1));

    assert!(copy_event(&mut events, "missing").is_none());
}

#[test]
fn new_event_uses_first_category() {
    let cats = crate::model::category::default_categories();
    let e = new_event(at(2026, 2, 2), &cats);
    assert_eq!(e.category_id, "winter");
    assert_eq!(e.lane, 1);
    assert!(!e.uid.is_empty());

    let e = new_event(at(2026, 2, 2), &[]);
    assert_eq!(e.category_id, "");
}

#[test]
fn remove_reports_whether_anything_matched() {
    let mut events = vec![ev("a", at(2026, 1, 1), "")];
    assert!(!remove_event(&mut events, "b"));
    assert!(remove_event(&mut events, "a"));
    assert!(events.is_empty());
}

#[test]
fn validation_catches_bad_events() {
    let good = vec![ev("a", at(2026, 1, 1), ""), ev("b", at(2026, 1, 2), "")];
    validate_events(&good).unwrap();

    let dup = vec![ev("a", at(2026, 1, 1), ""), ev("a", at(2026, 1, 2), "")];
    assert!(validate_events(&dup).is_err());

    let mut lane0 = ev("a", at(2026, 1, 1), "");
    lane0.lane = 0;
    assert!(validate_events(&[lane0]).is_err());

    let mut backwards = ev("a", at(2026, 1, 2), "");
    backwards.end = at(2026, 1, 1);
    assert!(validate_events(&[backwards]).is_err());
}
