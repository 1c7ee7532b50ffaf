use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    model::{event::CalendarEvent, range::start_of_day},
};

/// The bundled sample events, anchored to `year`.
pub fn example_events(year: i32) -> CalwheelResult<Vec<CalendarEvent>> {
    let day = |month: u32, day: u32| -> CalwheelResult<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(start_of_day)
            .ok_or_else(|| CalwheelError::validation(format!("year {year} is out of range")))
    };

    let rows = [
        ("hny", "New year party", (1, 1), (1, 3), 1, "winter"),
        ("sakura", "Sakura \u{1F338}", (3, 13), (3, 20), 1, "spring"),
        ("summer", "Summer \u{1F3D6}", (6, 1), (7, 1), 1, "summer"),
        ("june-solstice", "June solstice", (6, 20), (6, 23), 2, "summer"),
        ("december-solstice", "December solstice", (12, 21), (12, 23), 2, "winter"),
        ("oktoberfest", "Oktoberfest", (9, 22), (10, 22), 1, "fall"),
        ("st-nicholas", "St. Nicholas Day", (12, 6), (12, 9), 1, "winter"),
    ];

    rows.into_iter()
        .map(|(uid, subject, (sm, sd), (em, ed), lane, category)| {
            Ok(CalendarEvent {
                uid: uid.to_string(),
                start: day(sm, sd)?,
                end: day(em, ed)?,
                subject: subject.to_string(),
                lane,
                category_id: category.to_string(),
            })
        })
        .collect()
}
