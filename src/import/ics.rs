//! iCalendar (`.ics`) event import.

use chrono::NaiveDateTime;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::debug;

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    model::{
        event::{CalendarEvent, new_uid, sort_events},
        range::{DateRange, start_of_day},
    },
};

/// Parse the VEVENTs of `text` that lie fully inside `range`.
///
/// Imported events land on lane 1 with no category. Times with a zone or in UTC are
/// read as local wall-clock time. A VEVENT without `DTEND` ends where it starts.
pub fn parse_ics(text: &str, range: &DateRange) -> CalwheelResult<Vec<CalendarEvent>> {
    let unfolded = unfold(text);
    let calendar = read_calendar(&unfolded)
        .map_err(|e| CalwheelError::import(format!("parse calendar: {e}")))?;
    let bounds = range.normalized();

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for vevent in calendar.components.iter().filter(|c| c.name == "VEVENT") {
        let event = to_event(vevent)?;
        if event.start >= bounds.start && event.end <= bounds.end {
            events.push(event);
        } else {
            skipped += 1;
        }
    }
    debug!(imported = events.len(), skipped, "ics parsed");
    Ok(events)
}

/// Add `imported` to `events`, skipping uids already present, and re-sort.
///
/// Returns the number of events added.
pub fn merge_events(events: &mut Vec<CalendarEvent>, imported: Vec<CalendarEvent>) -> usize {
    let before = events.len();
    for event in imported {
        if !events.iter().any(|e| e.uid == event.uid) {
            events.push(event);
        }
    }
    sort_events(events);
    events.len() - before
}

fn to_event(vevent: &Component<'_>) -> CalwheelResult<CalendarEvent> {
    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .filter(|uid| !uid.trim().is_empty())
        .unwrap_or_else(new_uid);
    let subject = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    let start = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| CalwheelError::import(format!("event '{uid}' has no DTSTART")))
        .and_then(|p| local_time(&uid, "DTSTART", DatePerhapsTime::try_from(p).ok()))?;
    let end = match vevent.find_prop("DTEND") {
        Some(p) => local_time(&uid, "DTEND", DatePerhapsTime::try_from(p).ok())?,
        None => start,
    };

    Ok(CalendarEvent {
        uid,
        start,
        end,
        subject,
        lane: 1,
        category_id: String::new(),
    })
}

fn local_time(
    uid: &str,
    prop: &str,
    value: Option<DatePerhapsTime>,
) -> CalwheelResult<NaiveDateTime> {
    let value = value
        .ok_or_else(|| CalwheelError::import(format!("event '{uid}' has an invalid {prop}")))?;
    Ok(match value {
        DatePerhapsTime::Date(d) => start_of_day(d),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => naive,
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => dt.naive_utc(),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => date_time,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/import/ics.rs"]
mod tests;
