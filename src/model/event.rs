use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    model::category::Category,
};

/// A user-defined event drawn as an arc in the event ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique within the active event set.
    pub uid: String,
    /// Local wall-clock start.
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    /// Local wall-clock end.
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    /// Label text.
    pub subject: String,
    /// Radial stacking position, 1 is the outermost lane.
    pub lane: u32,
    /// Key into the category list; may dangle.
    pub category_id: String,
}

/// Generate a fresh event or category identifier.
pub(crate) fn new_uid() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Display ordering used by editors: start, then end, then subject.
pub fn sort_events(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.end.cmp(&b.end))
            .then_with(|| a.subject.cmp(&b.subject))
    });
}

/// Blank event at `at` in lane 1, assigned to the first category if there is one.
pub fn new_event(at: NaiveDateTime, categories: &[Category]) -> CalendarEvent {
    CalendarEvent {
        uid: new_uid(),
        start: at,
        end: at,
        subject: String::new(),
        lane: 1,
        category_id: categories
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_default(),
    }
}

/// Duplicate the event with `uid` under a fresh uid and keep the list sorted.
///
/// Returns the new uid, or `None` if no event matched.
pub fn copy_event(events: &mut Vec<CalendarEvent>, uid: &str) -> Option<String> {
    let mut copy = events.iter().find(|e| e.uid == uid)?.clone();
    copy.uid = new_uid();
    let new_id = copy.uid.clone();
    events.push(copy);
    sort_events(events);
    Some(new_id)
}

/// Remove the event with `uid`; returns whether anything was removed.
pub fn remove_event(events: &mut Vec<CalendarEvent>, uid: &str) -> bool {
    let before = events.len();
    events.retain(|e| e.uid != uid);
    events.len() != before
}

pub(crate) fn validate_events(events: &[CalendarEvent]) -> CalwheelResult<()> {
    let mut seen = HashSet::new();
    for event in events {
        if event.uid.trim().is_empty() {
            return Err(CalwheelError::validation("event uid must be non-empty"));
        }
        if !seen.insert(event.uid.as_str()) {
            return Err(CalwheelError::validation(format!(
                "duplicate event uid '{}'",
                event.uid
            )));
        }
        if event.lane == 0 {
            return Err(CalwheelError::validation(format!(
                "event '{}' lane must be >= 1",
                event.uid
            )));
        }
        if event.end < event.start {
            return Err(CalwheelError::validation(format!(
                "event '{}' ends before it starts",
                event.uid
            )));
        }
    }
    Ok(())
}

/// Serde adapter for local date-times.
///
/// Accepts `YYYY-MM-DD` (start of day) as well as `YYYY-MM-DDTHH:MM[:SS[.fff]]`, with an
/// optional trailing `Z` which is ignored. Always writes `YYYY-MM-DDTHH:MM:SS`.
pub mod local_datetime {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Write `v` as `YYYY-MM-DDTHH:MM:SS`.
    pub fn serialize<S: Serializer>(v: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&v.format(WRITE_FORMAT))
    }

    /// Read any accepted form.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Parse a date or date-time string without going through serde.
    pub fn parse(raw: &str) -> Result<NaiveDateTime, String> {
        let s = raw.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt);
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN))
            .map_err(|_| {
                format!("invalid date '{raw}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/event.rs"]
mod tests;
