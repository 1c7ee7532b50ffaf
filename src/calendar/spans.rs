//! Finite partitions of a normalized date range into days, weeks and months.
//!
//! Each iterator is `Clone`, so a partition can be walked more than once.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::{
    calendar::week::WeekScheme,
    model::range::{NormalizedRange, end_of_day, start_of_day},
};

/// A sub-range of the wheel's range, clipped to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateSpan {
    /// Inclusive start.
    pub start: NaiveDateTime,
    /// Inclusive end.
    pub end: NaiveDateTime,
}

impl DateSpan {
    fn clipped(range: &NormalizedRange, first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: range.start.max(start_of_day(first)),
            end: range.end.min(end_of_day(last)),
        }
    }

    /// Calendar day the span starts on.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Every calendar day touched by the range.
#[derive(Clone, Debug)]
pub struct DayIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl DayIter {
    /// Days from the range's first day through its last.
    pub fn new(range: &NormalizedRange) -> Self {
        Self {
            next: Some(range.first_day()),
            last: range.last_day(),
        }
    }
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let d = self.next.filter(|d| *d <= self.last)?;
        self.next = d.succ_opt();
        Some(d)
    }
}

/// Calendar months, the first and last clipped to the range.
#[derive(Clone, Debug)]
pub struct MonthSpans {
    range: NormalizedRange,
    month_start: Option<NaiveDate>,
}

impl MonthSpans {
    /// Months touched by `range`.
    pub fn new(range: &NormalizedRange) -> Self {
        Self {
            range: *range,
            month_start: range.first_day().with_day(1),
        }
    }
}

fn first_of_next_month(d: NaiveDate) -> Option<NaiveDate> {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    }
}

impl Iterator for MonthSpans {
    type Item = DateSpan;

    fn next(&mut self) -> Option<DateSpan> {
        let first = self.month_start.filter(|d| *d <= self.range.last_day())?;
        let next_first = first_of_next_month(first);
        let last = next_first
            .and_then(|n| n.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        self.month_start = next_first;
        Some(DateSpan::clipped(&self.range, first, last))
    }
}

/// Weeks under a [`WeekScheme`], the first and last clipped to the range.
#[derive(Clone, Debug)]
pub struct WeekSpans {
    range: NormalizedRange,
    scheme: WeekScheme,
    cursor: Option<NaiveDate>,
}

impl WeekSpans {
    /// Weeks under `scheme`, the first and last clipped to the range.
    pub fn new(range: &NormalizedRange, scheme: WeekScheme) -> Self {
        Self {
            range: *range,
            scheme,
            cursor: Some(range.first_day()),
        }
    }
}

impl Iterator for WeekSpans {
    type Item = DateSpan;

    fn next(&mut self) -> Option<DateSpan> {
        let cursor = self.cursor.filter(|d| *d <= self.range.last_day())?;
        let first = self.scheme.week_start(cursor);
        let last = first + Duration::days(6);
        self.cursor = last.succ_opt();
        Some(DateSpan::clipped(&self.range, first, last))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/spans.rs"]
mod tests;
