use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::locale::WeekRules;

/// How weeks are delimited and numbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekScheme {
    /// ISO 8601: Monday start, week 1 contains January 4th.
    Iso,
    /// Locale-specific rules.
    Locale(WeekRules),
}

impl WeekScheme {
    /// ISO numbering when `iso` is set, otherwise the locale rules.
    pub fn new(iso: bool, rules: WeekRules) -> Self {
        if iso { Self::Iso } else { Self::Locale(rules) }
    }

    /// First weekday of a week.
    pub fn starts_on(self) -> Weekday {
        match self {
            Self::Iso => Weekday::Mon,
            Self::Locale(rules) => rules.starts_on,
        }
    }

    /// Day the week containing `d` begins on.
    pub fn week_start(self, d: NaiveDate) -> NaiveDate {
        start_of_week(d, self.starts_on())
    }

    /// Week number of `d` under this scheme.
    pub fn week_number(self, d: NaiveDate) -> u32 {
        match self {
            Self::Iso => d.iso_week().week(),
            Self::Locale(rules) => locale_week_number(d, rules),
        }
    }

    /// Two-digit week label as shown on the week ring.
    pub fn label(self, d: NaiveDate) -> String {
        format!("{:02}", self.week_number(d))
    }
}

pub(crate) fn start_of_week(d: NaiveDate, starts_on: Weekday) -> NaiveDate {
    let back = (d.weekday().num_days_from_sunday() + 7 - starts_on.num_days_from_sunday()) % 7;
    d - Duration::days(i64::from(back))
}

fn week_one_start(year: i32, rules: WeekRules) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, rules.first_week_contains_date)
        .map(|d| start_of_week(d, rules.starts_on))
}

/// Week-of-year under locale rules; the first days of January may belong to the
/// last week of the previous year and the last days of December to week 1.
pub(crate) fn locale_week_number(d: NaiveDate, rules: WeekRules) -> u32 {
    let this_week = start_of_week(d, rules.starts_on);
    for week_year in [d.year() + 1, d.year(), d.year() - 1] {
        if let Some(first) = week_one_start(week_year, rules)
            && d >= first
        {
            return ((this_week - first).num_days() / 7 + 1) as u32;
        }
    }
    1
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/week.rs"]
mod tests;
