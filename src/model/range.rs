use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::foundation::error::{CalwheelError, CalwheelResult};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// First instant of a calendar day.
pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// Last millisecond of a calendar day (`23:59:59.999`).
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    start_of_day(d) + Duration::milliseconds(DAY_MS - 1)
}

/// Inclusive calendar date range rendered onto one full turn of the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    /// First day shown.
    pub min: NaiveDate,
    /// Last day shown (inclusive).
    pub max: NaiveDate,
}

impl DateRange {
    /// Validated range; fails when `min` is after `max`.
    pub fn new(min: NaiveDate, max: NaiveDate) -> CalwheelResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// January 1st through December 31st of `year`.
    pub fn year(year: i32) -> CalwheelResult<Self> {
        let min = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| CalwheelError::validation(format!("year {year} is out of range")))?;
        let max = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| CalwheelError::validation(format!("year {year} is out of range")))?;
        Self::new(min, max)
    }

    /// Reject ranges whose first day is after the last.
    pub fn validate(&self) -> CalwheelResult<()> {
        if self.max < self.min {
            return Err(CalwheelError::validation(format!(
                "date range max {} must not precede min {}",
                self.max, self.min
            )));
        }
        Ok(())
    }

    /// Expand to `[start of min, end of max]`.
    pub fn normalized(&self) -> NormalizedRange {
        NormalizedRange {
            start: start_of_day(self.min),
            end: end_of_day(self.max),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            min: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            max: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default(),
        }
    }
}

/// A date range expanded to day boundaries, ready for angle mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedRange {
    /// `00:00` of the first day.
    pub start: NaiveDateTime,
    /// `23:59:59.999` of the last day.
    pub end: NaiveDateTime,
}

impl NormalizedRange {
    /// Whether `t` lies in the range, both ends included.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Day of `start`.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Day of `end`.
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Length in milliseconds; zero only for a degenerate range.
    pub fn span_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/range.rs"]
mod tests;
