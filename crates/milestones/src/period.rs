//! Calendar periods between two dates.
//!
//! Years are counted first, then months, then days. Adding months clamps to
//! the last day of the target month, so Jan 31 plus one month is Feb 28 (or
//! Feb 29 in a leap year).

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A years/months/days difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

impl Period {
    /// Period from `start` to `end`.
    ///
    /// When `end` is before `start` the forward period from `end` to `start`
    /// is computed and every component negated.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            return Self::between(end, start).negated();
        }

        let mut years = year_diff(end, start);
        let mut anchor = plus_months(start, years * 12);
        if anchor > end {
            years -= 1;
            anchor = plus_months(start, years * 12);
        }

        let mut months = month_diff(end, anchor);
        let mut mid = plus_months(anchor, months);
        if mid > end {
            months -= 1;
            mid = plus_months(anchor, months);
        }

        Self {
            years: years as i32,
            months: months as i32,
            days: (end - mid).num_days(),
        }
    }

    pub fn negated(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year(s), {} month(s), {} day(s)",
            self.years, self.months, self.days
        )
    }
}

/// Whole years from `start` to `end` by calendar year, before any day check.
fn year_diff(end: NaiveDate, start: NaiveDate) -> u32 {
    (end.year() - start.year()).max(0) as u32
}

/// Whole months from `start` to `end` by calendar month, before any day check.
fn month_diff(end: NaiveDate, start: NaiveDate) -> u32 {
    let total = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    total.max(0) as u32
}

/// `date` plus `months`, clamped to the end of the target month.
///
/// Callers only add months that land on or before a valid `end` date's year,
/// so the result stays inside chrono's range.
fn plus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
