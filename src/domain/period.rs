/// Calendar period resolution
///
/// This module maps a calendar date to the period containing it for a given
/// frequency: the date itself for daily habits, the ISO week (Monday through
/// Sunday) for weekly habits, and the calendar month for monthly habits.
/// Periods never overlap and partition the calendar exhaustively, which is
/// what makes streak scans well-defined.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::domain::Frequency;

/// First day of the period containing `date`
///
/// Daily periods start on the date itself, weekly periods on the most recent
/// Monday, monthly periods on the first of the month.
pub fn period_start(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date,
        Frequency::Weekly => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        // day0() is the zero-based day of month, so subtracting it lands on the 1st
        Frequency::Monthly => date - Duration::days(i64::from(date.day0())),
    }
}

/// Last day of the period containing `date`
///
/// Month ends are leap-year aware (28-31 days).
pub fn period_end(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date,
        Frequency::Weekly => period_start(date, frequency) + Duration::days(6),
        Frequency::Monthly => period_start(date, frequency) + Months::new(1) - Duration::days(1),
    }
}

/// Canonical identifier for a calendar period
///
/// Two dates share a `PeriodKey` exactly when they fall in the same period
/// for the frequency in question. The key is the period's start date, so
/// keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeriodKey(NaiveDate);

impl PeriodKey {
    /// Key of the period containing `date`
    pub fn containing(date: NaiveDate, frequency: Frequency) -> Self {
        Self(period_start(date, frequency))
    }

    /// The period's start date
    pub fn start(&self) -> NaiveDate {
        self.0
    }
}

/// One calendar-aligned span produced by [`Periods`]
///
/// `end` may be clamped below the period's natural end when the scan range
/// stops mid-period (see [`Periods::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Iterate every date in the span, inclusive
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Iterator over consecutive periods from the one containing `range_start`
/// through the one containing `as_of`, in ascending order
///
/// The final span's end is clamped to `as_of` so callers never scan past the
/// reference date. The first span's start is the full period start, which may
/// precede `range_start`; completion logs hold no entries before a habit's
/// start date, so the extra days are inert during scans.
pub struct Periods {
    frequency: Frequency,
    next_start: NaiveDate,
    as_of: NaiveDate,
}

impl Periods {
    pub fn new(range_start: NaiveDate, as_of: NaiveDate, frequency: Frequency) -> Self {
        Self {
            frequency,
            next_start: period_start(range_start, frequency),
            as_of,
        }
    }
}

impl Iterator for Periods {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        if self.next_start > self.as_of {
            return None;
        }
        let start = self.next_start;
        let natural_end = period_end(start, self.frequency);
        self.next_start = natural_end + Duration::days(1);
        Some(Period {
            start,
            end: natural_end.min(self.as_of),
        })
    }
}
