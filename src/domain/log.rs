/// Completion log for tracking per-date habit status
///
/// This module defines the CompletionLog map from calendar date to completion
/// flag. A date absent from the map counts as not completed; gap-filling
/// materializes those absences as explicit `false` entries so streak scans
/// never have to distinguish "unknown" from "missed".

use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mapping from calendar date to completion status
///
/// Keys are typed dates rather than strings, so ordering is structural and
/// iteration is always chronological. Serializes as a JSON object keyed by
/// ISO 8601 dates, which is the wire/storage format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog {
    entries: BTreeMap<NaiveDate, bool>,
}

impl CompletionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `date` is marked complete
    ///
    /// Absent dates and explicit `false` entries both count as incomplete.
    pub fn is_complete(&self, date: NaiveDate) -> bool {
        self.entries.get(&date).copied().unwrap_or(false)
    }

    /// Whether `date` has any entry at all, complete or not
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Set the status for a date, overwriting any existing entry
    pub fn mark(&mut self, date: NaiveDate, completed: bool) {
        self.entries.insert(date, completed);
    }

    /// Copy of this log with every date in `[start, end]` present
    ///
    /// Absent dates default to `false`; existing entries are never
    /// overwritten. Applying this twice over the same range yields the same
    /// log as applying it once.
    pub fn fill_gaps(&self, start: NaiveDate, end: NaiveDate) -> CompletionLog {
        let mut filled = self.clone();
        for date in start.iter_days().take_while(|d| *d <= end) {
            filled.entries.entry(date).or_insert(false);
        }
        filled
    }

    /// Number of completed entries
    pub fn completions(&self) -> u32 {
        self.entries.values().filter(|done| **done).count() as u32
    }

    /// Whether any date is marked complete
    pub fn any_completed(&self) -> bool {
        self.entries.values().any(|done| *done)
    }

    /// Number of logged dates, complete or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, bool)> + '_ {
        self.entries.iter().map(|(date, done)| (*date, *done))
    }

    /// Iterate completed dates in ascending order
    pub fn completed_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries
            .iter()
            .filter(|(_, done)| **done)
            .map(|(date, _)| *date)
    }
}

impl FromIterator<(NaiveDate, bool)> for CompletionLog {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
