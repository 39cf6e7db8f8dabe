/// Frequency enum for habit scheduling
///
/// This module defines how often a habit is expected to be performed.
/// The frequency drives period resolution, streak units, and the divisor
/// used when converting a habit's active range into countable periods.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// How often a habit should be performed
///
/// This is a closed set: anything other than daily, weekly, or monthly is
/// rejected at parse time rather than silently producing empty statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every single day
    Daily,
    /// Once per ISO week (Monday through Sunday)
    Weekly,
    /// Once per calendar month
    Monthly,
}

impl Frequency {
    /// All supported frequencies, in display order
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    /// Lowercase name used in the database and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Unit string attached to streak values (e.g. "3 week(s)")
    pub fn unit(&self) -> &'static str {
        match self {
            Frequency::Daily => "day(s)",
            Frequency::Weekly => "week(s)",
            Frequency::Monthly => "month(s)",
        }
    }

    /// Singular period name used for completion-rate labels (e.g. "per week")
    pub fn period_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
        }
    }

    /// Number of calendar days counted as one period when converting a
    /// habit's active range into total countable periods (months use the
    /// 30-day approximation the rate computation is defined over).
    pub fn days_per_period(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(DomainError::InvalidFrequency(format!(
                "expected daily, weekly, or monthly, got \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
