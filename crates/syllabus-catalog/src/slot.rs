//! Time slots - the `(day, period)` pair a class meets in
//!
//! Provides [`TimeSlot`], the value type behind the single-select period
//! filter. Its wire form is `<day>-<period>` (e.g. `月-1`), the same text the
//! listing page writes into its URL fragment.

use crate::error::SlotParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One class time block
///
/// Equality is by the `(day, time)` pair. `day` is a bare token such as `月`
/// and `time` is the period number within that day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    day: String,
    time: u32,
}

impl TimeSlot {
    /// Create new time slot
    #[inline]
    #[must_use]
    pub fn new(day: impl Into<String>, time: u32) -> Self {
        Self {
            day: day.into(),
            time,
        }
    }

    /// Day token
    #[inline]
    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Period number
    #[inline]
    #[must_use]
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Check whether a record's day and period fall in this slot
    #[inline]
    #[must_use]
    pub fn contains(&self, day: &str, time: u32) -> bool {
        self.day == day && self.time == time
    }

    /// Human-readable label used by the period selector
    ///
    /// Format: `{day}曜{time}限`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}曜{}限", self.day, self.time)
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.time)
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    /// Parse the `<day>-<time>` wire form
    ///
    /// The separator is the last `-`, so the day token may itself contain
    /// dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .rsplit_once('-')
            .ok_or_else(|| SlotParseError::MissingSeparator(s.to_string()))?;

        if day.is_empty() {
            return Err(SlotParseError::EmptyDay);
        }
        if day.chars().any(char::is_whitespace) {
            return Err(SlotParseError::InvalidDay(day.to_string()));
        }
        if time.is_empty() || !time.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SlotParseError::InvalidTime(time.to_string()));
        }
        let time = time
            .parse::<u32>()
            .map_err(|_| SlotParseError::InvalidTime(time.to_string()))?;

        Ok(Self::new(day, time))
    }
}
