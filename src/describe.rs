//! Sentence synthesis for recurrence patterns.
//!
//! Every pattern maps to exactly one English sentence through the
//! [`fmt::Display`] impl; [`RecurrencePattern::describe`] is the
//! string-returning convenience over it.

use std::fmt;

use crate::format::{ordinal, twelve_hour};
use crate::types::{RecurrencePattern, Weekday};

/// Guidance shown for a weekly pattern with no day selected.
///
/// Not a failure: callers render it exactly like any other description.
pub const NO_DAYS_MESSAGE: &str = "Please select at least one day of the week.";

impl RecurrencePattern {
    /// Produce the human-readable description of this pattern.
    ///
    /// The sentence is regenerated in full on every call, so identical
    /// patterns always describe identically.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { time } => {
                write!(f, "Runs every day at {}.", twelve_hour(time))
            }
            Self::Weekly { time, days } => {
                if days.is_empty() {
                    return f.write_str(NO_DAYS_MESSAGE);
                }
                let selected: Vec<Weekday> = days.iter().collect();
                write!(f, "Runs every week on ")?;
                write_day_list(f, &selected)?;
                write!(f, " at {}.", twelve_hour(time))
            }
            Self::Monthly { time, day_of_month } => {
                write!(
                    f,
                    "Runs every month on the {} at {}.",
                    ordinal(u32::from(*day_of_month)),
                    twelve_hour(time)
                )
            }
        }
    }
}

/// Write days as prose: "Monday", "Monday and Friday",
/// "Monday, Wednesday and Friday". No comma before the final "and".
fn write_day_list(f: &mut fmt::Formatter<'_>, days: &[Weekday]) -> fmt::Result {
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            if i + 1 == days.len() {
                f.write_str(" and ")?;
            } else {
                f.write_str(", ")?;
            }
        }
        f.write_str(day.name())?;
    }
    Ok(())
}
