//! cronspeak: cron schedules in plain English.
//!
//! Two small, pure utilities: splitting a cron expression into its six named
//! fields, and describing a daily/weekly/monthly recurrence pattern as an
//! English sentence. Nothing here validates or evaluates schedules; both
//! operations are total and signal bad input through sentinel values.
//!
//! # Examples
//!
//! ```
//! use cronspeak::{CronFields, RecurrencePattern, Weekday};
//!
//! let fields = CronFields::parse("0 */5 * * * *");
//! assert_eq!(fields.minutes, "*/5");
//!
//! let pattern = RecurrencePattern::Weekly {
//!     time: "09:00".into(),
//!     days: [Weekday::Monday, Weekday::Friday].into_iter().collect(),
//! };
//! assert_eq!(
//!     pattern.describe(),
//!     "Runs every week on Monday and Friday at 09:00 AM."
//! );
//! ```

pub mod cron;
pub mod describe;
pub mod error;
pub mod format;
pub mod types;

pub use cron::CronFields;
pub use describe::NO_DAYS_MESSAGE;
pub use error::PatternError;
pub use types::{PatternKind, RecurrencePattern, Weekday, WeekdaySelection};
