//! Value types for recurrence patterns: weekdays, day selections, and the
//! pattern variants the describer renders.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Day of the week.
///
/// Declaration order is the Monday-first display order used by generated
/// sentences. Cron numbering (Sunday = 0) lives in [`Weekday::cron_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in display order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Capitalized prose form, as it appears in sentences.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Lowercase machine form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Cron day-of-week number: Sunday=0 through Saturday=6.
    pub fn cron_number(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Inverse of [`Weekday::cron_number`]; 7 is accepted as a Sunday alias.
    pub fn from_cron_number(n: u8) -> Option<Self> {
        match n {
            0 | 7 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    // Display-order index, Monday = 0.
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(PatternError::weekday(s)),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which days of the week are selected.
///
/// Fixed cardinality of seven. Iteration always yields days in display order
/// (Monday first) no matter the insertion order, so sentences come out stable.
/// Serializes as a list of lowercase day names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdaySelection {
    selected: [bool; 7],
}

impl WeekdaySelection {
    /// Empty selection, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.selected[day.index()] = true;
    }

    pub fn remove(&mut self, day: Weekday) {
        self.selected[day.index()] = false;
    }

    /// Flip one day, checkbox style.
    pub fn toggle(&mut self, day: Weekday) {
        self.selected[day.index()] = !self.selected[day.index()];
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.selected[day.index()]
    }

    pub fn clear(&mut self) {
        self.selected = [false; 7];
    }

    /// Number of selected days.
    pub fn len(&self) -> usize {
        self.selected.iter().filter(|on| **on).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|on| *on)
    }

    /// Selected days in display order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySelection {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut selection = Self::default();
        for day in iter {
            selection.insert(day);
        }
        selection
    }
}

#[cfg(feature = "serde")]
impl Serialize for WeekdaySelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for WeekdaySelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}

/// The three recurrence pattern tags, without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    Daily,
    Weekly,
    Monthly,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(PatternError::pattern(s)),
        }
    }
}

/// A recurrence choice and its parameters.
///
/// `time` is an "HH:MM" 24-hour string handed to the clock formatter
/// untouched; construction does not validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "pattern", rename_all = "lowercase"))]
pub enum RecurrencePattern {
    /// Runs once per day at a fixed time.
    Daily { time: String },
    /// Runs on the selected weekdays at a fixed time.
    Weekly { time: String, days: WeekdaySelection },
    /// Runs on a fixed day of the month (1-31) at a fixed time.
    Monthly { time: String, day_of_month: u8 },
}

impl RecurrencePattern {
    /// The variant tag without its parameters.
    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Daily { .. } => PatternKind::Daily,
            Self::Weekly { .. } => PatternKind::Weekly,
            Self::Monthly { .. } => PatternKind::Monthly,
        }
    }

    /// The configured "HH:MM" time.
    pub fn time(&self) -> &str {
        match self {
            Self::Daily { time } | Self::Weekly { time, .. } | Self::Monthly { time, .. } => time,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_weekday_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Weekday::Monday).unwrap(), "\"monday\"");
    }

    #[test]
    fn test_weekday_deserializes_short_form() {
        let day: Weekday = serde_json::from_str("\"wed\"").unwrap();
        assert_eq!(day, Weekday::Wednesday);
    }

    #[test]
    fn test_selection_roundtrips_as_name_list() {
        let selection: WeekdaySelection = [Weekday::Monday, Weekday::Friday].into_iter().collect();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, "[\"monday\",\"friday\"]");
        let back: WeekdaySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_pattern_tagged_json() {
        let pattern = RecurrencePattern::Weekly {
            time: "09:00".into(),
            days: [Weekday::Wednesday].into_iter().collect(),
        };
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(
            json,
            "{\"pattern\":\"weekly\",\"time\":\"09:00\",\"days\":[\"wednesday\"]}"
        );
        let back: RecurrencePattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn test_monthly_tagged_json() {
        let pattern = RecurrencePattern::Monthly {
            time: "13:30".into(),
            day_of_month: 17,
        };
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(
            json,
            "{\"pattern\":\"monthly\",\"time\":\"13:30\",\"day_of_month\":17}"
        );
    }
}
