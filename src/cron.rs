//! Cron expression field splitting.
//!
//! A cron expression names up to six positions: seconds, minutes, hours,
//! day of month, month, day of week. The splitter is purely lexical. Tokens
//! pass through verbatim and nothing checks whether `99` is a legal second;
//! validation belongs to whatever consumes the fields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six positional fields of a cron expression.
///
/// Either all six fields are populated (the input held five or six
/// whitespace-separated tokens, with seconds defaulted to `"0"` in the
/// five-token form) or all six are empty, the reset state that doubles as
/// the invalid-input signal. Mixed states are never produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CronFields {
    pub seconds: String,
    pub minutes: String,
    pub hours: String,
    pub days: String,
    pub month: String,
    pub day_of_week: String,
}

impl CronFields {
    /// Split a cron expression into its six fields. See [`parse`].
    pub fn parse(expression: &str) -> Self {
        parse(expression)
    }

    /// True for the all-empty reset state (blank or unsplittable input).
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
            && self.minutes.is_empty()
            && self.hours.is_empty()
            && self.days.is_empty()
            && self.month.is_empty()
            && self.day_of_week.is_empty()
    }
}

/// Split a cron expression into named fields.
///
/// Accepts the 6-field form (`seconds minutes hours days month day-of-week`)
/// and the 5-field form without seconds; in the latter, seconds is forced to
/// `"0"`. Blank input and any other token count return the all-empty
/// [`CronFields`]: the record itself is the failure signal, no error is
/// raised. Tokens split on runs of whitespace and are never inspected.
pub fn parse(expression: &str) -> CronFields {
    let tokens: Vec<&str> = expression.split_whitespace().collect();

    match tokens.as_slice() {
        [seconds, minutes, hours, days, month, day_of_week] => CronFields {
            seconds: (*seconds).to_string(),
            minutes: (*minutes).to_string(),
            hours: (*hours).to_string(),
            days: (*days).to_string(),
            month: (*month).to_string(),
            day_of_week: (*day_of_week).to_string(),
        },
        [minutes, hours, days, month, day_of_week] => CronFields {
            seconds: "0".to_string(),
            minutes: (*minutes).to_string(),
            hours: (*hours).to_string(),
            days: (*days).to_string(),
            month: (*month).to_string(),
            day_of_week: (*day_of_week).to_string(),
        },
        _ => CronFields::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_fields() {
        let f = parse("0 */5 * * * *");
        assert_eq!(f.seconds, "0");
        assert_eq!(f.minutes, "*/5");
        assert_eq!(f.hours, "*");
        assert_eq!(f.days, "*");
        assert_eq!(f.month, "*");
        assert_eq!(f.day_of_week, "*");
    }

    #[test]
    fn test_five_fields_default_seconds() {
        let f = parse("*/5 * * * *");
        assert_eq!(f.seconds, "0");
        assert_eq!(f.minutes, "*/5");
        assert_eq!(f.day_of_week, "*");
    }

    #[test]
    fn test_empty_input_resets() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_whitespace_only_resets() {
        assert!(parse(" \t \n ").is_empty());
    }

    #[test]
    fn test_too_few_fields_reset() {
        assert!(parse("*").is_empty());
        assert!(parse("1 2 3 4").is_empty());
    }

    #[test]
    fn test_too_many_fields_reset() {
        assert!(parse("0 1 2 3 4 5 6").is_empty());
    }

    #[test]
    fn test_runs_of_whitespace_split() {
        let f = parse("  0\t*/10   8-17 * *\t\tMON-FRI ");
        assert_eq!(f.seconds, "0");
        assert_eq!(f.minutes, "*/10");
        assert_eq!(f.hours, "8-17");
        assert_eq!(f.day_of_week, "MON-FRI");
    }

    #[test]
    fn test_tokens_pass_through_verbatim() {
        // No range or syntax checks: nonsense tokens survive untouched.
        let f = parse("99 banana *** ?! 13 8");
        assert_eq!(f.seconds, "99");
        assert_eq!(f.minutes, "banana");
        assert_eq!(f.hours, "***");
        assert_eq!(f.days, "?!");
        assert_eq!(f.month, "13");
        assert_eq!(f.day_of_week, "8");
    }

    #[test]
    fn test_default_is_reset_state() {
        assert!(CronFields::default().is_empty());
    }

    #[test]
    fn test_parse_on_type_delegates() {
        assert_eq!(CronFields::parse("0 9 * * 1-5").hours, "9");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fields_serialize() {
        let f = parse("0 */5 * * * *");
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"minutes\":\"*/5\""));
        assert!(json.contains("\"day_of_week\":\"*\""));
    }
}
