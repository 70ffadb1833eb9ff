use std::fmt;

/// All errors produced by cronspeak.
///
/// The core operations never fail: field splitting and description both
/// signal degenerate input through sentinel values. Only the name-lookup
/// seams, where free-form text becomes a typed value, can error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    /// A weekday name that is neither a full name nor a three-letter form.
    UnknownWeekday { name: String },

    /// A pattern kind other than daily, weekly, or monthly.
    UnknownPattern { name: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWeekday { name } => write!(f, "unknown weekday '{name}'"),
            Self::UnknownPattern { name } => {
                write!(f, "unknown pattern '{name}' (expected daily, weekly, or monthly)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl PatternError {
    pub fn weekday(name: impl Into<String>) -> Self {
        Self::UnknownWeekday { name: name.into() }
    }

    pub fn pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_message() {
        let err = PatternError::weekday("blorp");
        assert_eq!(err.to_string(), "unknown weekday 'blorp'");
    }

    #[test]
    fn test_pattern_message() {
        let err = PatternError::pattern("yearly");
        assert_eq!(
            err.to_string(),
            "unknown pattern 'yearly' (expected daily, weekly, or monthly)"
        );
    }
}
