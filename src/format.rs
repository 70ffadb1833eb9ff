//! 12-hour clock and ordinal rendering for generated descriptions.

/// Render an "HH:MM" 24-hour string on a 12-hour clock with an AM/PM suffix.
///
/// The empty string maps to the literal `"00:00"`, the fallback for an unset
/// time, which skips AM/PM conversion entirely. Hour and minute are otherwise
/// parsed as integers with no range checks: hour 0 displays as 12, hours above
/// 12 wrap by subtracting 12, and the period flips to PM from hour 12 upward.
/// Components that fail to parse pass through verbatim, so malformed input
/// stays visible in the output instead of being rejected.
pub fn twelve_hour(time: &str) -> String {
    if time.is_empty() {
        return "00:00".to_string();
    }

    let mut parts = time.split(':');
    let hour_part = parts.next().unwrap_or("");
    let minute_part = parts.next().unwrap_or("");

    let (hour, period) = match hour_part.parse::<i64>() {
        Ok(h) => {
            let display = if h == 0 {
                12
            } else if h > 12 {
                h - 12
            } else {
                h
            };
            (format!("{display:02}"), if h >= 12 { "PM" } else { "AM" })
        }
        // An unparseable hour reads as before noon.
        Err(_) => (hour_part.to_string(), "AM"),
    };

    let minute = match minute_part.parse::<i64>() {
        Ok(m) => format!("{m:02}"),
        Err(_) => minute_part.to_string(),
    };

    format!("{hour}:{minute} {period}")
}

/// Append the English ordinal suffix to a number: 1 becomes "1st", 22 "22nd".
///
/// ```
/// assert_eq!(cronspeak::format::ordinal(21), "21st");
/// assert_eq!(cronspeak::format::ordinal(11), "11th");
/// ```
pub fn ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
