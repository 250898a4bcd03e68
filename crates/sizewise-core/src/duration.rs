/// Duration phrases for elapsed-time displays.
///
/// Two ladders with deliberately different policies:
/// - minutes → days/hours/minutes always ends with a minutes term, even at
///   zero, and `0` formats as `"0 minutes"`;
/// - seconds → hours/minutes/seconds drops every zero term, and zero or a
///   missing value formats as the empty string.
const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// `"1 day"` / `"2 days"`.
fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// `"1 day, 1 hour, and 0 minutes"`, `"1 day and 0 minutes"`,
/// `"2 hours and 5 minutes"`, `"0 minutes"`.
///
/// Hours are omitted from the day form when zero; minutes never are.
pub fn minutes_to_phrase(total_minutes: u64) -> String {
    let days = total_minutes / MINUTES_PER_DAY;
    let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;
    let minutes_term = pluralize(minutes, "minute", "minutes");

    if days > 0 {
        let days_term = pluralize(days, "day", "days");
        if hours > 0 {
            let hours_term = pluralize(hours, "hour", "hours");
            format!("{days_term}, {hours_term}, and {minutes_term}")
        } else {
            format!("{days_term} and {minutes_term}")
        }
    } else if hours > 0 {
        let hours_term = pluralize(hours, "hour", "hours");
        format!("{hours_term} and {minutes_term}")
    } else {
        minutes_term
    }
}

/// `"1 hour, 1 minute"`, `"1 hour"`, `"45 seconds"`; `""` for zero or `None`.
pub fn seconds_to_phrase(total_seconds: Option<u64>) -> String {
    let total = match total_seconds {
        Some(total) if total > 0 => total,
        _ => return String::new(),
    };

    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    [
        (hours, "hour", "hours"),
        (minutes, "minute", "minutes"),
        (seconds, "second", "seconds"),
    ]
    .into_iter()
    .filter(|&(count, _, _)| count > 0)
    .map(|(count, singular, plural)| pluralize(count, singular, plural))
    .collect::<Vec<_>>()
    .join(", ")
}
