use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Wall-clock text format of `end_time` and `created_at` columns, naive,
/// interpreted in the configured zone. Lexicographic order equals
/// chronological order, which the claim queries rely on.
pub const END_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local hour at which pre-expiry reminders become due.
pub const NOTIFY_HOUR: u32 = 11;

/// How far back `claim_after_expiry` looks for windows that ended while the
/// process was not running. An hour of grace plus tick slack.
pub const AFTER_EXPIRY_WINDOW_MINUTES: i64 = 65;

pub fn parse_end_time(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), END_TIME_FORMAT)
}

pub fn format_end_time(dt: NaiveDateTime) -> String {
    dt.format(END_TIME_FORMAT).to_string()
}

pub fn format_local(dt: DateTime<Tz>) -> String {
    dt.format(END_TIME_FORMAT).to_string()
}

pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

#[cfg(test)]
#[path = "../../tests/unit/core_time.rs"]
mod tests;
