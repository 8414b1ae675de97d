//! Time utilities for displaying wall-clock time in a country's timezone

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Format `utc_time` as `h:mm AM/PM` in the named IANA timezone
///
/// Returns `None` when the timezone identifier is unknown.
pub fn format_local_time(utc_time: DateTime<Utc>, tz_str: &str) -> Option<String> {
    match tz_str.trim().parse::<Tz>() {
        Ok(tz) => Some(utc_time.with_timezone(&tz).format("%-I:%M %p").to_string()),
        Err(_) => {
            debug!("Unknown timezone '{}', no local time available", tz_str);
            None
        }
    }
}

/// Label shown next to a country's local time
pub fn time_label(country_code: Option<&str>, has_timezone: bool) -> String {
    match country_code {
        Some(code) if has_timezone => format!("Time in {}", code.to_uppercase()),
        _ => "Local Time".to_string(),
    }
}
