use jiff::{Timestamp, civil, tz::TimeZone};

/// Format a last-update timestamp in the browser's time zone.
pub fn format_last_updated(timestamp: Timestamp) -> String {
    format_timestamp_in(timestamp, TimeZone::system())
}

pub fn format_timestamp_in(timestamp: Timestamp, tz: TimeZone) -> String {
    timestamp.to_zoned(tz).strftime("%d/%m/%Y %H:%M").to_string()
}

/// Render a stored `YYYY-MM-DD` event date as `DD/MM/YYYY`, passing anything
/// else through untouched.
pub fn format_event_date(date: &str) -> String {
    match date.parse::<civil::Date>() {
        Ok(date) => date.strftime("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}
