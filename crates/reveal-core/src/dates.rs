//! Conversion between form calendar dates and wire-format date strings.

use jiff::{civil::Date, Timestamp};

/// strftime pattern of the `YYYY-MM-DD` wire format.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a calendar date for the plans API.
pub fn format_wire_date(date: Date) -> String {
    date.strftime(WIRE_DATE_FORMAT).to_string()
}

/// Parses a date string from a plan document.
///
/// Accepts plain `YYYY-MM-DD` dates as well as civil datetimes and RFC 3339
/// timestamps, keeping only the date part. Returns `None` for empty or
/// unparseable input.
pub fn parse_wire_date(value: &str) -> Option<Date> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = Date::strptime(WIRE_DATE_FORMAT, value) {
        return Some(date);
    }
    if let Ok(date) = value.parse::<Date>() {
        return Some(date);
    }
    if let Ok(datetime) = value.parse::<jiff::civil::DateTime>() {
        return Some(datetime.date());
    }
    value
        .parse::<Timestamp>()
        .ok()
        .map(|timestamp| timestamp.to_zoned(jiff::tz::TimeZone::UTC).date())
}
