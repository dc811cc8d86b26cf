//! Some utility functions, mostly to convert raw user input into typed values

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::DATE_TIME_FORMAT;
use crate::error::{Error, Result};

/// Formats accepted when parsing a date and time
const ACCEPTED_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date and time the way events display them (`yyyy-MM-dd HH:mm`)
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// Parse a date and time, either `yyyy-MM-dd HH:mm` or `yyyy-MM-ddTHH:mm` (seconds are optional)
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    ACCEPTED_DATE_TIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| Error::InvalidDateTime(raw.to_string()))
}

/// Parse a date and a time given as two separate words (`yyyy-MM-dd` and `HH:mm`)
pub fn parse_date_and_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    parse_date_time(&format!("{} {}", date.trim(), time.trim()))
}

/// Parse a priority flag.
///
/// `true`, `high` and `yes` mean "high priority", `false`, `normal` and `no` mean "normal priority" (case-insensitive)
pub fn parse_priority(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "high" | "yes" => Ok(true),
        "false" | "normal" | "no" => Ok(false),
        _ => Err(Error::InvalidPriority(raw.to_string())),
    }
}

/// Which side of a range a bound is on. A date-only bound expands to the start or the end of that day.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Bound {
    Start,
    End,
}

fn parse_bound(raw: &str, bound: Bound) -> Result<NaiveDateTime> {
    if let Ok(dt) = parse_date_time(raw) {
        return Ok(dt);
    }

    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDateTime(raw.trim().to_string()))?;
    let dt = match bound {
        Bound::Start => date.and_hms_opt(0, 0, 0),
        Bound::End => date.and_hms_opt(23, 59, 59),
    };
    dt.ok_or_else(|| Error::InvalidDateTime(raw.trim().to_string()))
}

/// Parse an inclusive date range such as `2024-01-01 to 2024-01-31` or `2024-01-01 09:00 to 2024-01-01 18:00`.
///
/// A date-only end bound covers the whole day.
pub fn parse_date_range(raw: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = raw.split_once(" to ")
        .ok_or_else(|| Error::InvalidDateRange(raw.to_string()))?;

    let start = parse_bound(start, Bound::Start)?;
    let end = parse_bound(end, Bound::End)?;
    if start > end {
        return Err(Error::InvalidDateRange(raw.to_string()));
    }
    Ok((start, end))
}
