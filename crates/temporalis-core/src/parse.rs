//! Parsing and formatting of instants, dates and holiday lists.
//!
//! Formats are `strftime`-style strings as understood by [`chrono::format`].
//! Values that carry a UTC offset keep their instant; values without one
//! are read as wall-clock time in a zone (UTC unless stated otherwise).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, TemporalisError};
use crate::models::HolidaySet;
use crate::tz::resolve_local;

/// Date format used for holiday entries and date-only inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Local date-time layouts accepted by [`parse_instant`], tried in order.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a value without offset as a wall-clock datetime.
///
/// Date-only formats give midnight.
fn parse_naive(value: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn parse_error(value: &str, format: &str) -> TemporalisError {
    TemporalisError::ParseError(format!(
        "Could not parse '{}' with format '{}'",
        value, format
    ))
}

/// Parse `value` according to `format`, returning a UTC instant.
///
/// If the format has no offset field the value is taken as UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use temporalis_core::parse::parse_time;
///
/// let t = parse_time("2022-05-02 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(t, Utc.with_ymd_and_hms(2022, 5, 2, 10, 30, 0).unwrap());
/// ```
pub fn parse_time(value: &str, format: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(value, format) {
        return Ok(dt.with_timezone(&Utc));
    }

    parse_naive(value, format)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| parse_error(value, format))
}

/// Parse `value` according to `format` in the timezone `tz`.
///
/// Values without an offset are wall-clock times in `tz`, resolved with
/// [`resolve_local`]. Values with an offset are converted into `tz`.
pub fn parse_in_timezone<Z: TimeZone>(value: &str, format: &str, tz: &Z) -> Result<DateTime<Z>> {
    if let Ok(dt) = DateTime::parse_from_str(value, format) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = parse_naive(value, format).ok_or_else(|| parse_error(value, format))?;
    resolve_local(naive, tz).ok_or_else(|| {
        TemporalisError::ParseError(format!("Local time '{}' cannot be resolved", value))
    })
}

/// Format an instant according to `format`.
pub fn format_time<Z: TimeZone>(t: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    t.format(format).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        TemporalisError::ParseError(format!(
            "Invalid date: '{}'. Expected YYYY-MM-DD. Error: {}",
            trimmed, e
        ))
    })
}

/// Parse a user-supplied instant.
///
/// Accepts, in order:
/// 1. RFC3339 (`2026-10-19T09:00:00+02:00`), converted into `tz`
/// 2. Local date-time (`2026-10-19T09:00[:00]`, `T` or space), local to `tz`
/// 3. Date only (`2026-10-19`), local midnight in `tz`
pub fn parse_instant<Z: TimeZone>(input: &str, tz: &Z) -> Result<DateTime<Z>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            TemporalisError::ParseError(format!(
                "Invalid timestamp: '{}'. Expected RFC3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
                trimmed
            ))
        })?;

    resolve_local(naive, tz).ok_or_else(|| {
        TemporalisError::ParseError(format!("Local time '{}' cannot be resolved", trimmed))
    })
}

/// Parse a holiday list: one `YYYY-MM-DD` date per line.
///
/// Blank lines and everything after a `#` are ignored.
///
/// # Examples
///
/// ```
/// use temporalis_core::parse::parse_holidays;
///
/// let holidays = parse_holidays("# public holidays\n2026-12-25\n2026-12-26 # boxing day\n").unwrap();
/// assert_eq!(holidays.len(), 2);
/// ```
pub fn parse_holidays(text: &str) -> Result<HolidaySet> {
    let mut holidays = HolidaySet::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let date = parse_date(content).map_err(|e| {
            TemporalisError::ParseError(format!("Line {}: {}", index + 1, e))
        })?;
        holidays.insert(date);
    }

    Ok(holidays)
}
