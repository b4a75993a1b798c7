//! Timezone handling utilities.
//!
//! This module resolves IANA timezone names, converts instants between
//! zones and resolves local wall-clock times across DST transitions.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::{Result, TemporalisError};

/// Upper bound for the forward search over a DST gap.
const MAX_GAP_MINUTES: i64 = 2 * 24 * 60;

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use temporalis_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/Berlin").unwrap();
/// assert_eq!(tz.to_string(), "Europe/Berlin");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| TemporalisError::InvalidTimezone(name.to_string()))
}

/// Express an instant in the `to` timezone after passing it through `from`.
///
/// The instant itself never changes; both names must be valid IANA names.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use temporalis_core::tz::{convert_timezone, format_rfc3339};
///
/// let t = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
/// let ny = convert_timezone(&t, "Europe/Berlin", "America/New_York").unwrap();
///
/// assert_eq!(format_rfc3339(&ny), "2026-10-19T08:00:00-04:00");
/// ```
pub fn convert_timezone<Z: TimeZone>(t: &DateTime<Z>, from: &str, to: &str) -> Result<DateTime<Tz>> {
    let from_tz = parse_tz(from)?;
    let to_tz = parse_tz(to)?;
    Ok(t.with_timezone(&from_tz).with_timezone(&to_tz))
}

/// Resolve a local wall-clock time in `tz` to an instant.
///
/// Ambiguous times (DST fall back) resolve to the earlier instant.
/// Nonexistent times (DST spring forward) resolve to the first instant after
/// the gap. Returns `None` only when no valid local time follows within two
/// days.
pub fn resolve_local<Z: TimeZone>(local: NaiveDateTime, tz: &Z) -> Option<DateTime<Z>> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Some(dt);
    }

    // Gaps start and end on minute boundaries
    let minute_start = local.with_second(0)?.with_nanosecond(0)?;
    (1..=MAX_GAP_MINUTES).find_map(|minutes| {
        minute_start
            .checked_add_signed(TimeDelta::minutes(minutes))
            .and_then(|candidate| tz.from_local_datetime(&candidate).earliest())
    })
}

/// Format a datetime as RFC3339 with timezone offset.
///
/// Produces e.g. `2026-03-29T00:00:00+01:00`.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}
