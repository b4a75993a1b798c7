//! Access to the system clock and wall-clock construction.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{Result, TemporalisError};
use crate::tz::resolve_local;

/// The current instant in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The current instant expressed in `tz`.
pub fn now_in<Z: TimeZone>(tz: &Z) -> DateTime<Z> {
    now().with_timezone(tz)
}

/// Build an instant from wall-clock components in `tz`.
///
/// Ambiguous and nonexistent local times are resolved as described in
/// [`resolve_local`].
///
/// # Errors
///
/// Returns [`TemporalisError::InvalidDate`] when the components do not form
/// a valid date and time (e.g. February 30th or hour 24).
///
/// # Examples
///
/// ```
/// use temporalis_core::clock::date;
/// use temporalis_core::tz::{format_rfc3339, parse_tz};
///
/// let tz = parse_tz("Europe/Berlin").unwrap();
/// let t = date(2026, 10, 19, 9, 30, 0, 0, &tz).unwrap();
/// assert_eq!(format_rfc3339(&t), "2026-10-19T09:30:00+02:00");
///
/// assert!(date(2026, 2, 30, 0, 0, 0, 0, &tz).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn date<Z: TimeZone>(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    nano: u32,
    tz: &Z,
) -> Result<DateTime<Z>> {
    let local = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_nano_opt(hour, min, sec, nano))
        .ok_or_else(|| {
            TemporalisError::InvalidDate(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:09}",
                year, month, day, hour, min, sec, nano
            ))
        })?;

    resolve_local(local, tz).ok_or_else(|| {
        TemporalisError::InvalidDate(format!("{} cannot be resolved in the given timezone", local))
    })
}
