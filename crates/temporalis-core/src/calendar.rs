//! Calendar range evaluation.
//!
//! This module walks calendar days and hours between two instants and
//! classifies each day as a working day, a weekend day or a holiday.
//!
//! Two notions of time span live here and they are kept apart:
//! - Day walks ([`date_range`], [`working_days`], [`business_days`]) step by
//!   one *calendar* day, preserving the local wall-clock time in the
//!   instant's zone. A calendar day can therefore be 23 or 25 hours long.
//! - [`business_hours`] and [`date_diff`] work on elapsed time, in fixed
//!   one-hour and 24-hour units.
//!
//! Holiday membership compares local calendar dates only, see
//! [`HolidaySet`] for the timezone contract.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, TimeZone, Weekday};
use tracing::{debug, trace};

use crate::error::{Result, TemporalisError};
use crate::models::{DayKind, HolidaySet};

/// Iterator over consecutive calendar days, see [`days`].
#[derive(Debug, Clone)]
pub struct DailySteps<Z: TimeZone> {
    next: Option<DateTime<Z>>,
    end: DateTime<Z>,
}

impl<Z: TimeZone> Iterator for DailySteps<Z> {
    type Item = DateTime<Z>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current > self.end {
            return None;
        }
        self.next = next_calendar_day(&current);
        Some(current)
    }
}

/// Iterate the calendar days from `start` to `end`, both inclusive.
///
/// Each item is the previous one plus one calendar day at the same local
/// wall-clock time. Yields nothing when `start` is after `end`.
pub fn days<Z: TimeZone>(start: &DateTime<Z>, end: &DateTime<Z>) -> DailySteps<Z> {
    DailySteps {
        next: Some(start.clone()),
        end: end.clone(),
    }
}

/// Add one calendar day, keeping the local wall-clock time.
///
/// When that wall-clock time does not exist or is ambiguous on the next day
/// (DST transition), exactly 24 hours are added instead.
fn next_calendar_day<Z: TimeZone>(day: &DateTime<Z>) -> Option<DateTime<Z>> {
    day.clone()
        .checked_add_days(Days::new(1))
        .or_else(|| day.clone().checked_add_signed(TimeDelta::days(1)))
}

/// Produce the inclusive sequence of daily instants from `start` to `end`.
///
/// Returns an empty vector when `start` is after `end`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use temporalis_core::calendar::date_range;
///
/// let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 10, 21, 9, 0, 0).unwrap();
///
/// assert_eq!(date_range(&start, &end).len(), 3);
/// assert!(date_range(&end, &start).is_empty());
/// ```
pub fn date_range<Z: TimeZone>(start: &DateTime<Z>, end: &DateTime<Z>) -> Vec<DateTime<Z>> {
    days(start, end).collect()
}

/// Whether the instant falls on a Saturday or Sunday in its own zone.
pub fn is_weekend<Z: TimeZone>(day: &DateTime<Z>) -> bool {
    is_weekend_date(day.date_naive())
}

fn is_weekend_date(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn classify_date(date: NaiveDate, holidays: &HolidaySet) -> DayKind {
    if is_weekend_date(date) {
        DayKind::Weekend
    } else if holidays.contains(date) {
        DayKind::Holiday
    } else {
        DayKind::Working
    }
}

/// Classify the calendar day an instant falls on.
///
/// A holiday that falls on a weekend is reported as [`DayKind::Weekend`].
pub fn classify_day<Z: TimeZone>(day: &DateTime<Z>, holidays: &HolidaySet) -> DayKind {
    classify_date(day.date_naive(), holidays)
}

/// Whether the instant falls on a working day.
pub fn is_working_day<Z: TimeZone>(day: &DateTime<Z>, holidays: &HolidaySet) -> bool {
    classify_day(day, holidays).is_working()
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Check that `end` does not precede `start`.
///
/// # Errors
///
/// Returns [`TemporalisError::InvalidRange`] carrying both boundaries.
pub fn ensure_ordered<Z: TimeZone>(start: &DateTime<Z>, end: &DateTime<Z>) -> Result<()> {
    if end >= start {
        return Ok(());
    }
    let start = start.fixed_offset();
    let end = end.fixed_offset();
    debug!(%start, %end, "rejecting range whose end precedes its start");
    Err(TemporalisError::InvalidRange { start, end })
}

fn count_working_days<Z: TimeZone>(
    start: &DateTime<Z>,
    end: &DateTime<Z>,
    holidays: &HolidaySet,
) -> usize {
    let count = days(start, end)
        .filter(|day| is_working_day(day, holidays))
        .count();
    trace!(count, holidays = holidays.len(), "counted working days");
    count
}

/// Count working days in the inclusive calendar-day walk from `start` to `end`.
///
/// # Errors
///
/// Returns [`TemporalisError::InvalidRange`] when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use temporalis_core::HolidaySet;
/// use temporalis_core::calendar::working_days;
///
/// // Monday to Friday
/// let start = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 10, 23, 0, 0, 0).unwrap();
/// let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()]
///     .into_iter()
///     .collect();
///
/// assert_eq!(working_days(&start, &end, &holidays).unwrap(), 4);
/// assert!(working_days(&end, &start, &holidays).is_err());
/// ```
pub fn working_days<Z: TimeZone>(
    start: &DateTime<Z>,
    end: &DateTime<Z>,
    holidays: &HolidaySet,
) -> Result<usize> {
    ensure_ordered(start, end)?;
    Ok(count_working_days(start, end, holidays))
}

/// Count working days between `from` and `to`, both inclusive.
///
/// Same count as [`working_days`], but a `to` before `from` yields `0`
/// instead of an error.
pub fn business_days<Z: TimeZone>(
    from: &DateTime<Z>,
    to: &DateTime<Z>,
    holidays: &HolidaySet,
) -> usize {
    if to < from {
        return 0;
    }
    count_working_days(from, to, holidays)
}

/// Sum the whole hours in `[from, to)` that start on a working day.
///
/// The range is walked in fixed one-hour steps from `from`. Every hour of a
/// working day counts; there is no hour-of-day window. A trailing partial
/// hour before `to` is never counted. Returns zero when `from` is not before
/// `to`.
pub fn business_hours<Z: TimeZone>(
    from: &DateTime<Z>,
    to: &DateTime<Z>,
    holidays: &HolidaySet,
) -> TimeDelta {
    let step = TimeDelta::hours(1);
    let mut total = TimeDelta::zero();
    let mut current = from.clone();

    while let Some(next) = current.clone().checked_add_signed(step) {
        if next > *to {
            break;
        }
        if is_working_day(&current, holidays) {
            total += step;
        }
        current = next;
    }

    trace!(hours = total.num_hours(), "summed business hours");
    total
}

/// Whole days between `start` and `end`, computed from elapsed hours.
///
/// This is `elapsed hours / 24` truncated, not a count of calendar dates, so
/// a span crossing a 23-hour DST day can be one short of the calendar count.
///
/// # Errors
///
/// Returns [`TemporalisError::InvalidRange`] when `end` precedes `start`.
pub fn date_diff<Z: TimeZone>(start: &DateTime<Z>, end: &DateTime<Z>) -> Result<i64> {
    ensure_ordered(start, end)?;
    let elapsed = end.clone().signed_duration_since(start);
    Ok(elapsed.num_hours() / 24)
}
