//! Core data types for temporalis.
//!
//! This module defines the primary types used throughout the library:
//! - [`HolidaySet`] - Calendar dates excluded from working-day counts
//! - [`DayKind`] - Classification of a single calendar day
//! - [`MONTH_NAMES`] / [`WEEKDAY_NAMES`] - English name lookup tables

use chrono::{DateTime, NaiveDate, TimeZone, Weekday};
use serde::Serialize;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Look up the English name of a month (1 = January).
///
/// Returns `None` for values outside `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Look up the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// Classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// Monday to Friday and not a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday listed in the holiday set.
    Holiday,
}

impl DayKind {
    /// Whether the day counts towards working days and business hours.
    pub fn is_working(self) -> bool {
        self == DayKind::Working
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "working"),
            DayKind::Weekend => write!(f, "weekend"),
            DayKind::Holiday => write!(f, "holiday"),
        }
    }
}

/// A set of calendar dates treated as non-working.
///
/// Membership compares the (year, month, day) triple only. When holidays are
/// built from instants, each instant contributes the calendar date it has in
/// its own timezone, so holidays and the range being scanned must agree on a
/// zone. [`HolidaySet::from_instants_in`] performs that normalization
/// explicitly.
///
/// Duplicates are allowed and have no effect on counts. Lookups are a linear
/// scan, which is fine for a year's worth of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: Vec<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a holiday set from the local calendar date of each instant.
    pub fn from_instants<Z, I>(instants: I) -> Self
    where
        Z: TimeZone,
        I: IntoIterator<Item = DateTime<Z>>,
    {
        instants.into_iter().map(|dt| dt.date_naive()).collect()
    }

    /// Build a holiday set from instants after converting each one into `tz`.
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use temporalis_core::HolidaySet;
    ///
    /// let berlin = temporalis_core::tz::parse_tz("Europe/Berlin").unwrap();
    /// // 23:30 UTC on the 24th is already the 25th in Berlin.
    /// let instant = Utc.with_ymd_and_hms(2026, 12, 24, 23, 30, 0).unwrap();
    /// let holidays = HolidaySet::from_instants_in([instant], &berlin);
    ///
    /// assert!(holidays.contains(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
    /// ```
    pub fn from_instants_in<Z, Z2, I>(instants: I, tz: &Z2) -> Self
    where
        Z: TimeZone,
        Z2: TimeZone,
        I: IntoIterator<Item = DateTime<Z>>,
    {
        instants
            .into_iter()
            .map(|dt| dt.with_timezone(tz).date_naive())
            .collect()
    }

    /// Add a date to the set.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.push(date);
    }

    /// Whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.iter().any(|holiday| *holiday == date)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
