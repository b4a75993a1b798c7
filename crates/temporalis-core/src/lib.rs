//! # temporalis-core
//!
//! Calendar arithmetic and human-readable durations on top of `chrono`.
//!
//! The clock, the timezone database and strftime-style parsing come from
//! `chrono` and `chrono-tz`. This crate adds the calendar computations that
//! are built from them.
//!
//! ## Features
//!
//! - **Working days**: Count working days and business hours over a range,
//!   excluding weekends and a caller-supplied [`HolidaySet`].
//! - **Date ranges**: Walk calendar days at a fixed local wall-clock time,
//!   across DST transitions.
//! - **Date differences**: Whole days of elapsed time between two instants.
//! - **Duration formatting**: Render durations as `1 day, 2 hours and 5 seconds`.
//! - **Timezones**: Convert instants between IANA timezones via chrono-tz.
//! - **Leap years**: Gregorian leap year checks.
//!
//! ## Example
//!
//! ```rust
//! use temporalis_core::prelude::*;
//!
//! let tz = parse_tz("Europe/Berlin").unwrap();
//! let start = parse_instant("2026-12-21", &tz).unwrap();
//! let end = parse_instant("2026-12-31", &tz).unwrap();
//! let holidays = parse_holidays("2026-12-24\n2026-12-25\n2026-12-31\n").unwrap();
//!
//! let days = working_days(&start, &end, &holidays).unwrap();
//! let hours = business_hours(&start, &end, &holidays);
//!
//! println!("{} working days, {}", days, format_duration(hours));
//! ```

pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod tz;

// Re-export commonly used types at the crate root
pub use calendar::{
    business_days, business_hours, classify_day, date_diff, date_range, is_leap_year,
    working_days,
};
pub use error::{Result, TemporalisError};
pub use format::format_duration;
pub use models::{DayKind, HolidaySet, MONTH_NAMES, WEEKDAY_NAMES, month_name, weekday_name};
pub use parse::{parse_holidays, parse_instant};

/// Prelude module for convenient imports.
///
/// ```
/// use temporalis_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calendar::*;
    pub use crate::error::{Result, TemporalisError};
    pub use crate::format::{format_duration, format_std_duration};
    pub use crate::models::*;
    pub use crate::parse::{
        format_time, parse_date, parse_holidays, parse_in_timezone, parse_instant, parse_time,
    };
    pub use crate::tz::{convert_timezone, format_rfc3339, parse_tz};
}
