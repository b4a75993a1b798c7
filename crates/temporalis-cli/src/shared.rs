use std::fs;
use std::io;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use temporalis_core::parse::parse_date;
use temporalis_core::{HolidaySet, parse_holidays, parse_instant};
use tracing::debug;

use crate::error::{CliError, CliResult};

pub fn parse_tz_arg(name: &str) -> CliResult<Tz> {
    Ok(temporalis_core::tz::parse_tz(name)?)
}

pub fn parse_instant_arg(argument: &'static str, value: &str, tz: &Tz) -> CliResult<DateTime<Tz>> {
    parse_instant(value, tz).map_err(CliError::argument(argument))
}

/// Parse `--start`/`--end` and reject ranges whose end precedes the start.
pub fn parse_range(start: &str, end: &str, tz: &Tz) -> CliResult<(DateTime<Tz>, DateTime<Tz>)> {
    let start_dt = parse_instant_arg("--start", start, tz)?;
    let end_dt = parse_instant_arg("--end", end, tz)?;
    temporalis_core::calendar::ensure_ordered(&start_dt, &end_dt)?;
    Ok((start_dt, end_dt))
}

/// Merge `--holiday` values with the entries of `--holidays-file`.
pub fn load_holidays(dates: &[String], file: Option<&str>) -> CliResult<HolidaySet> {
    let mut holidays = match file {
        Some(path) => {
            let text = if path == "-" {
                io::read_to_string(io::stdin())
                    .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?
            } else {
                fs::read_to_string(path).map_err(|e| {
                    CliError::runtime(format!("Failed to open file '{}': {}", path, e))
                })?
            };
            parse_holidays(&text).map_err(CliError::argument("--holidays-file"))?
        }
        None => HolidaySet::new(),
    };

    for date in dates {
        let parsed = parse_date(date).map_err(CliError::argument("--holiday"))?;
        holidays.insert(parsed);
    }

    debug!(count = holidays.len(), "loaded holidays");
    Ok(holidays)
}

pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
