use std::process::ExitCode;

use chrono::Datelike;
use serde::Serialize;
use temporalis_core::tz::format_rfc3339;
use temporalis_core::{
    DayKind, HolidaySet, business_days, business_hours, classify_day, date_diff, date_range,
    format_duration, weekday_name, working_days,
};
use tracing::debug;

use crate::cli::{DiffArgs, SpanArgs};
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_holidays, parse_range, parse_tz_arg, print_json};

#[derive(Debug, Serialize)]
struct WorkdaysOutput {
    start: String,
    end: String,
    tz: String,
    holidays: HolidaySet,
    working_days: usize,
    business_days: usize,
}

#[derive(Debug, Serialize)]
struct HoursOutput {
    start: String,
    end: String,
    tz: String,
    hours: i64,
    formatted: String,
}

#[derive(Debug, Serialize)]
struct RangeDay {
    date: String,
    weekday: &'static str,
    kind: DayKind,
}

#[derive(Debug, Serialize)]
struct DiffOutput {
    start: String,
    end: String,
    days: i64,
}

pub fn run_workdays(args: SpanArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_arg(&args.tz)?;
    let (start, end) = parse_range(&args.start, &args.end, &tz)?;
    let holidays = load_holidays(&args.holidays, args.holidays_file.as_deref())?;

    let working = working_days(&start, &end, &holidays)?;
    let business = business_days(&start, &end, &holidays);
    debug!(working, business, "counted days");

    match output_format {
        OutputFormat::Json => print_json(&WorkdaysOutput {
            start: format_rfc3339(&start),
            end: format_rfc3339(&end),
            tz: args.tz,
            holidays,
            working_days: working,
            business_days: business,
        })?,
        OutputFormat::Text => println!("{} working days, {} business days", working, business),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_hours(args: SpanArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_arg(&args.tz)?;
    let (start, end) = parse_range(&args.start, &args.end, &tz)?;
    let holidays = load_holidays(&args.holidays, args.holidays_file.as_deref())?;

    let total = business_hours(&start, &end, &holidays);
    let formatted = format_duration(total);

    match output_format {
        OutputFormat::Json => print_json(&HoursOutput {
            start: format_rfc3339(&start),
            end: format_rfc3339(&end),
            tz: args.tz,
            hours: total.num_hours(),
            formatted,
        })?,
        OutputFormat::Text => println!("{} hours ({})", total.num_hours(), formatted),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_range(args: SpanArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_arg(&args.tz)?;
    let (start, end) = parse_range(&args.start, &args.end, &tz)?;
    let holidays = load_holidays(&args.holidays, args.holidays_file.as_deref())?;

    let days: Vec<RangeDay> = date_range(&start, &end)
        .iter()
        .map(|day| RangeDay {
            date: day.format("%Y-%m-%d").to_string(),
            weekday: weekday_name(day.weekday()),
            kind: classify_day(day, &holidays),
        })
        .collect();
    debug!(days = days.len(), "generated date range");

    match output_format {
        OutputFormat::Json => print_json(&days)?,
        OutputFormat::Text => {
            for day in days {
                println!("{} {} {}", day.date, day.weekday, day.kind);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_diff(args: DiffArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let tz = parse_tz_arg(&args.tz)?;
    let (start, end) = parse_range(&args.start, &args.end, &tz)?;

    let days = date_diff(&start, &end)?;

    match output_format {
        OutputFormat::Json => print_json(&DiffOutput {
            start: format_rfc3339(&start),
            end: format_rfc3339(&end),
            days,
        })?,
        OutputFormat::Text => println!("{}", days),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
