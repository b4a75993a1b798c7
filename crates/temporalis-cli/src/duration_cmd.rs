use std::process::ExitCode;

use chrono::TimeDelta;
use serde::Serialize;
use temporalis_core::{format_duration, is_leap_year};

use crate::cli::{DurationArgs, LeapYearArgs};
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::print_json;

#[derive(Debug, Serialize)]
struct DurationOutput {
    seconds: i64,
    formatted: String,
}

#[derive(Debug, Serialize)]
struct LeapYearOutput {
    year: i32,
    leap_year: bool,
}

pub fn run_duration(args: DurationArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let duration = TimeDelta::try_seconds(args.seconds).ok_or_else(|| {
        CliError::input(format!("Duration out of range: {} seconds", args.seconds))
    })?;
    let formatted = format_duration(duration);

    match output_format {
        OutputFormat::Json => print_json(&DurationOutput {
            seconds: args.seconds,
            formatted,
        })?,
        OutputFormat::Text => println!("{}", formatted),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_leap_year(args: LeapYearArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let leap_year = is_leap_year(args.year);

    match output_format {
        OutputFormat::Json => print_json(&LeapYearOutput {
            year: args.year,
            leap_year,
        })?,
        OutputFormat::Text => println!("{}", leap_year),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
