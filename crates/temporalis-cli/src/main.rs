use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert_cmd;
mod days_cmd;
mod duration_cmd;
mod error;
mod shared;

use cli::{Cli, Commands};
use convert_cmd::run_convert;
use days_cmd::{run_diff, run_hours, run_range, run_workdays};
use duration_cmd::{run_duration, run_leap_year};
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve `--output-format`, run the command and render any error in that format.
fn dispatch<A>(
    args: A,
    output_format: &str,
    run: fn(A, OutputFormat) -> CliResult<ExitCode>,
) -> ExitCode {
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(args, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "parsed CLI args");

    match cli.command {
        Commands::Workdays(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_workdays)
        }
        Commands::Hours(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_hours)
        }
        Commands::Range(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_range)
        }
        Commands::Diff(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_diff)
        }
        Commands::Duration(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_duration)
        }
        Commands::Convert(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_convert)
        }
        Commands::LeapYear(args) => {
            let format = args.output_format.clone();
            dispatch(args, &format, run_leap_year)
        }
    }
}
