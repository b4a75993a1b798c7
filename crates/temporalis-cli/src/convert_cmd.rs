use std::process::ExitCode;

use serde::Serialize;
use temporalis_core::tz::{convert_timezone, format_rfc3339};

use crate::cli::ConvertArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_instant_arg, parse_tz_arg, print_json};

#[derive(Debug, Serialize)]
struct ConvertOutput {
    input: String,
    from: String,
    to: String,
    result: String,
}

pub fn run_convert(args: ConvertArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    // Local inputs are wall-clock time in the source zone
    let from_tz = parse_tz_arg(&args.from)?;
    let instant = parse_instant_arg("--time", &args.time, &from_tz)?;
    let converted = convert_timezone(&instant, &args.from, &args.to)?;
    let result = format_rfc3339(&converted);

    match output_format {
        OutputFormat::Json => print_json(&ConvertOutput {
            input: format_rfc3339(&instant),
            from: args.from,
            to: args.to,
            result,
        })?,
        OutputFormat::Text => println!("{}", result),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
