use clap::{Parser, Subcommand};

/// Calendar arithmetic: working days, business hours and durations
#[derive(Parser, Debug)]
#[command(name = "temporalis", version)]
#[command(about = "Calendar arithmetic: working days, business hours and durations")]
pub struct Cli {
    /// Enable verbose (debug) logging; RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count working days in an inclusive date range
    Workdays(SpanArgs),
    /// Sum the whole hours in a range that fall on working days
    Hours(SpanArgs),
    /// List every day in an inclusive range with its classification
    Range(SpanArgs),
    /// Whole days of elapsed time between two instants
    Diff(DiffArgs),
    /// Format a number of seconds as a readable duration
    Duration(DurationArgs),
    /// Convert an instant from one timezone to another
    Convert(ConvertArgs),
    /// Check whether a year is a leap year
    LeapYear(LeapYearArgs),
}

#[derive(clap::Args, Debug)]
pub struct SpanArgs {
    /// Start of range (RFC3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End of range (same formats as --start)
    #[arg(long)]
    pub end: String,

    /// IANA timezone for local inputs and day boundaries
    #[arg(short, long, default_value = "UTC")]
    pub tz: String,

    /// Holiday date (YYYY-MM-DD); may be repeated
    #[arg(long = "holiday", value_name = "DATE")]
    pub holidays: Vec<String>,

    /// File with one holiday date per line (use - for stdin)
    #[arg(long)]
    pub holidays_file: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct DiffArgs {
    /// Start instant
    #[arg(long)]
    pub start: String,

    /// End instant
    #[arg(long)]
    pub end: String,

    /// IANA timezone for local inputs
    #[arg(short, long, default_value = "UTC")]
    pub tz: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct DurationArgs {
    /// Duration in seconds (may be negative)
    #[arg(allow_negative_numbers = true)]
    pub seconds: i64,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Instant to convert (RFC3339, or local time in --from)
    #[arg(long)]
    pub time: String,

    /// Source IANA timezone
    #[arg(long)]
    pub from: String,

    /// Target IANA timezone
    #[arg(long)]
    pub to: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct LeapYearArgs {
    /// Year to check
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
