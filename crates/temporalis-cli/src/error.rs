use std::process::ExitCode;

use serde::Serialize;
use temporalis_core::TemporalisError;
use thiserror::Error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Failure of a subcommand.
///
/// Library errors keep their [`TemporalisError`] so the error category
/// reaches the JSON envelope.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed command-line value rejected before reaching the library.
    #[error("{0}")]
    Input(String),

    /// I/O or serialization failure.
    #[error("{0}")]
    Runtime(String),

    /// The library rejected a value.
    #[error("{0}")]
    Calendar(#[from] TemporalisError),

    /// The library rejected a named argument.
    #[error("{argument}: {source}")]
    Argument {
        argument: &'static str,
        source: TemporalisError,
    },
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        CliError::Input(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        CliError::Runtime(message.into())
    }

    /// Attach the offending argument to a library error.
    pub fn argument(argument: &'static str) -> impl FnOnce(TemporalisError) -> Self {
        move |source| CliError::Argument { argument, source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Runtime(_) => EXIT_RUNTIME_ERROR,
            CliError::Input(_) | CliError::Calendar(_) | CliError::Argument { .. } => {
                EXIT_INPUT_ERROR
            }
        }
    }

    /// Error category of the library error, if there is one.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            CliError::Calendar(source) | CliError::Argument { source, .. } => Some(source.code()),
            CliError::Input(_) | CliError::Runtime(_) => None,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput {
    error: String,
    exit_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

pub fn render_error(err: &CliError, output_format: OutputFormat) -> ExitCode {
    match output_format {
        OutputFormat::Json => {
            let envelope = ErrorOutput {
                error: err.to_string(),
                exit_code: err.exit_code(),
                kind: err.kind(),
            };

            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {}", err),
            }
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", err);
        }
    }

    ExitCode::from(err.exit_code())
}

pub fn output_format_hint(s: &str) -> OutputFormat {
    if s.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

pub fn parse_output_format(s: &str) -> CliResult<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(CliError::input(format!(
            "Invalid output_format '{}'. Expected: json, text",
            s
        ))),
    }
}
