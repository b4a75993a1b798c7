use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_temporalis"))
        .args(args)
        .output()
        .expect("Failed to execute temporalis")
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

fn assert_stdout(args: &[&str], expected: &str) {
    let output = run(args);

    assert!(
        output.status.success(),
        "temporalis {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");
    if actual != expected {
        panic!(
            "Output mismatch for {:?}:\n\n{}",
            args,
            diff_strings(expected, &actual)
        );
    }
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "temporalis {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
}

fn holidays_file(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, contents).expect("Failed to write holidays file");
    path
}

#[test]
fn workdays_with_holiday() {
    assert_stdout(
        &[
            "workdays",
            "--start",
            "2026-10-19",
            "--end",
            "2026-10-30",
            "--holiday",
            "2026-10-21",
        ],
        "9 working days, 9 business days\n",
    );
}

#[test]
fn workdays_reports_both_counts() {
    assert_stdout(
        &["workdays", "--start", "2026-10-19", "--end", "2026-10-30"],
        "10 working days, 10 business days\n",
    );

    let json = stdout_json(&[
        "workdays",
        "--start",
        "2026-10-19",
        "--end",
        "2026-10-30",
        "--output-format",
        "json",
    ]);

    assert_eq!(json["working_days"], 10);
    assert_eq!(json["business_days"], 10);
    assert_eq!(json["holidays"], serde_json::json!([]));
}

#[test]
fn workdays_json_with_holidays_file() {
    let path = holidays_file(
        "workdays_holidays.txt",
        "# December\n2026-12-24\n2026-12-25\n\n2026-12-31 # new year's eve\n",
    );

    let json = stdout_json(&[
        "workdays",
        "--start",
        "2026-12-21",
        "--end",
        "2026-12-31",
        "--tz",
        "Europe/Berlin",
        "--holidays-file",
        path.to_str().unwrap(),
        "--output-format",
        "json",
    ]);

    assert_eq!(json["working_days"], 6);
    assert_eq!(
        json["holidays"],
        serde_json::json!(["2026-12-24", "2026-12-25", "2026-12-31"])
    );
    assert_eq!(json["start"], "2026-12-21T00:00:00+01:00");
    assert_eq!(json["tz"], "Europe/Berlin");
}

#[test]
fn workdays_rejects_reversed_range() {
    let output = run(&["workdays", "--start", "2026-10-30", "--end", "2026-10-19"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range"), "stderr: {}", stderr);
}

#[test]
fn workdays_reversed_range_json_error() {
    let output = run(&[
        "workdays",
        "--start",
        "2026-10-30",
        "--end",
        "2026-10-19",
        "--output-format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON");
    assert_eq!(envelope["exit_code"], 2);
    assert_eq!(envelope["kind"], "invalid_range");
}

#[test]
fn workdays_rejects_bad_holiday() {
    let output = run(&[
        "workdays",
        "--start",
        "2026-10-19",
        "--end",
        "2026-10-30",
        "--holiday",
        "christmas",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: --holiday: "), "stderr: {}", stderr);
}

#[test]
fn hours_over_weekend_and_weekdays() {
    assert_stdout(
        &["hours", "--start", "2026-10-17", "--end", "2026-10-19"],
        "0 hours (0 seconds)\n",
    );
    assert_stdout(
        &["hours", "--start", "2026-10-19", "--end", "2026-10-21"],
        "48 hours (2 days)\n",
    );
}

#[test]
fn hours_json() {
    let json = stdout_json(&[
        "hours",
        "--start",
        "2026-10-19T09:00:00Z",
        "--end",
        "2026-10-20T10:30:00Z",
        "--output-format",
        "json",
    ]);

    assert_eq!(json["hours"], 25);
    assert_eq!(json["formatted"], "1 day and 1 hour");
}

#[test]
fn range_text() {
    assert_stdout(
        &[
            "range",
            "--start",
            "2026-10-23",
            "--end",
            "2026-10-26",
            "--holiday",
            "2026-10-26",
        ],
        "2026-10-23 Friday working\n\
         2026-10-24 Saturday weekend\n\
         2026-10-25 Sunday weekend\n\
         2026-10-26 Monday holiday\n",
    );
}

#[test]
fn range_json() {
    let json = stdout_json(&[
        "range",
        "--start",
        "2026-10-24",
        "--end",
        "2026-10-24",
        "--output-format",
        "json",
    ]);

    assert_eq!(
        json,
        serde_json::json!([
            { "date": "2026-10-24", "weekday": "Saturday", "kind": "weekend" }
        ])
    );
}

#[test]
fn diff_whole_days() {
    assert_stdout(
        &["diff", "--start", "2026-10-19", "--end", "2026-10-21T23:00"],
        "2\n",
    );
}

#[test]
fn duration_formats() {
    assert_stdout(
        &["duration", "97445"],
        "1 day, 3 hours, 4 minutes and 5 seconds\n",
    );
    assert_stdout(&["duration", "0"], "0 seconds\n");
    assert_stdout(&["duration", "-90"], "-1 minute and 30 seconds\n");
}

#[test]
fn duration_json() {
    let json = stdout_json(&["duration", "97200", "--output-format", "json"]);

    assert_eq!(json["seconds"], 97200);
    assert_eq!(json["formatted"], "1 day and 3 hours");
}

#[test]
fn convert_local_time() {
    assert_stdout(
        &[
            "convert",
            "--time",
            "2026-10-19T09:00",
            "--from",
            "Europe/Berlin",
            "--to",
            "America/New_York",
        ],
        "2026-10-19T03:00:00-04:00\n",
    );
}

#[test]
fn convert_invalid_timezone_json_error() {
    let output = run(&[
        "convert",
        "--time",
        "2026-10-19T09:00:00Z",
        "--from",
        "UTC",
        "--to",
        "Mars/Olympus",
        "--output-format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON");
    assert_eq!(envelope["exit_code"], 2);
    assert_eq!(envelope["kind"], "invalid_timezone");
    assert_eq!(envelope["error"], "Invalid timezone: Mars/Olympus");
}

#[test]
fn convert_invalid_timezone_named_once() {
    for (from, to) in [("Mars/Olympus", "UTC"), ("UTC", "Mars/Olympus")] {
        let output = run(&[
            "convert",
            "--time",
            "2026-10-19T09:00:00Z",
            "--from",
            from,
            "--to",
            to,
        ]);

        assert_eq!(output.status.code(), Some(2));
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "Error: Invalid timezone: Mars/Olympus\n"
        );
    }
}

#[test]
fn leap_year() {
    assert_stdout(&["leap-year", "2024"], "true\n");
    assert_stdout(&["leap-year", "1900"], "false\n");
}

#[test]
fn invalid_output_format() {
    let output = run(&["leap-year", "2024", "--output-format", "yaml"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid output_format"), "stderr: {}", stderr);
}
