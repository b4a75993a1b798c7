//! Human-readable duration formatting.
//!
//! Durations are split into days, hours, minutes and seconds using fixed
//! ratios (a day is always 86 400 seconds here, independent of any calendar)
//! and rendered as an English phrase such as `2 days, 3 hours and 5 seconds`.

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Fixed-ratio decomposition of a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DurationParts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl DurationParts {
    fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// `"<n> <unit>"` for every non-zero unit, largest unit first.
    fn tokens(self) -> Vec<String> {
        [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
        .into_iter()
        .filter(|(count, _)| *count != 0)
        .map(|(count, unit)| format!("{} {}{}", count, unit, pluralize(count)))
        .collect()
    }
}

fn pluralize(count: u64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn join_tokens(mut tokens: Vec<String>) -> String {
    match tokens.len() {
        0 => "0 seconds".to_string(),
        1 => tokens.remove(0),
        _ => {
            let last = tokens.pop().unwrap_or_default();
            format!("{} and {}", tokens.join(", "), last)
        }
    }
}

/// Format a duration as a natural-language phrase.
///
/// Sub-second precision is truncated. Negative durations are rendered as
/// their magnitude with a leading `-`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use temporalis_core::format::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::zero()), "0 seconds");
/// assert_eq!(format_duration(TimeDelta::hours(27)), "1 day and 3 hours");
/// assert_eq!(
///     format_duration(TimeDelta::seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5)),
///     "2 days, 3 hours, 4 minutes and 5 seconds"
/// );
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let text = join_tokens(DurationParts::from_seconds(seconds.unsigned_abs()).tokens());

    if seconds < 0 {
        format!("-{}", text)
    } else {
        text
    }
}

/// Format a [`std::time::Duration`] as a natural-language phrase.
pub fn format_std_duration(duration: std::time::Duration) -> String {
    join_tokens(DurationParts::from_seconds(duration.as_secs()).tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_table() {
        let cases = [
            (TimeDelta::zero(), "0 seconds"),
            (TimeDelta::seconds(1), "1 second"),
            (TimeDelta::seconds(2), "2 seconds"),
            (TimeDelta::minutes(1), "1 minute"),
            (TimeDelta::minutes(2), "2 minutes"),
            (TimeDelta::hours(1), "1 hour"),
            (TimeDelta::hours(2), "2 hours"),
            (TimeDelta::hours(24), "1 day"),
            (TimeDelta::hours(48), "2 days"),
            (TimeDelta::hours(25), "1 day and 1 hour"),
            (TimeDelta::hours(26), "1 day and 2 hours"),
            (TimeDelta::hours(27), "1 day and 3 hours"),
            (TimeDelta::hours(28), "1 day and 4 hours"),
            (
                TimeDelta::days(2)
                    + TimeDelta::hours(3)
                    + TimeDelta::minutes(4)
                    + TimeDelta::seconds(5),
                "2 days, 3 hours, 4 minutes and 5 seconds",
            ),
        ];

        for (duration, expected) in cases {
            assert_eq!(format_duration(duration), expected, "for {:?}", duration);
        }
    }

    #[test]
    fn under_a_minute_is_seconds_only() {
        for n in 0..60 {
            let expected = match n {
                0 => "0 seconds".to_string(),
                1 => "1 second".to_string(),
                _ => format!("{} seconds", n),
            };
            assert_eq!(format_duration(TimeDelta::seconds(n)), expected);
        }
    }

    #[test]
    fn token_count_matches_non_zero_units() {
        let units = [86_400_i64, 3_600, 60, 1];

        // Every subset of {day, hour, minute, second}
        for mask in 1..16_u32 {
            let seconds: i64 = units
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, unit)| unit * 2)
                .sum();
            let text = format_duration(TimeDelta::seconds(seconds));
            let tokens = text.split(", ").flat_map(|part| part.split(" and ")).count();

            assert_eq!(tokens, mask.count_ones() as usize, "for {}", text);
        }
    }

    #[test]
    fn skips_zero_units_in_the_middle() {
        assert_eq!(
            format_duration(TimeDelta::days(1) + TimeDelta::seconds(1)),
            "1 day and 1 second"
        );
        assert_eq!(
            format_duration(TimeDelta::hours(3) + TimeDelta::minutes(1) + TimeDelta::seconds(9)),
            "3 hours, 1 minute and 9 seconds"
        );
    }

    #[test]
    fn truncates_sub_second_precision() {
        assert_eq!(format_duration(TimeDelta::milliseconds(1_999)), "1 second");
        assert_eq!(format_duration(TimeDelta::milliseconds(999)), "0 seconds");
    }

    #[test]
    fn negative_durations_keep_sign() {
        assert_eq!(format_duration(TimeDelta::seconds(-90)), "-1 minute and 30 seconds");
        assert_eq!(format_duration(TimeDelta::hours(-24)), "-1 day");
    }

    #[test]
    fn minimum_duration_does_not_overflow() {
        let text = format_duration(TimeDelta::MIN);
        assert!(text.starts_with('-'));
        assert!(text.contains("days"));
    }

    #[test]
    fn std_duration() {
        assert_eq!(
            format_std_duration(std::time::Duration::from_secs(3_661)),
            "1 hour, 1 minute and 1 second"
        );
    }

    #[test]
    fn parts_decomposition() {
        let parts = DurationParts::from_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(
            parts,
            DurationParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            }
        );
    }
}
