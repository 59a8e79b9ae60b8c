// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Human-friendly rendering of elapsed wall time.
//!
//! Under a minute the result is fractional seconds (`"4.52 seconds"`);
//! from a minute on it is at most three of years, weeks, days, hours,
//! minutes and seconds, joined as `"2 hours, 5 minutes and 3.5 seconds"`.

use std::time::Duration;

const MAX_UNITS: usize = 3;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Whole-count units, largest first. A year is 52 weeks.
const UNITS: &[(u128, &str, &str)] = &[
    (31_449_600, "year", "years"),
    (604_800, "week", "weeks"),
    (86_400, "day", "days"),
    (3_600, "hour", "hours"),
    (60, "minute", "minutes"),
];

/// Two decimals, then trailing zeros and a trailing dot dropped.
fn round_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0');
    text.trim_end_matches('.').to_string()
}

/// The singular is used whenever the count's integer part is exactly one.
fn pluralize(count: &str, singular: &str, plural: &str) -> String {
    let whole = count.parse::<f64>().map(f64::floor).unwrap_or(0.0);
    let unit = if whole == 1.0 { singular } else { plural };
    format!("{} {}", count, unit)
}

fn concatenate(mut items: Vec<String>) -> String {
    match items.pop() {
        Some(last) if !items.is_empty() => format!("{} and {}", items.join(", "), last),
        Some(last) => last,
        None => String::new(),
    }
}

pub fn format_timespan(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    if seconds < 60.0 {
        return pluralize(&round_number(seconds), "second", "seconds");
    }

    let mut remaining = elapsed.as_nanos();
    let mut parts = Vec::new();

    for (divider, singular, plural) in UNITS {
        let divider_nanos = divider * NANOS_PER_SECOND;
        let count = remaining / divider_nanos;
        remaining %= divider_nanos;
        if count != 0 {
            parts.push(pluralize(&count.to_string(), singular, plural));
        }
    }

    let rest = round_number(remaining as f64 / NANOS_PER_SECOND as f64);
    if rest != "0" {
        parts.push(pluralize(&rest, "second", "seconds"));
    }

    parts.truncate(MAX_UNITS);
    concatenate(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timespan() {
        struct TestCase {
            seconds: f64,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase { seconds: 0.0, expected: "0 seconds" },
            TestCase { seconds: 0.5, expected: "0.5 seconds" },
            TestCase { seconds: 1.0, expected: "1 second" },
            TestCase { seconds: 1.5, expected: "1.5 second" },
            TestCase { seconds: 4.5, expected: "4.5 seconds" },
            TestCase { seconds: 42.123, expected: "42.12 seconds" },
            TestCase { seconds: 59.2, expected: "59.2 seconds" },
            TestCase { seconds: 60.0, expected: "1 minute" },
            TestCase { seconds: 125.0, expected: "2 minutes and 5 seconds" },
            TestCase { seconds: 3000.0, expected: "50 minutes" },
            TestCase { seconds: 7206.0, expected: "2 hours and 6 seconds" },
            TestCase { seconds: 3661.25, expected: "1 hour, 1 minute and 1.25 second" },
            TestCase { seconds: 90061.0, expected: "1 day, 1 hour and 1 minute" },
            TestCase { seconds: 31_449_600.0 + 604_800.0 * 2.0, expected: "1 year and 2 weeks" },
        ];

        for case in test_cases {
            assert_eq!(
                format_timespan(Duration::from_secs_f64(case.seconds)),
                case.expected,
                "{} seconds",
                case.seconds
            );
        }
    }

    #[test]
    fn test_round_number() {
        assert_eq!(round_number(10.0), "10");
        assert_eq!(round_number(2.50), "2.5");
        assert_eq!(round_number(0.004), "0");
    }
}
