// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! A Rust crate for parsing ISO 8601 timestamp strings — including the
//! permissive superset of the standard found in real-world data — and
//! converting them to timezone-aware [`Timestamp`] values.
//!
//! Accepted inputs include:
//!
//! * full timestamps, e.g. "2006-10-11T00:14:33Z"
//! * dates with trailing components omitted, e.g. "2012-12", "2012"
//! * single-digit month and day, e.g. "2007-5-7T11:43:55.328Z"
//! * a space instead of the `T` separator
//! * offsets with or without a colon or minutes, e.g. "+02:30", "-0730", "+07"
//!
//! Input without any timezone marker is not an error; it is resolved to
//! UTC, or to a caller-supplied default via [`parse_with_timezone`].
//!
//! Durations, week dates, ordinal dates, intervals, and named timezones
//! ("America/New_York") are out of scope.

use std::error::Error;
use std::fmt::{self, Display};

use winnow::Parser;

mod grammar;
mod timestamp;
mod timezone;

pub use timestamp::Timestamp;
pub use timezone::{FixedOffset, UTC};

/// The error returned for any failed parse.
///
/// A single kind covers both grammar mismatches and matched components
/// that do not form a valid calendar date-time; the offending input is
/// carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Grammar,
    Calendar,
}

impl ParseError {
    fn new(input: &str, kind: ErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }

    /// The input that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Grammar => {
                write!(
                    f,
                    "{:?} cannot be parsed as an ISO 8601 timestamp",
                    self.input
                )
            }
            ErrorKind::Calendar => {
                write!(f, "{:?} is not a valid calendar date-time", self.input)
            }
        }
    }
}

impl Error for ParseError {}

/// Parses a timestamp string, resolving timezone-naive input to UTC.
///
/// # Arguments
///
/// * `input` - A string slice holding the timestamp.
///
/// # Examples
///
/// ```
/// use parse_iso8601::{parse, UTC};
///
/// let d = parse("2006-10-11T00:14:33Z").unwrap();
/// assert_eq!(d.year(), 2006);
/// assert_eq!(d.minute(), 14);
/// assert_eq!(d.timezone(), &UTC);
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] when the input does not match the grammar, or
/// when the matched components are not a valid calendar date-time.
pub fn parse<S: AsRef<str>>(input: S) -> Result<Timestamp, ParseError> {
    parse_with_timezone(input, &UTC)
}

/// Parses a timestamp string, resolving timezone-naive input to
/// `default_timezone`.
///
/// Input carrying its own timezone marker is unaffected by the default:
///
/// ```
/// use parse_iso8601::{parse_with_timezone, FixedOffset, UTC};
///
/// let tz = FixedOffset::new(2, 0, "test");
/// let d = parse_with_timezone("2007-01-01T08:00:00", &tz).unwrap();
/// assert_eq!(d.timezone(), &tz);
///
/// let d = parse_with_timezone("2007-01-01T08:00:00Z", &tz).unwrap();
/// assert_eq!(d.timezone(), &UTC);
/// ```
///
/// # Errors
///
/// Returns [`ParseError`] under the same conditions as [`parse`].
pub fn parse_with_timezone<S: AsRef<str>>(
    input: S,
    default_timezone: &FixedOffset,
) -> Result<Timestamp, ParseError> {
    let input = input.as_ref();
    let components = grammar::timestamp
        .parse(input)
        .map_err(|_| ParseError::new(input, ErrorKind::Grammar))?;
    Timestamp::from_components(components, default_timezone)
        .ok_or_else(|| ParseError::new(input, ErrorKind::Calendar))
}

#[cfg(test)]
mod tests {
    fn fields(d: &crate::Timestamp) -> (i32, u32, u32, u32, u32, u32, u32) {
        (
            d.year(),
            d.month(),
            d.day(),
            d.hour(),
            d.minute(),
            d.second(),
            d.microsecond(),
        )
    }

    mod iso_8601 {
        use super::fields;
        use crate::{parse, UTC};

        #[test]
        fn test_t_sep() {
            let d = parse("2006-10-11T00:14:33Z").unwrap();
            assert_eq!(fields(&d), (2006, 10, 11, 0, 14, 33, 0));
            assert_eq!(d.timezone(), &UTC);
        }

        #[test]
        fn test_space_sep() {
            let d = parse("2007-06-23 06:40:34.00Z").unwrap();
            assert_eq!(fields(&d), (2007, 6, 23, 6, 40, 34, 0));
            assert_eq!(d.timezone(), &UTC);
        }

        #[test]
        fn test_date_only() {
            let d = parse("2006-10-20").unwrap();
            assert_eq!(fields(&d), (2006, 10, 20, 0, 0, 0, 0));
            assert_eq!(d.timezone(), &UTC);
        }

        #[test]
        fn test_date_no_day() {
            let d = parse("2012-12").unwrap();
            assert_eq!(fields(&d), (2012, 12, 1, 0, 0, 0, 0));
        }

        #[test]
        fn test_date_no_month() {
            let d = parse("2012").unwrap();
            assert_eq!(fields(&d), (2012, 1, 1, 0, 0, 0, 0));
        }

        #[test]
        fn test_single_digit_month_day() {
            let d = parse("2007-5-7T11:43:55.328Z").unwrap();
            assert_eq!(fields(&d), (2007, 5, 7, 11, 43, 55, 328_000));
            assert_eq!(d.timezone(), &UTC);
        }

        #[test]
        fn test_fraction_padding() {
            let d = parse("2006-10-20T15:34:56.123Z").unwrap();
            assert_eq!(d.microsecond(), 123_000);
        }
    }

    mod offsets {
        use super::fields;
        use crate::parse;

        #[test]
        fn test_positive_offset() {
            let d = parse("2006-10-20T15:34:56.123+02:30").unwrap();
            assert_eq!(fields(&d), (2006, 10, 20, 15, 34, 56, 123_000));
            assert_eq!(d.timezone().offset_minutes(), 150);
            assert_eq!(d.timezone().name(), "+02:30");
        }

        #[test]
        fn test_negative_offset() {
            // The sign negates hours and minutes both: -150, not -90.
            let d = parse("2006-10-20T15:34:56.123-02:30").unwrap();
            assert_eq!(d.timezone().offset_minutes(), -150);
            assert_eq!(d.timezone().name(), "-02:30");
        }

        #[test]
        fn test_two_digit_offset() {
            let d = parse("2010-07-01 00:01:20+07").unwrap();
            assert_eq!(fields(&d), (2010, 7, 1, 0, 1, 20, 0));
            assert_eq!(d.timezone().offset_minutes(), 420);
            assert_eq!(d.timezone().name(), "+07");
        }

        #[test]
        fn test_two_digit_negative_offset() {
            let d = parse("2011-07-27 21:05:12.843248-07").unwrap();
            assert_eq!(fields(&d), (2011, 7, 27, 21, 5, 12, 843_248));
            assert_eq!(d.timezone().offset_minutes(), -420);
            assert_eq!(d.timezone().name(), "-07");
        }

        #[test]
        fn test_colonless_offset() {
            let d = parse("2012-09-19T11:59:05+1000").unwrap();
            assert_eq!(d.timezone().offset_minutes(), 600);
            assert_eq!(d.timezone().name(), "+1000");
        }
    }

    mod defaults {
        use crate::{parse, parse_with_timezone, FixedOffset, UTC};

        #[test]
        fn test_no_timezone() {
            let d = parse("2007-01-01T08:00:00").unwrap();
            assert_eq!(d.timezone(), &UTC);
        }

        #[test]
        fn test_no_timezone_different_default() {
            let tz = FixedOffset::new(2, 0, "test offset");
            let d = parse_with_timezone("2007-01-01T08:00:00", &tz).unwrap();
            assert_eq!(d.timezone(), &tz);
            assert_eq!(d.timezone().name(), "test offset");
        }

        #[test]
        fn test_default_ignored_when_offset_present() {
            let tz = FixedOffset::new(2, 0, "test offset");
            let d = parse_with_timezone("2012-06-13 11:06:47-05:00", &tz).unwrap();
            assert_eq!(d.timezone().offset_minutes(), -300);
        }
    }

    mod invalid {
        use crate::parse;

        #[test]
        fn test_grammar_mismatch() {
            for s in ["", "23", "NotADate", "2006-10-20x", "2006/10/20", "20061020"] {
                let err = parse(s).unwrap_err();
                assert_eq!(err.input(), s);
            }
        }

        #[test]
        fn test_out_of_range_components() {
            for s in [
                "2012-13",
                "2012-00",
                "2012-04-31",
                "2013-02-29",
                "2006-10-20T25:34:56Z",
                "2006-10-20T15:60:56Z",
                "2006-10-20T15:34:60Z",
            ] {
                let err = parse(s).unwrap_err();
                assert_eq!(err.input(), s);
            }
        }

        #[test]
        fn test_error_display_carries_input() {
            let message = parse("NotADate").unwrap_err().to_string();
            assert!(message.contains("NotADate"), "message: {message}");
        }
    }

    #[test]
    fn test_deterministic() {
        let first = crate::parse("2006-10-20T15:34:56.123+02:30").unwrap();
        let second = crate::parse("2006-10-20T15:34:56.123+02:30").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_whole_input_must_match() {
        assert!(crate::parse("2012 and some trailing text").is_err());
        assert!(crate::parse("2007-5-7T11:43:55.328Z'").is_err());
    }

    /// Used to test example code presented in the README.
    mod readme_test {
        use crate::parse;

        #[test]
        fn test_readme_code() {
            let d = parse("2010-07-01 00:01:20+07").unwrap();

            assert_eq!(d.hour(), 0);
            assert_eq!(d.timezone().offset_minutes(), 420);
            assert_eq!(d.timezone().name(), "+07");
        }
    }
}
