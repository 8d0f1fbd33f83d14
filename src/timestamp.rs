// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Building a timestamp value from matched components

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::grammar::{Components, Time, Zone};
use crate::timezone::{FixedOffset, UTC};

/// A parsed point in time with microsecond precision and a fixed-offset
/// timezone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    datetime: NaiveDateTime,
    timezone: FixedOffset,
}

impl Timestamp {
    /// Fills in defaults for omitted components, resolves the timezone,
    /// and validates the calendar fields.
    ///
    /// Returns `None` when the components do not form a valid calendar
    /// date-time (month 13, day 32, hour 25, minute 60, Feb 30, ...).
    pub(crate) fn from_components(
        components: Components<'_>,
        default_timezone: &FixedOffset,
    ) -> Option<Self> {
        let Components { date, time } = components;

        let (hour, minute, second, microsecond, zone) = match time {
            Some(Time {
                hour,
                minute,
                second,
                fraction,
                zone,
            }) => (
                hour,
                minute,
                second,
                fraction.map_or(0, fraction_to_microseconds),
                zone,
            ),
            None => (0, 0, 0, 0, None),
        };

        let timezone = match zone {
            Some(Zone::Utc) => UTC,
            Some(Zone::Fixed {
                negative,
                hours,
                minutes,
                text,
            }) => {
                // The sign negates the full offset magnitude, hours and
                // minutes both, and the source text becomes the name.
                let sign = if negative { -1 } else { 1 };
                FixedOffset::new(sign * hours as i32, sign * minutes as i32, text.to_owned())
            }
            None => default_timezone.clone(),
        };

        let datetime = NaiveDate::from_ymd_opt(
            date.year,
            date.month.unwrap_or(1),
            date.day.unwrap_or(1),
        )?
        .and_hms_micro_opt(hour, minute, second, microsecond)?;

        Some(Self { datetime, timezone })
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.datetime.nanosecond() / 1_000
    }

    /// The timezone the input carried, or the default the naive input was
    /// resolved against
    pub fn timezone(&self) -> &FixedOffset {
        &self.timezone
    }
}

/// Converts a fractional-second digit string to microseconds.
///
/// The digits are right-padded with zeros to six places; anything past
/// six is truncated. `"123"` becomes 123000, `"843248"` stays 843248.
fn fraction_to_microseconds(digits: &str) -> u32 {
    let mut micros = 0;
    for &byte in digits.as_bytes().iter().take(6) {
        micros = micros * 10 + u32::from(byte - b'0');
    }
    micros * 10u32.pow(6u32.saturating_sub(digits.len() as u32))
}
