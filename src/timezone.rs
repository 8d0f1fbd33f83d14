// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The fixed-offset timezone value type

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// A timezone at a constant offset from UTC
///
/// The offset is a plain number of minutes east of UTC, negative for
/// western offsets, and deliberately not clamped to any range. Equality
/// and hashing are keyed on the offset alone, so two values with different
/// display names but the same offset compare equal:
///
/// ```
/// use parse_iso8601::FixedOffset;
///
/// assert_eq!(FixedOffset::new(2, 0, "test"), FixedOffset::new(2, 0, "+02:00"));
/// ```
///
/// The value is two plain fields with no captured state, so cloning and
/// serializing round-trip losslessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedOffset {
    minutes: i32,
    name: Cow<'static, str>,
}

/// The UTC timezone
///
/// Timezone-naive input and the `Z` shorthand both resolve to this value
/// (unless a different default is supplied for the naive case).
pub const UTC: FixedOffset = FixedOffset {
    minutes: 0,
    name: Cow::Borrowed("UTC"),
};

impl FixedOffset {
    /// Creates an offset of `hours * 60 + minutes` minutes east of UTC.
    ///
    /// Both arguments are signed: a western offset of 2:30 is
    /// `FixedOffset::new(-2, -30, "-02:30")`.
    pub fn new(hours: i32, minutes: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            minutes: hours * 60 + minutes,
            name: name.into(),
        }
    }

    /// Creates an offset from a total number of minutes east of UTC, with
    /// a display name synthesized in `±HH:MM` form.
    pub fn from_minutes(minutes: i32) -> Self {
        let sign = if minutes < 0 { '-' } else { '+' };
        let magnitude = minutes.unsigned_abs();
        Self {
            minutes,
            name: Cow::Owned(format!(
                "{sign}{:02}:{:02}",
                magnitude / 60,
                magnitude % 60
            )),
        }
    }

    /// The total offset from UTC
    pub fn utc_offset(&self) -> TimeDelta {
        TimeDelta::minutes(self.minutes.into())
    }

    /// The daylight-saving adjustment, which is always zero for a fixed
    /// offset
    pub fn dst_offset(&self) -> TimeDelta {
        TimeDelta::zero()
    }

    /// The total offset from UTC in minutes
    pub fn offset_minutes(&self) -> i32 {
        self.minutes
    }

    /// The display name
    ///
    /// For parsed offsets this is the literal source text, so an offset
    /// written `+07` is named `"+07"`, not `"+07:00"`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for FixedOffset {
    fn eq(&self, other: &Self) -> bool {
        self.minutes == other.minutes
    }
}

impl Eq for FixedOffset {}

impl Hash for FixedOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minutes.hash(state);
    }
}

impl Display for FixedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
