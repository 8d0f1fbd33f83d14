// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse the time-of-day and timezone portion of a timestamp
//!
//! The accepted shape is `HH:MM[:SS[.FRACTION]]` followed by an optional
//! timezone marker. Hour, minute and second require exactly two digits.
//! The marker is either the `Z` shorthand for UTC or an explicit offset:
//! sign and two hour digits, optionally followed by two minute digits with
//! or without a separating colon (`+02:30`, `-0730`, `+07`).
//!
//! An absent marker is not a parse failure; it leaves the time
//! timezone-naive, to be resolved against a default during building.

use winnow::{
    ascii::digit1,
    combinator::{alt, opt, preceded},
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Time<'a> {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    /// Fractional-second digits, exactly as written
    pub(crate) fraction: Option<&'a str>,
    pub(crate) zone: Option<Zone<'a>>,
}

/// A timezone marker
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum Zone<'a> {
    Utc,
    Fixed {
        negative: bool,
        hours: u32,
        minutes: u32,
        /// The source text of the offset, kept as its display name
        text: &'a str,
    },
}

pub(crate) fn parse<'a>(input: &mut &'a str) -> ModalResult<Time<'a>> {
    (
        two_digits,
        preceded(':', two_digits),
        opt((preceded(':', two_digits), opt(preceded('.', digit1)))),
        opt(zone),
    )
        .map(|(hour, minute, rest, zone)| {
            let (second, fraction) = rest.unwrap_or((0, None));
            Time {
                hour,
                minute,
                second,
                fraction,
                zone,
            }
        })
        .parse_next(input)
}

/// Parse a timezone marker
fn zone<'a>(input: &mut &'a str) -> ModalResult<Zone<'a>> {
    alt(('Z'.value(Zone::Utc), offset)).parse_next(input)
}

/// Parse an explicit offset, capturing the matched text
fn offset<'a>(input: &mut &'a str) -> ModalResult<Zone<'a>> {
    (sign, two_digits, opt(preceded(opt(':'), two_digits)))
        .with_taken()
        .map(|((negative, hours, minutes), text)| Zone::Fixed {
            negative,
            hours,
            minutes: minutes.unwrap_or(0),
            text,
        })
        .parse_next(input)
}

/// Parse the plus or minus character and return whether it was negative
fn sign(input: &mut &str) -> ModalResult<bool> {
    alt(('+'.value(false), '-'.value(true))).parse_next(input)
}

/// Parse a time component with exactly two digits
fn two_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(2..=2, AsChar::is_dec_digit)
        .try_map(|x: &str| x.parse())
        .parse_next(input)
}
