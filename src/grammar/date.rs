// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Parse the date portion of a timestamp
//!
//! The accepted shape is `YYYY[-MM[-DD]]`. The 4-digit year is mandatory;
//! month and day are optional but nested, so a day cannot appear without a
//! month. Month and day accept one or two digits: `2007-5-7` is as valid
//! as `2007-05-07`.

use winnow::{
    combinator::{opt, preceded},
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Date {
    pub(crate) year: i32,
    pub(crate) month: Option<u32>,
    pub(crate) day: Option<u32>,
}

pub(crate) fn parse(input: &mut &str) -> ModalResult<Date> {
    (
        year,
        opt((preceded('-', month_or_day), opt(preceded('-', month_or_day)))),
    )
        .map(|(year, rest)| {
            let (month, day) = match rest {
                Some((month, day)) => (Some(month), day),
                None => (None, None),
            };
            Date { year, month, day }
        })
        .parse_next(input)
}

/// Parse a year, which must have exactly four digits
fn year(input: &mut &str) -> ModalResult<i32> {
    take_while(4..=4, AsChar::is_dec_digit)
        .try_map(|x: &str| x.parse())
        .parse_next(input)
}

/// Parse a month or day number with one or two digits
///
/// Range checking is left to calendar construction, so `2012-13` fails
/// while building the timestamp rather than here.
fn month_or_day(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, AsChar::is_dec_digit)
        .try_map(|x: &str| x.parse())
        .parse_next(input)
}
