// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The permissive ISO 8601 timestamp grammar
//!
//! ```txt
//! date      := YYYY ("-" MM ("-" DD)?)?
//! time      := HH ":" MM (":" SS ("." FRACTION)?)?
//! separator := "T" | " "
//! timezone  := "Z" | (("+" | "-") HH (":"? MM)?)
//! timestamp := date (separator time timezone?)?
//! ```
//!
//! The date and time rules live in separate modules:
//!  - [`date`]
//!  - [`time`] (which also owns the timezone rule)
//!
//! Matching extracts components without interpreting them; range
//! validation and default filling happen in [`crate::timestamp`].

use winnow::{
    combinator::{opt, preceded},
    seq,
    token::one_of,
    ModalResult, Parser,
};

mod date;
mod time;

pub(crate) use date::Date;
pub(crate) use time::{Time, Zone};

/// The component set matched out of a timestamp string
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Components<'a> {
    pub(crate) date: Date,
    pub(crate) time: Option<Time<'a>>,
}

pub(crate) fn timestamp<'a>(input: &mut &'a str) -> ModalResult<Components<'a>> {
    seq!(Components {
        date: date::parse,
        time: opt(preceded(separator, time::parse)),
    })
    .parse_next(input)
}

/// Parse the separator between date and time
fn separator(input: &mut &str) -> ModalResult<char> {
    one_of(['T', ' ']).parse_next(input)
}
