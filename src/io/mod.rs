//! # Reading and writing rationals
//!
//! The canonical text form of a rational is `"n"` when the denominator is one and
//! `"n/d"` otherwise, with the sign, if any, on the numerator. Parsing also accepts
//! spellings that are not canonical, such as `"117/1098"` or `"2/-4"`; the value is
//! normalized on the way in, so displaying it again always produces the canonical
//! form.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num::bigint::BigInt;
use num::One;

use crate::io::error::{Parse, ParseResult};
use crate::rational::Rational;

pub mod error;


/// Parse the text form of a rational number.
///
/// # Arguments
///
/// * `text`: Either a single optionally signed integer, such as `"-4"`, or two of
/// them separated by a slash, such as `"117/1098"`. A single integer is read as a
/// fraction over one. The text is split on the first slash; surrounding whitespace is
/// not accepted.
///
/// # Return value
///
/// The canonical `Rational` equal to the fraction the text describes.
///
/// # Errors
///
/// `Parse::Integer` when either side of the slash is not a valid integer, and
/// `Parse::InvalidArgument` when the denominator is zero.
pub fn parse(text: &str) -> ParseResult<Rational> {
    let (numerator, denominator) = match text.split_once('/') {
        None => (integer(text)?, BigInt::one()),
        Some((numerator, denominator)) => (integer(numerator)?, integer(denominator)?),
    };

    Ok(Rational::new(numerator, denominator)?)
}

/// Parse one side of the fraction as an arbitrary precision integer.
fn integer(text: &str) -> ParseResult<BigInt> {
    text.parse().map_err(|error| Parse::integer(error, text))
}

impl FromStr for Rational {
    type Err = Parse;

    fn from_str(text: &str) -> ParseResult<Self> {
        parse(text)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
