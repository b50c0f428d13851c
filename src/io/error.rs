//! # Parse errors
//!
//! Reading text can fail in two ways: the text is not an integer or a pair of
//! integers at all, or it is but the pair doesn't describe a rational number because
//! the denominator is zero.
use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};

use num::bigint::ParseBigIntError;

pub use crate::rational::InvalidArgument;

/// Result of reading text that should describe a rational number.
pub type ParseResult<T> = Result<T, Parse>;

/// Text could not be read as a rational number.
#[derive(Debug)]
pub enum Parse {
    /// A numerator or denominator was not a valid integer.
    Integer {
        /// The part of the input that failed to parse.
        text: String,
        /// The underlying integer parse failure.
        source: ParseBigIntError,
    },
    /// Both parts were valid integers, but the denominator was zero.
    InvalidArgument(InvalidArgument),
}

impl Parse {
    /// Wrap an integer parse failure together with the text that caused it.
    pub(crate) fn integer(source: ParseBigIntError, text: &str) -> Self {
        Self::Integer {
            text: text.to_string(),
            source,
        }
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { text, source } => {
                write!(f, "Failed to parse \"{}\" as an integer: {}.", text, source)
            },
            Self::InvalidArgument(error) => error.fmt(f),
        }
    }
}

impl error::Error for Parse {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Integer { source, .. } => Some(source),
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<InvalidArgument> for Parse {
    fn from(error: InvalidArgument) -> Self {
        Self::InvalidArgument(error)
    }
}
