//! # Rational numbers
//!
//! An immutable rational number as a pair of arbitrary precision integers. The pair is
//! normalized once, at construction, after which the invariants hold for the lifetime
//! of the value.
use std::cmp::Ordering;
use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::bigint::BigInt;
use num::{Integer, One, Signed, Zero};

mod macros;

#[cfg(test)]
mod test;

/// An exact rational number.
///
/// Every live value is in canonical form: the denominator is positive and coprime with
/// the numerator, so the sign of the number is the sign of the numerator and each
/// rational value has exactly one representation. Equality, ordering and hashing are
/// defined on that representation and agree with the represented values.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Build the canonical rational for a fraction.
    ///
    /// Fixed width integer arguments are widened to `BigInt` before any reduction
    /// happens, so large inputs can't overflow on the way in.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any integer, as long as it is not zero. The sign may be
    /// negative; it is moved onto the numerator.
    ///
    /// # Return value
    ///
    /// The canonical `Rational` equal to `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the denominator is zero. A fraction with denominator
    /// zero is undefined, not infinity, and there is no fallback value.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, InvalidArgument> {
        let (numerator, denominator) = (numerator.into(), denominator.into());

        if denominator.is_zero() {
            return Err(InvalidArgument::new(format!(
                "\"{}/0\" is not a rational number, the denominator can't be zero.",
                numerator,
            )));
        }

        Ok(Self::normalized(numerator, denominator))
    }

    /// Build a whole number, with denominator one.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Bring a fraction with nonzero denominator into canonical form.
    ///
    /// The greatest common divisor is divided out of both terms, which is exact, and
    /// the sign is moved onto the numerator by negating both terms if the reduced
    /// denominator is negative. `gcd(0, d) == |d|`, so a zero numerator collapses to
    /// the canonical `0/1` without a separate case.
    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let gcd = numerator.gcd(&denominator);
        let (numerator, denominator) = (numerator / &gcd, denominator / gcd);

        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// The numerator. Carries the sign of the number and can be zero.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator. Always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the value is a whole number, that is, the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Divide by another rational.
    ///
    /// The fallible counterpart of the `/` operator.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `other` is zero, as the quotient's denominator would be
    /// zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, InvalidArgument> {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics when `rhs` is zero. Use [`Rational::checked_div`] to handle that case.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

macro_rules! forward_owned_binop {
    ($operator:ident, $method:ident) => {
        impl $operator for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $operator<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $operator<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                self.$method(&rhs)
            }
        }
    }
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);

impl Neg for &Rational {
    type Output = Rational;

    /// Negating a canonical pair keeps it canonical, so the reduction pass is skipped.
    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.numerator = -self.numerator;
        self
    }
}

impl Ord for Rational {
    /// Compare by cross multiplication.
    ///
    /// Multiplying both sides through by the two denominators preserves the order,
    /// as both are positive. On unnormalized fractions this would need a sign
    /// correction.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

macro_rules! from_integer {
    ($t:ty) => {
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Self::from_integer(value)
            }
        }
    }
}

from_integer!(BigInt);
from_integer!(i32);
from_integer!(i64);
from_integer!(u32);

/// An operation asked for a rational with a zero denominator.
///
/// Raised at direct construction, and by division when the divisor is zero. It is
/// never recovered from internally; the caller decides how to proceed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidArgument {
    description: String,
}

impl InvalidArgument {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl error::Error for InvalidArgument {}
