//! # Exact rational arithmetic
//!
//! A rational number type over the arbitrary precision integers of the `num` crate.
//! Values are brought into canonical form when they are built, with a positive
//! denominator that shares no factor with the numerator, and are never mutated
//! afterwards. Each rational value thus has exactly one representation, and equality
//! and ordering on representations coincide with equality and ordering of the values
//! they represent.
//!
//! Numbers are built with [`Rational::new`], read from text with [`io::parse`] and
//! written through `Display`. Arithmetic goes through the standard operators, or
//! through [`Rational::checked_div`] when the divisor might be zero.
#![warn(missing_docs)]

pub use rational::InvalidArgument;
pub use rational::Rational;

pub mod io;
pub mod rational;
