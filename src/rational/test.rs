use std::cmp::Ordering;

use itertools::iproduct;
use num::bigint::BigInt;
use num::{Integer, One, Signed, Zero};

use crate::R;
use crate::rational::Rational;

#[test]
fn construction_reduces() {
    assert_eq!(R!(2, 4), R!(1, 2));
    assert_eq!(R!(117, 1098), R!(13, 122));
    assert_eq!(R!(2_000_000_000_i64, 4_000_000_000_i64), R!(1, 2));
}

#[test]
fn construction_moves_sign_to_numerator() {
    assert_eq!(R!(-2, 4).numerator(), &BigInt::from(-1));
    assert_eq!(R!(-2, 4).denominator(), &BigInt::from(2));
    assert_eq!(R!(2, -4), R!(-1, 2));
    assert_eq!(R!(-2, -4), R!(1, 2));
}

#[test]
fn construction_collapses_zero() {
    assert_eq!(R!(0, 7), R!(0));
    assert_eq!(R!(0, -7), R!(0));
    assert_eq!(R!(0, 7).denominator(), &BigInt::one());
}

#[test]
fn construction_rejects_zero_denominator() {
    assert!(Rational::new(1, 0).is_err());
    assert!(Rational::new(0, 0).is_err());
    assert!(Rational::new(-5, 0).is_err());
}

#[test]
fn scaled_pairs_are_equal() {
    for (numerator, denominator, scale) in iproduct!(-6_i64..=6, 1..=6, -5..=5) {
        if scale == 0 {
            continue;
        }

        assert_eq!(
            Rational::new(numerator * scale, denominator * scale).unwrap(),
            R!(numerator, denominator),
        );
    }
}

#[test]
fn canonical_form_invariants() {
    for (numerator, denominator) in iproduct!(-8_i64..=8, -8..=8) {
        if denominator == 0 {
            continue;
        }

        let value = Rational::new(numerator, denominator).unwrap();
        assert!(value.denominator() > &BigInt::zero());
        assert!(value.numerator().gcd(value.denominator()).is_one());
    }
}

#[test]
fn addition() {
    assert_eq!(&R!(1, 2) + &R!(1, 3), R!(5, 6));
    assert_eq!(R!(1, 2) + R!(-1, 2), R!(0));
    assert_eq!(R!(2, 3) + R!(0, 5), R!(2, 3));
}

#[test]
fn subtraction() {
    assert_eq!(&R!(1, 2) - &R!(1, 3), R!(1, 6));
    assert_eq!(R!(1, 3) - R!(1, 2), R!(-1, 6));
}

#[test]
fn multiplication() {
    assert_eq!(&R!(1, 2) * &R!(1, 3), R!(1, 6));
    assert_eq!(R!(2, 3) * R!(3, 2), Rational::one());
    assert_eq!(R!(-2, 3) * R!(3, 4), R!(-1, 2));
}

#[test]
fn division() {
    assert_eq!(&R!(1, 2) / &R!(1, 3), R!(3, 2));
    assert_eq!(R!(1, 2).checked_div(&R!(-1, 3)).unwrap(), R!(-3, 2));
}

#[test]
fn division_by_zero_fails() {
    for denominator in 1_i64..=5 {
        let zero = Rational::new(0, denominator).unwrap();
        assert!(R!(7, 3).checked_div(&zero).is_err());
    }
}

#[test]
#[should_panic]
fn division_operator_by_zero_panics() {
    let _ = R!(1, 2) / R!(0);
}

#[test]
fn negation() {
    assert_eq!(-R!(1, 2), R!(-1, 2));
    assert_eq!(-&R!(-1, 2), R!(1, 2));
    assert_eq!(-R!(0), R!(0));
    assert_eq!(-(-R!(3, 4)), R!(3, 4));
}

#[test]
fn ordering() {
    assert!(R!(1, 2) < R!(2, 3));
    assert!(R!(-1, 2) < R!(1, 3));
    assert!(R!(-1, 2) > R!(-2, 3));
    assert_eq!(R!(1, 2).cmp(&R!(2, 4)), Ordering::Equal);

    let third = R!(1, 3);
    let two_thirds = R!(2, 3);
    assert!((third..=two_thirds).contains(&R!(1, 2)));
    assert!(!(R!(1, 3)..=R!(2, 3)).contains(&R!(3, 4)));
}

#[test]
fn ordering_matches_sign_of_difference() {
    for (a, b, c, d) in iproduct!(-4_i64..=4, 1..=4, -4..=4, 1..=4) {
        let left = R!(a, b);
        let right = R!(c, d);
        let difference = &left + &-&right;

        match left.cmp(&right) {
            Ordering::Less => assert!(difference.numerator().is_negative()),
            Ordering::Equal => assert!(difference.numerator().is_zero()),
            Ordering::Greater => assert!(difference.numerator().is_positive()),
        }
    }
}

#[test]
fn zero_and_one() {
    assert!(Rational::zero().is_zero());
    assert!(R!(0, 17).is_zero());
    assert!(!R!(1, 17).is_zero());
    assert_eq!(Rational::zero(), R!(0));
    assert_eq!(Rational::one(), R!(3, 3));
    assert_eq!(&R!(2, 3) + &Rational::zero(), R!(2, 3));
    assert_eq!(&R!(2, 3) * &Rational::one(), R!(2, 3));
}

#[test]
fn from_integers() {
    assert_eq!(Rational::from(2), R!(2, 1));
    assert_eq!(Rational::from(-3_i64), R!(-3, 1));
    assert_eq!(Rational::from(BigInt::from(5)), R!(5, 1));
    assert!(Rational::from(7_u32).is_integer());
    assert!(!R!(1, 2).is_integer());
}

#[test]
fn widening_avoids_overflow() {
    let large = i64::MAX;
    let value = Rational::new(large, 2).unwrap();
    let doubled = &value + &value;
    assert_eq!(doubled, Rational::from_integer(large));
}
