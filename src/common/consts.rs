//! Static constants.

use crate::rational::Rational;
use lazy_static::lazy_static;

lazy_static! {
    /// Zero.
    pub static ref ZERO: Rational = Rational::from(0);

    /// One.
    pub static ref ONE: Rational = Rational::from(1);

    /// Two.
    pub static ref TWO: Rational = Rational::from(2);

    /// Ten.
    pub static ref TEN: Rational = Rational::from(10);

    /// One half.
    pub static ref HALF: Rational = Rational::from_parts(1, 2).expect("Constant HALF initialization.");

    /// One quarter.
    pub static ref QUARTER: Rational = Rational::from_parts(1, 4).expect("Constant QUARTER initialization.");

    /// One third.
    pub static ref THIRD: Rational = Rational::from_parts(1, 3).expect("Constant THIRD initialization.");

    /// One tenth.
    pub static ref TENTH: Rational = Rational::from_parts(1, 10).expect("Constant TENTH initialization.");
}
