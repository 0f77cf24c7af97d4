//! Rational number formatting and parsing.

use crate::defs::Error;
use crate::rational::Rational;
use bigdecimal::BigDecimal;
use core::fmt;
use core::str::FromStr;
use num_bigint::BigInt;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Parses either a fraction of two integers, like `-3/4`, or a decimal
    /// number in the notation accepted by `BigDecimal`, like `1.25` or `5e-3`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if let Some((num, den)) = s.split_once('/') {
            let num = BigInt::from_str(num.trim()).map_err(|_| Error::InvalidArgument)?;
            let den = BigInt::from_str(den.trim()).map_err(|_| Error::InvalidArgument)?;
            Self::from_parts(num, den)
        } else {
            let d = BigDecimal::from_str(s).map_err(|_| Error::InvalidArgument)?;
            Ok(Self::from(d))
        }
    }
}
