//! Conversion utilities.

use crate::common::util;
use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::rational::Rational;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

// rendering context wide enough for any binary double
const DOUBLE_CTX: Context = Context::new(64, RoundingMode::HalfEven);

/// Fallible conversion into an exact rational.
///
/// Implemented for machine integers, big integers, decimals, floating point
/// values, and `Rational` itself, so heterogeneous arguments can be mixed in
/// [`Rational::ratio`].
pub trait ToRational {
    /// Converts `self` to a `Rational` without loss.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` has no exact rational representation, e.g. a
    ///    floating point NaN or infinity.
    fn to_rational(&self) -> Result<Rational, Error>;
}

impl<T: ToRational + ?Sized> ToRational for &T {
    fn to_rational(&self) -> Result<Rational, Error> {
        (**self).to_rational()
    }
}

macro_rules! impl_from_int {
    ($($t:ty)*) => {
        $(
            impl ToRational for $t {
                fn to_rational(&self) -> Result<Rational, Error> {
                    Ok(Rational::from_integer(BigInt::from(*self)))
                }
            }

            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Rational::from_integer(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl ToRational for Rational {
    fn to_rational(&self) -> Result<Rational, Error> {
        Ok(self.clone())
    }
}

impl ToRational for BigInt {
    fn to_rational(&self) -> Result<Rational, Error> {
        Ok(Rational::from_integer(self.clone()))
    }
}

impl ToRational for BigUint {
    fn to_rational(&self) -> Result<Rational, Error> {
        Ok(Rational::from_integer(BigInt::from(self.clone())))
    }
}

impl ToRational for BigDecimal {
    fn to_rational(&self) -> Result<Rational, Error> {
        Ok(Rational::from(self.clone()))
    }
}

impl ToRational for f64 {
    fn to_rational(&self) -> Result<Rational, Error> {
        Rational::try_from(*self)
    }
}

impl ToRational for f32 {
    fn to_rational(&self) -> Result<Rational, Error> {
        Rational::try_from(*self)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

impl From<BigUint> for Rational {
    fn from(n: BigUint) -> Self {
        Rational::from_integer(BigInt::from(n))
    }
}

impl From<BigDecimal> for Rational {
    fn from(d: BigDecimal) -> Self {
        let (unscaled, scale) = d.into_bigint_and_exponent();
        if scale >= 0 {
            // unscaled * 10^-scale
            Rational::reduced(unscaled, util::ten_pow(scale as usize))
        } else {
            Rational::from_integer(unscaled * util::ten_pow(scale.unsigned_abs() as usize))
        }
    }
}

impl TryFrom<f64> for Rational {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self, Error> {
        let d = BigDecimal::try_from(f).map_err(|_| Error::InvalidArgument)?;
        Ok(Rational::from(d))
    }
}

impl TryFrom<f32> for Rational {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self, Error> {
        let d = BigDecimal::try_from(f).map_err(|_| Error::InvalidArgument)?;
        Ok(Rational::from(d))
    }
}

impl Rational {
    /// Constructs the exact ratio of two values, each convertible to a rational.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `den` converts to zero.
    ///  - InvalidArgument: either value has no exact rational representation.
    pub fn ratio<N, D>(num: N, den: D) -> Result<Self, Error>
    where
        N: ToRational,
        D: ToRational,
    {
        num.to_rational()?.div(&den.to_rational()?)
    }

    /// Renders `self` as a decimal with the precision and rounding mode of `ctx`.
    ///
    /// The quotient is computed with three extra digits, a sticky digit absorbs
    /// any remainder so that directed rounding sees the inexactness, and the
    /// result is rounded to `ctx` and normalized.
    pub fn to_decimal(&self, ctx: &Context) -> BigDecimal {
        if self.numer().is_zero() {
            return BigDecimal::zero();
        }

        let dn = util::decimal_digits(self.numer());
        let dd = util::decimal_digits(self.denom());
        let shift = ctx.precision() + 3 + dd.saturating_sub(dn);

        let (mut q, r) = (self.numer() * util::ten_pow(shift)).div_rem(self.denom());
        if !r.is_zero() && q.is_multiple_of(&BigInt::from(10)) {
            // sticky digit, so directed rounding sees the dropped remainder
            q += self.numer().signum();
        }

        BigDecimal::new(q, shift as i64)
            .with_precision_round(util::prec(ctx.precision()), ctx.rounding_mode().to_bigdecimal())
            .normalized()
    }

    /// Truncates `self` to an integer, discarding any fractional part.
    pub fn to_bigint(&self) -> BigInt {
        self.numer() / self.denom()
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_bigint().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_bigint().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_bigint().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_bigint().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        self.to_decimal(&DOUBLE_CTX).to_f64()
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_decimal(&DOUBLE_CTX).to_f32()
    }
}
