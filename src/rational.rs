//! Exact rational number.

use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::common::util;
use crate::ctx::Context;
use crate::defs::Error;
use crate::ops::root;
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use core::ops::Add;
use core::ops::Mul;
use core::ops::Neg;
use core::ops::Sub;
use num_bigint::BigInt;
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::One;
use num_traits::Pow;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

#[cfg(feature = "random")]
use num_bigint::RandBigInt;

/// Guard digits carried by `drop_to` beyond the target context.
const GUARD_DIGITS: usize = 2;

/// An exact rational number: a fraction of two arbitrary-precision integers kept
/// in lowest terms with a positive denominator.
///
/// Zero is represented uniquely as `0/1`, so derived equality and hashing of the
/// stored pair coincide with numerical equality. Values never change after
/// construction; every operation returns a new reduced value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Constructs a rational from an integer numerator and denominator.
    ///
    /// The result is reduced to lowest terms and the sign is normalized so that
    /// the denominator is positive.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `den` is zero.
    pub fn from_parts<N, D>(num: N, den: D) -> Result<Self, Error>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let den = den.into();
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(num.into(), den))
    }

    /// Constructs a rational holding the integer `n`.
    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            num: n,
            den: BigInt::one(),
        }
    }

    // Reduces the pair to the canonical form. `den` must not be zero.
    pub(crate) fn reduced(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if num.is_zero() {
            return Rational {
                num,
                den: BigInt::one(),
            };
        }
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let gcd = num.gcd(&den);
        if !gcd.is_one() {
            num /= &gcd;
            den /= &gcd;
        }
        Rational { num, den }
    }

    /// Returns the numerator. The sign of the value lives here.
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// Returns the denominator. Always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Returns 1, 0, or -1 for a positive, zero, or negative value.
    pub fn signum(&self) -> i32 {
        match self.num.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if the value is an integer, i.e. the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        if self.num.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the multiplicative inverse of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.num.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut num = self.den.clone();
        let mut den = self.num.clone();
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        // the pair stays coprime under inversion
        Ok(Rational { num, den })
    }

    /// Divides `self` by `divisor` exactly.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self, Error> {
        if divisor.num.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.num * &divisor.den,
            &self.den * &divisor.num,
        ))
    }

    /// Raises `self` to an integer power exactly. Negative exponents reciprocate.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `exp` is negative.
    pub fn pow(&self, exp: i32) -> Result<Self, Error> {
        let abs = exp.unsigned_abs();
        let num = Pow::pow(&self.num, abs);
        let den = Pow::pow(&self.den, abs);
        if exp < 0 {
            Self::from_parts(den, num)
        } else {
            // powers of a coprime pair are coprime
            Ok(Rational { num, den })
        }
    }

    /// Raises `self` to a rational power.
    ///
    /// The integer part of the power is exact. A fractional power takes the
    /// principal root with the precision of `ctx`, which is then required.
    ///
    /// ## Errors
    ///
    ///  - OutOfDomain: `self` is negative and the root index of `power` is even.
    ///  - MissingContext: `power` is fractional and `ctx` is `None`.
    ///  - DivisionByZero: `self` is zero and `power` is negative.
    ///  - InvalidArgument: the numerator or denominator of `power` does not fit
    ///    into a machine integer.
    pub fn pow_rational(&self, power: &Self, ctx: Option<&Context>) -> Result<Self, Error> {
        let index = power.denom().to_u32().ok_or(Error::InvalidArgument)?;
        if self.signum() < 0 && index % 2 == 0 {
            return Err(Error::OutOfDomain);
        }
        let exp = power.numer().to_i64().ok_or(Error::InvalidArgument)?;
        let abs = u32::try_from(exp.unsigned_abs()).map_err(|_| Error::InvalidArgument)?;
        let num = Pow::pow(&self.num, abs);
        let den = Pow::pow(&self.den, abs);
        if index == 1 {
            return if exp < 0 {
                Self::from_parts(den, num)
            } else {
                Ok(Rational { num, den })
            };
        }
        let ctx = ctx.ok_or(Error::MissingContext)?;
        let num = root::nth_root(&BigDecimal::from(num), index, ctx)?;
        let den = root::nth_root(&BigDecimal::from(den), index, ctx)?;
        let result = Self::ratio(num, den)?;
        if exp < 0 {
            result.reciprocal()
        } else {
            Ok(result)
        }
    }

    // Divides by a machine integer. `n` must not be zero.
    pub(crate) fn div_uint(&self, n: u64) -> Self {
        debug_assert!(n != 0);
        Self::reduced(self.num.clone(), &self.den * n)
    }

    /// Bounds the size of the internal pair: numerator and denominator are each
    /// rounded to the precision of `ctx` plus guard digits, and the rounded pair
    /// is reduced again.
    ///
    /// The value changes by at most one unit in the last guard digit. Iterative
    /// evaluation relies on this to keep the pair from growing with every step.
    pub fn drop_to(&self, ctx: &Context) -> Self {
        let work = ctx.expanded(GUARD_DIGITS);
        Self::reduced(
            util::round_to_context(&self.num, &work),
            util::round_to_context(&self.den, &work),
        )
    }

    /// Generates a random rational with numerator and denominator of at most
    /// `bits` random bits.
    #[cfg(feature = "random")]
    pub fn random(bits: u64) -> Self {
        let mut rng = rand::thread_rng();
        let num = rng.gen_bigint(bits);
        let mut den = rng.gen_bigint(bits.max(1));
        while den.is_zero() {
            den = rng.gen_bigint(bits.max(1));
        }
        Self::reduced(num, den)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.signum().cmp(&other.signum());
        if sign != Ordering::Equal {
            return sign;
        }
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        self.num = -self.num;
        self
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        &self + rhs
    }
}

impl Add<Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational::reduced(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        &self - rhs
    }
}

impl Sub<Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational::reduced(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        &self * rhs
    }
}

impl Mul<Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self * &rhs
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        ONE.clone()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::util::decimal_digits;
    use crate::common::util::ten_pow;
    use crate::RoundingMode;
    use core::str::FromStr;

    #[test]
    fn test_canonical_reduction() {
        let r = Rational::from_parts(24, 543).unwrap();
        assert_eq!(r.numer(), &BigInt::from(8));
        assert_eq!(r.denom(), &BigInt::from(181));

        let a = Rational::from_parts(3 * 12, 7 * 12).unwrap();
        assert_eq!(a, Rational::from_parts(3, 7).unwrap());

        // sign lives in the numerator
        let n = Rational::from_parts(5, -10).unwrap();
        assert_eq!(n.numer(), &BigInt::from(-1));
        assert_eq!(n.denom(), &BigInt::from(2));
        assert_eq!(n, Rational::from_parts(-5, 10).unwrap());

        let p = Rational::from_parts(-4, -6).unwrap();
        assert_eq!(p, Rational::from_parts(2, 3).unwrap());
    }

    #[test]
    fn test_zero_canonical() {
        for d in [1i32, -1, 7, 1000] {
            let z = Rational::from_parts(0, d).unwrap();
            assert_eq!(z, Rational::from(0));
            assert_eq!(z.denom(), &BigInt::one());
        }

        assert_eq!(
            Rational::from_parts(42, 0).unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn test_arithmetic() {
        let half = Rational::from_parts(1, 2).unwrap();
        let third = Rational::from_parts(1, 3).unwrap();

        assert_eq!(&half + &third, Rational::from_parts(5, 6).unwrap());
        assert_eq!(&half - &third, Rational::from_parts(1, 6).unwrap());
        assert_eq!(&half * &third, Rational::from_parts(1, 6).unwrap());
        assert_eq!(half.div(&third).unwrap(), Rational::from_parts(3, 2).unwrap());

        let sixth = Rational::from_parts(1, 6).unwrap();
        assert_eq!(&half + &sixth, Rational::from_parts(2, 3).unwrap());

        assert_eq!(-&half, Rational::from_parts(-1, 2).unwrap());
        assert_eq!((-&half).abs(), half);
        assert_eq!(half.reciprocal().unwrap(), Rational::from(2));

        assert_eq!(
            Rational::from(0).reciprocal().unwrap_err(),
            Error::DivisionByZero
        );
        assert_eq!(
            half.div(&Rational::from(0)).unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn test_signum_predicates() {
        assert_eq!(Rational::from(-3).signum(), -1);
        assert_eq!(Rational::from(0).signum(), 0);
        assert_eq!(Rational::from_parts(2, 5).unwrap().signum(), 1);

        assert!(Rational::from(7).is_integer());
        assert!(!Rational::from_parts(7, 2).unwrap().is_integer());
    }

    #[test]
    fn test_pow() {
        let r = Rational::from_parts(2, 3).unwrap();
        assert_eq!(r.pow(3).unwrap(), Rational::from_parts(8, 27).unwrap());
        assert_eq!(r.pow(-2).unwrap(), Rational::from_parts(9, 4).unwrap());
        assert_eq!(r.pow(0).unwrap(), Rational::from(1));

        assert_eq!(Rational::from(0).pow(0).unwrap(), Rational::from(1));
        assert_eq!(
            Rational::from(0).pow(-1).unwrap_err(),
            Error::DivisionByZero
        );

        let neg = Rational::from_parts(-1, 2).unwrap();
        assert_eq!(neg.pow(2).unwrap(), Rational::from_parts(1, 4).unwrap());
        assert_eq!(neg.pow(3).unwrap(), Rational::from_parts(-1, 8).unwrap());
    }

    #[test]
    fn test_pow_rational() {
        let ctx = Context::new(30, RoundingMode::HalfEven);
        let out = Context::new(20, RoundingMode::HalfEven);

        // integer exponents take the exact path
        let r = Rational::from_parts(2, 3).unwrap();
        let cube = r.pow_rational(&Rational::from(3), None).unwrap();
        assert_eq!(cube, Rational::from_parts(8, 27).unwrap());

        // fractional exponents require a context
        let half = Rational::from_parts(1, 2).unwrap();
        assert_eq!(
            Rational::from(2).pow_rational(&half, None).unwrap_err(),
            Error::MissingContext
        );

        // no real principal root of a negative base with an even root index
        assert_eq!(
            Rational::from(-2).pow_rational(&half, Some(&ctx)).unwrap_err(),
            Error::OutOfDomain
        );

        let p = Rational::from_parts(2, 3).unwrap();
        let v = Rational::from(8).pow_rational(&p, Some(&ctx)).unwrap();
        assert_eq!(v.to_decimal(&out), BigDecimal::from(4));

        let third = Rational::from_parts(1, 3).unwrap();
        let c = Rational::from(-8).pow_rational(&third, Some(&ctx)).unwrap();
        assert_eq!(c.to_decimal(&out), BigDecimal::from(-2));

        let neg_half = Rational::from_parts(-1, 2).unwrap();
        assert_eq!(
            Rational::from(0)
                .pow_rational(&neg_half, Some(&ctx))
                .unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn test_cmp() {
        let mut values = [
            Rational::from_parts(1, 3).unwrap(),
            Rational::from(-2),
            Rational::from_parts(2, 5).unwrap(),
            Rational::from(0),
            Rational::from_parts(-1, 2).unwrap(),
        ];
        values.sort();

        let sorted = [
            Rational::from(-2),
            Rational::from_parts(-1, 2).unwrap(),
            Rational::from(0),
            Rational::from_parts(1, 3).unwrap(),
            Rational::from_parts(2, 5).unwrap(),
        ];
        assert_eq!(values, sorted);

        let a = Rational::from_parts(10, 30).unwrap();
        let b = Rational::from_parts(1, 3).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_drop_to() {
        let num = BigInt::from_str("123456789012345678901234567890").unwrap();
        let den = BigInt::from_str("987654321098765432109876543210").unwrap();
        let r = Rational::from_parts(num, den).unwrap();

        let ctx = Context::new(10, RoundingMode::HalfEven);
        let d = r.drop_to(&ctx);

        assert!(decimal_digits(d.numer()) <= 12);
        assert!(decimal_digits(d.denom()) <= 12);
        assert_eq!(d.to_decimal(&ctx), r.to_decimal(&ctx));

        // short values survive unchanged
        let s = Rational::from_parts(8, 181).unwrap();
        assert_eq!(s.drop_to(&ctx), s);
    }

    #[test]
    fn test_zero_one_traits() {
        assert!(Rational::zero().is_zero());
        assert!(Rational::one().is_one());
        assert_eq!(Rational::zero() + Rational::one(), Rational::from(1));
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_scale_invariance_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let r = Rational::random(128);
            let mut k = rng.gen_bigint(64);
            while k.is_zero() {
                k = rng.gen_bigint(64);
            }

            let scaled =
                Rational::from_parts(r.numer() * &k, r.denom() * &k).unwrap();
            assert_eq!(scaled, r);
            assert!(scaled.denom().is_positive());
            assert!(scaled.numer().gcd(scaled.denom()).is_one() || scaled.numer().is_zero());
        }
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_hash_consistency() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Rational::from_parts(24, 543).unwrap());
        set.insert(Rational::from_parts(8, 181).unwrap());
        set.insert(Rational::from_parts(48, 1086).unwrap());
        assert_eq!(set.len(), 1);

        for _ in 0..20 {
            let r = Rational::random(96);
            set.insert(r.clone());
            assert!(set.contains(&r));
        }
    }

    #[ignore]
    #[test]
    fn test_drop_to_large() {
        // ratio of two 5000 digit numbers collapses to the context size
        let num = ten_pow(5000) + 12345;
        let den = ten_pow(5000) - 98765;
        let r = Rational::from_parts(num, den).unwrap();
        let ctx = Context::new(100, RoundingMode::HalfEven);
        let d = r.drop_to(&ctx);
        assert!(decimal_digits(d.numer()) <= 102);
        assert!(decimal_digits(d.denom()) <= 102);
    }
}
