//! Principal n-th root of a decimal.

use crate::common::util;
use crate::ctx::Context;
use crate::defs::Error;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_bigint::Sign;
use num_traits::One;
use num_traits::Pow;
use num_traits::Signed;
use num_traits::Zero;

// Extra working digits beyond the requested precision.
const GUARD_DIGITS: usize = 2;

/// Computes the square root of `value` with the precision of `ctx`.
///
/// ## Errors
///
///  - OutOfDomain: `value` is negative.
pub fn sqrt(value: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    nth_root(value, 2, ctx)
}

/// Computes the cube root of `value` with the precision of `ctx`.
pub fn cbrt(value: &BigDecimal, ctx: &Context) -> Result<BigDecimal, Error> {
    nth_root(value, 3, ctx)
}

/// Computes the principal `n`-th root of `value`.
///
/// The decimal is scaled up to an integer carrying `n` times the working
/// precision, the integer root is taken by Newton iteration, and the scale is
/// divided back out. The returned decimal keeps its guard digits and is left
/// for the caller to round.
///
/// ## Errors
///
///  - InvalidArgument: `n` is zero.
///  - OutOfDomain: `value` is negative and `n` is even.
pub fn nth_root(value: &BigDecimal, n: u32, ctx: &Context) -> Result<BigDecimal, Error> {
    if n == 0 {
        return Err(Error::InvalidArgument);
    }

    let negative = value.sign() == Sign::Minus;
    if negative && n % 2 == 0 {
        return Err(Error::OutOfDomain);
    }
    if value.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let (unscaled, scale) = value.as_bigint_and_exponent();

    // pad the scale so that it divides by n
    let index = i64::from(n);
    let adjustment = index - scale.rem_euclid(index);
    let out_scale = (scale + adjustment) / index;
    let precision = ctx.precision() + GUARD_DIGITS + adjustment as usize;

    let padded = unscaled.abs() * util::ten_pow(precision * n as usize + adjustment as usize);
    let mut root = integer_nth_root(&padded, n);
    if negative {
        root = -root;
    }

    Ok(BigDecimal::new(root, out_scale + precision as i64))
}

// Newton iteration on integers. `value` must be positive, `n` nonzero.
// The result can be off the true floor root by one unit.
fn integer_nth_root(value: &BigInt, n: u32) -> BigInt {
    let one = BigInt::one();
    if n == 1 || value <= &one {
        return value.clone();
    }

    let divisor = BigInt::from(n);
    let mut guess: BigInt = &one << (value.bits() / n as u64) as usize;

    loop {
        let delta = (value / Pow::pow(&guess, n - 1) - &guess) / &divisor;
        guess += &delta;
        if delta.abs() <= one {
            break;
        }
    }

    guess
}
