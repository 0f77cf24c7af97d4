//! Auxiliary integer functions.

use crate::ctx::Context;
use bigdecimal::BigDecimal;
use core::num::NonZeroU64;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_traits::Pow;
use num_traits::Zero;

/// Returns the number of decimal digits in the magnitude of `n`. Zero has one digit.
pub fn decimal_digits(n: &BigInt) -> usize {
    if n.is_zero() {
        return 1;
    }
    // 2^(bits-1) <= |n| < 2^bits, and 30103/100000 overestimates log10(2)
    // by less than 5e-9, so the guess is off by one at most.
    let mut digits = ((n.bits() - 1) * 30103 / 100000) as usize + 1;
    let mag = n.magnitude();
    while digits > 1 && *mag < ten_pow_uint(digits - 1) {
        digits -= 1;
    }
    while *mag >= ten_pow_uint(digits) {
        digits += 1;
    }
    digits
}

/// Returns 10 to the power of `k`.
pub fn ten_pow(k: usize) -> BigInt {
    Pow::pow(&BigInt::from(10), k)
}

fn ten_pow_uint(k: usize) -> BigUint {
    Pow::pow(&BigUint::from(10u32), k)
}

/// Rounds the magnitude of `n` to at most `ctx.precision()` significant digits
/// using the context's rounding mode. The magnitude is preserved: dropped low
/// digits are replaced with zeros, not removed.
pub fn round_to_context(n: &BigInt, ctx: &Context) -> BigInt {
    if decimal_digits(n) <= ctx.precision() {
        return n.clone();
    }
    let rm = ctx.rounding_mode().to_bigdecimal();
    let (digits, exponent) = BigDecimal::new(n.clone(), 0)
        .with_precision_round(prec(ctx.precision()), rm)
        .with_scale_round(0, rm)
        .into_bigint_and_exponent();
    debug_assert_eq!(exponent, 0);
    digits
}

// context precision is always positive
pub(crate) fn prec(p: usize) -> NonZeroU64 {
    NonZeroU64::new(p as u64).unwrap_or(NonZeroU64::MIN)
}
