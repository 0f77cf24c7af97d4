//! Factorial.

use crate::defs::Error;
use crate::parallel;
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::ToPrimitive;

// Below this many multiplications a sequential fold wins over splitting
// the range across the thread pool.
const PARALLEL_THRESHOLD: u64 = 10_000;

/// Computes `n!` for a non-negative integer rational.
///
/// ## Errors
///
///  - OutOfDomain: `n` is negative or not an integer.
///  - InvalidArgument: `n` does not fit into a machine integer.
pub fn factorial(n: &Rational) -> Result<BigInt, Error> {
    if !n.is_integer() || n.signum() < 0 {
        return Err(Error::OutOfDomain);
    }
    let n = n.numer().to_u64().ok_or(Error::InvalidArgument)?;
    factorial_uint(n)
}

/// Computes `n!` of a machine integer. Large ranges are folded on the rayon
/// thread pool.
///
/// ## Errors
///
///  - InvalidArgument: the product range overflows.
pub fn factorial_uint(n: u64) -> Result<BigInt, Error> {
    if n < 2 {
        return Ok(BigInt::one());
    }

    let end = n.checked_add(1).ok_or(Error::InvalidArgument)?;

    parallel::reduce(
        2..end,
        PARALLEL_THRESHOLD,
        &|r| Ok(r.fold(BigInt::one(), |acc, k| acc * k)),
        &|a, b| a * b,
    )
}
