//! π number.

use crate::ctx::Context;
use crate::defs::Error;
use crate::ops::factorial;
use crate::ops::root;
use crate::parallel;
use crate::rational::Rational;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Pow;
use num_traits::Zero;
use std::collections::HashMap;
use std::sync::Mutex;

// Largest precision served by the machine constant.
const MACHINE_DIGITS: usize = 16;

// Each term of the series yields close to eight digits.
const DIGITS_PER_TERM: usize = 7;

// Below this many series terms a leaf is evaluated sequentially.
const SERIES_THRESHOLD: u64 = 5_000;

/// Cache of π approximations keyed by the requesting context.
#[derive(Debug, Default)]
pub(super) struct PiCache {
    values: Mutex<HashMap<Context, Rational>>,
}

impl PiCache {
    pub(super) fn for_context(&self, ctx: &Context) -> Result<Rational, Error> {
        // a poisoned lock still guards a consistent map
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(value) = values.get(ctx) {
            return Ok(value.clone());
        }

        let value = compute(ctx)?;
        values.insert(*ctx, value.clone());
        Ok(value)
    }
}

// Ramanujan's series:
// 1/π = (2√2/9801) Σ (4k)!·(1103 + 26390k) / ((k!)^4 · 396^(4k))
fn compute(ctx: &Context) -> Result<Rational, Error> {
    let p = ctx.precision();
    if p <= MACHINE_DIGITS {
        return Ok(Rational::try_from(core::f64::consts::PI)?.drop_to(ctx));
    }

    let iterations = (p / DIGITS_PER_TERM) as u64;

    let sqrt8 = root::sqrt(&BigDecimal::from(8), ctx)?;
    let front = Rational::ratio(sqrt8, 9801)?;

    let sum = parallel::reduce(
        0..iterations,
        SERIES_THRESHOLD,
        &|r| ramanujan_leaf(r, ctx),
        &|a, b| &a + &b,
    )?;

    (&front * &sum).reciprocal()
}

// One subrange of the series. The linear and geometric parts are seeded from
// the range start and stepped incrementally; the factorials are fresh per term.
fn ramanujan_leaf(range: core::ops::Range<u64>, ctx: &Context) -> Result<Rational, Error> {
    let factor = BigInt::from(26390u32);
    let base = BigInt::from(24591257856u64); // 396^4

    let start = u32::try_from(range.start).map_err(|_| Error::InvalidArgument)?;
    let mut linear = &factor * range.start;
    let mut geometric = Pow::pow(&base, start);
    let mut sum = Rational::zero();

    for k in range {
        let num = factorial::factorial_uint(4 * k)? * (&linear + 1103u32);
        let den = Pow::pow(&factorial::factorial_uint(k)?, 4u32) * &geometric;
        let term = Rational::from_parts(num, den)?;
        sum = (&sum + &term.drop_to(ctx)).drop_to(ctx);

        linear += &factor;
        geometric *= &base;
    }

    Ok(sum)
}
