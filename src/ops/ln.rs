//! Natural logarithm.

use crate::ctx::Context;
use crate::defs::Error;
use crate::ops::log_series_iters;
use crate::rational::Rational;
use num_traits::One;

impl Rational {
    /// Computes the natural logarithm of `self` from the artanh series, with
    /// the accumulator bounded by `ctx`.
    ///
    /// The substitution `u = (x-1)/(x+1)` maps every positive argument into
    /// the unit interval. The iteration count is fixed by the precision of
    /// `ctx` and delivers the full precision for arguments roughly within
    /// [1/4, 4]; arguments far outside converge more slowly than the limit
    /// allows and should be scaled by the caller.
    ///
    /// ## Errors
    ///
    ///  - OutOfDomain: `self` is zero or negative.
    pub fn ln(&self, ctx: &Context) -> Result<Self, Error> {
        if self.signum() <= 0 {
            return Err(Error::OutOfDomain);
        }

        let limit = log_series_iters(ctx.precision());
        let work = ctx.expanded(limit);

        // ln x = 2 artanh(u) = 2 (u + u^3/3 + u^5/5 + ...)
        let one = Rational::one();
        let u = (self - &one).div(&(self + &one))?;
        let u_sq = (&u * &u).drop_to(&work);

        let mut sum = u.clone();
        let mut partial = u;

        for k in 1..limit {
            partial = (&partial * &u_sq).drop_to(&work);
            let term = partial.div_uint(2 * k as u64 + 1);
            sum = (&sum + &term).drop_to(&work);
        }

        Ok((&sum + &sum).drop_to(ctx))
    }
}
