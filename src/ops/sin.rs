//! Sine.

use crate::ctx::Context;
use crate::ops::series_iters;
use crate::rational::Rational;
use num_traits::Zero;

impl Rational {
    /// Computes the sine of `self` taken as an angle in radians, with the
    /// accumulator bounded by `ctx`.
    ///
    /// The Maclaurin series is evaluated with a fixed iteration count and no
    /// argument reduction, so the full precision is reached for |self| <= pi/4
    /// only. Reducing a larger angle into that range is the caller's concern.
    pub fn sin(&self, ctx: &Context) -> Self {
        let limit = series_iters(ctx.precision());
        let work = ctx.expanded(limit);

        // x - x^3/3! + x^5/5! - ...
        let mut sum = Rational::zero();
        let mut partial = self.clone();
        let mut negate = false;

        for i in 2..=limit {
            if i % 2 == 0 {
                sum = if negate { &sum - &partial } else { &sum + &partial };
                sum = sum.drop_to(&work);
                negate = !negate;
            }
            partial = (&partial * self).div_uint(i as u64).drop_to(&work);
        }

        sum.drop_to(ctx)
    }
}
