//! Arctangent.

use crate::ctx::Context;
use crate::ops::series_iters;
use crate::rational::Rational;

impl Rational {
    /// Computes the arctangent of `self` from the odd-power series, with the
    /// accumulator bounded by `ctx`.
    ///
    /// The iteration count is fixed by the precision of `ctx` and delivers the
    /// full precision for |self| <= 2 - sqrt(3). Larger arguments converge
    /// more slowly than the limit allows and must be reduced by the caller,
    /// e.g. with the half-angle identity.
    pub fn atan(&self, ctx: &Context) -> Self {
        let limit = series_iters(ctx.precision());
        let work = ctx.expanded(limit);

        // x - x^3/3 + x^5/5 - ...
        let x_sq = (self * self).drop_to(&work);
        let mut sum = self.clone();
        let mut partial = self.clone();
        let mut negate = true;

        for k in 1..limit {
            partial = (&partial * &x_sq).drop_to(&work);
            let term = partial.div_uint(2 * k as u64 + 1);
            sum = if negate { &sum - &term } else { &sum + &term };
            sum = sum.drop_to(&work);
            negate = !negate;
        }

        sum.drop_to(ctx)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RoundingMode;
    use bigdecimal::BigDecimal;
    use core::str::FromStr;

    #[test]
    fn test_atan() {
        let ctx = Context::new(30, RoundingMode::HalfEven);

        assert_eq!(Rational::from(0).atan(&ctx), Rational::from(0));

        let fifth = Rational::from_parts(1, 5).unwrap();
        let r = fifth.atan(&ctx).to_decimal(&ctx);
        assert_eq!(
            r,
            BigDecimal::from_str("0.197395559849880758370049765195").unwrap()
        );

        // odd function
        let neg = (-&fifth).atan(&ctx).to_decimal(&ctx);
        assert_eq!(
            neg,
            BigDecimal::from_str("-0.197395559849880758370049765195").unwrap()
        );
    }
}
