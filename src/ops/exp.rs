//! Exponential function.

use crate::ctx::Context;
use crate::ops::series_iters;
use crate::rational::Rational;
use num_traits::One;

impl Rational {
    /// Computes e raised to the power of `self` from the Taylor series, with
    /// the accumulator bounded by `ctx`.
    ///
    /// The iteration count is fixed by the precision of `ctx` and delivers the
    /// full precision for arguments of modest magnitude, roughly |x| <= 2.
    /// Larger arguments need more iterations than the limit provides and
    /// should be scaled down by the caller first.
    pub fn exp(&self, ctx: &Context) -> Self {
        let limit = series_iters(ctx.precision());
        let work = ctx.expanded(limit);

        // 1 + x + x^2/2! + x^3/3! + ...
        let mut sum = Rational::one();
        let mut partial = Rational::one();

        for i in 1..=limit {
            partial = (&partial * self).div_uint(i as u64).drop_to(&work);
            sum = (&sum + &partial).drop_to(&work);
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
    fn test_exp() {
        let ctx = Context::new(30, RoundingMode::HalfEven);

        assert_eq!(Rational::from(0).exp(&ctx), Rational::from(1));

        let e = Rational::from(1).exp(&ctx).to_decimal(&ctx);
        assert_eq!(
            e,
            BigDecimal::from_str("2.71828182845904523536028747135").unwrap()
        );

        let inv = Rational::from(-1).exp(&ctx).to_decimal(&ctx);
        assert_eq!(
            inv,
            BigDecimal::from_str("0.367879441171442321595523770161").unwrap()
        );

        let half = Rational::from_parts(1, 2).unwrap();
        let r = half.exp(&ctx).to_decimal(&ctx);
        assert_eq!(
            r,
            BigDecimal::from_str("1.64872127070012814684865078781").unwrap()
        );
    }

    #[test]
    fn test_exp_precision() {
        // the same argument at increasing precision agrees on the shared digits
        let x = Rational::from_parts(3, 2).unwrap();
        let coarse = x.exp(&Context::new(20, RoundingMode::HalfEven));
        let fine = x.exp(&Context::new(60, RoundingMode::HalfEven));

        let out = Context::new(18, RoundingMode::HalfEven);
        assert_eq!(coarse.to_decimal(&out), fine.to_decimal(&out));
    }
}
