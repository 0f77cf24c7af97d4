//! Cosine.

use crate::ctx::Context;
use crate::ops::series_iters;
use crate::rational::Rational;
use num_traits::One;
use num_traits::Zero;

impl Rational {
    /// Computes the cosine of `self` taken as an angle in radians, with the
    /// accumulator bounded by `ctx`.
    ///
    /// The Maclaurin series is evaluated with a fixed iteration count and no
    /// argument reduction, so the full precision is reached for |self| <= pi/4
    /// only. Reducing a larger angle into that range is the caller's concern.
    pub fn cos(&self, ctx: &Context) -> Self {
        let limit = series_iters(ctx.precision());
        let work = ctx.expanded(limit);

        // 1 - x^2/2! + x^4/4! - ...
        let mut sum = Rational::zero();
        let mut partial = Rational::one();
        let mut negate = false;

        for i in 1..=limit {
            if i % 2 == 1 {
                sum = if negate { &sum - &partial } else { &sum + &partial };
                sum = sum.drop_to(&work);
                negate = !negate;
            }
            partial = (&partial * self).div_uint(i as u64).drop_to(&work);
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
    fn test_cos() {
        let ctx = Context::new(30, RoundingMode::HalfEven);

        assert_eq!(Rational::from(0).cos(&ctx), Rational::from(1));

        let half = Rational::from_parts(1, 2).unwrap();
        let r = half.cos(&ctx).to_decimal(&ctx);
        assert_eq!(
            r,
            BigDecimal::from_str("0.877582561890372716116281582604").unwrap()
        );

        // even function
        let neg = (-&half).cos(&ctx).to_decimal(&ctx);
        assert_eq!(
            neg,
            BigDecimal::from_str("0.877582561890372716116281582604").unwrap()
        );
    }
}
