//! Exact rational arithmetic with precision-bounded rendering.
//!
//! ## Introduction
//!
//! **Values**
//!
//! The number is defined by the data type `Rational`: a fraction of two
//! arbitrary-precision integers kept in lowest terms with a positive
//! denominator. Field arithmetic, comparison, integer powers, and factorial are
//! exact; no rounding happens unless it is asked for.
//!
//! **Contexts and rounding**
//!
//! Operations without an exact rational result take a `Context` as an argument.
//! The context defines the precision in significant decimal digits and the
//! rounding mode. Rendering a value as a decimal, roots, fractional powers, the
//! elementary series functions, and π all bound their results by the given
//! context. The `drop_to` operation bounds the size of a value in between exact
//! steps of an iterative computation, so the fraction does not grow without
//! limit.
//!
//! **Error handling**
//!
//! Fallible operations return `Result` with the error kind `Error`. Domain
//! violations, zero divisors, and a missing context are reported as values, not
//! panics.
//!
//! **Constants**
//!
//! π has arbitrary precision and is evaluated lazily and then cached per
//! context in the constants cache `Consts`. The library does not maintain
//! global state, so functions that need the cache take it as a parameter or let
//! the caller hold it.
//!
//! ## Examples
//!
//! The example below mixes exact arithmetic with a rendered approximation.
//!
//! ```rust
//! use exact_rational::Consts;
//! use exact_rational::Context;
//! use exact_rational::Rational;
//! use exact_rational::RoundingMode;
//!
//! // Ratios reduce to canonical form on construction.
//! let r = Rational::ratio(24, 543).unwrap();
//! assert_eq!(r.to_string(), "8/181");
//!
//! let sum = &r + &Rational::from_parts(1, 2).unwrap();
//! assert_eq!(sum.to_string(), "197/362");
//!
//! // Approximation happens only on request, in a precision context.
//! let ctx = Context::new(50, RoundingMode::HalfEven);
//! let cc = Consts::new();
//! let pi = cc.pi(&ctx).unwrap();
//! assert_eq!(
//!     pi.to_decimal(&ctx).to_string(),
//!     "3.1415926535897932384626433832795028841971693993751"
//! );
//! ```
//!
//! The example below evaluates the exponential series and renders the result.
//!
//! ```rust
//! use exact_rational::Context;
//! use exact_rational::Rational;
//! use exact_rational::RoundingMode;
//!
//! let ctx = Context::new(30, RoundingMode::HalfEven);
//!
//! let e = Rational::from(1).exp(&ctx);
//! assert_eq!(
//!     e.to_decimal(&ctx).to_string(),
//!     "2.71828182845904523536028747135"
//! );
//! ```
//!
//! ## Features
//!
//!  - `random`: random value generation, used mostly by tests.
//!  - `serde`: serialization and deserialization of `Rational` as the exact
//!    fraction string.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::should_implement_trait)]

mod common;
mod conv;
mod ctx;
mod defs;
mod ops;
mod rational;
mod strop;

pub mod parallel;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::conv::ToRational;
pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::ops::consts::Consts;
pub use crate::ops::factorial::factorial;
pub use crate::ops::factorial::factorial_uint;
pub use crate::ops::root::cbrt;
pub use crate::ops::root::nth_root;
pub use crate::ops::root::sqrt;
pub use crate::rational::Rational;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;

pub use crate::common::consts::HALF;
pub use crate::common::consts::ONE;
pub use crate::common::consts::QUARTER;
pub use crate::common::consts::TEN;
pub use crate::common::consts::TENTH;
pub use crate::common::consts::THIRD;
pub use crate::common::consts::TWO;
pub use crate::common::consts::ZERO;

#[cfg(test)]
mod tests {

    #[test]
    fn test_rational() {
        use crate::Consts;
        use crate::Context;
        use crate::Rational;
        use crate::RoundingMode;

        // Precision with some space for error.
        let ctx = Context::new(40, RoundingMode::HalfEven);

        // Compute pi with Machin's formula: pi = 16*atan(1/5) - 4*atan(1/239)
        let a = Rational::from_parts(1, 5).unwrap().atan(&ctx);
        let b = Rational::from_parts(1, 239).unwrap().atan(&ctx);
        let pi = &(&a * &Rational::from(16)) - &(&b * &Rational::from(4));

        // Use the library's constant for verifying the result
        let cc = Consts::new();
        let pi_lib = cc.pi(&ctx).unwrap();

        let eps = Rational::from_parts(1, crate::common::util::ten_pow(36)).unwrap();
        assert!((&pi - &pi_lib).abs() < eps);
    }
}
