//! Precision context: all inexact operations are performed in some context.

use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::RoundingMode;

/// Context defines the precision in significant decimal digits and the rounding mode
/// applied when an exact value is bounded to that precision.
///
/// A context is cheap to copy and never changes after construction. Contexts are
/// comparable and hashable, and key the constants cache (see [Consts](crate::Consts)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    p: usize,
    rm: RoundingMode,
}

impl Context {
    /// Creates a new context with precision `p` and rounding mode `rm`.
    ///
    /// ## Panics
    ///
    /// Panics if `p` is zero.
    pub const fn new(p: usize, rm: RoundingMode) -> Self {
        assert!(p > 0, "precision must be positive");
        Context { p, rm }
    }

    /// Returns the precision of the context.
    pub const fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Derives a context with `guard` additional digits of precision and the same
    /// rounding mode.
    pub const fn expanded(&self, guard: usize) -> Self {
        Context {
            p: self.p + guard,
            rm: self.rm,
        }
    }

    /// A context with the precision of the IEEE 754 decimal32 format (7 digits),
    /// rounding half to even.
    pub const fn decimal32() -> Self {
        Context::new(7, RoundingMode::HalfEven)
    }

    /// A context with the precision of the IEEE 754 decimal64 format (16 digits),
    /// rounding half to even.
    pub const fn decimal64() -> Self {
        Context::new(16, RoundingMode::HalfEven)
    }

    /// A context with the precision of the IEEE 754 decimal128 format (34 digits),
    /// rounding half to even.
    pub const fn decimal128() -> Self {
        Context::new(34, RoundingMode::HalfEven)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(DEFAULT_P, DEFAULT_RM)
    }
}
