//! Cached mathematical constants.

mod pi;

use crate::ctx::Context;
use crate::defs::Error;
use crate::ops::consts::pi::PiCache;
use crate::rational::Rational;

/// Constants cache holding arbitrary-precision approximations keyed by the
/// context they were computed for.
///
/// In an ideal situation a `Consts` value is created once and passed to
/// wherever a constant is needed.
#[derive(Debug, Default)]
pub struct Consts {
    pi: PiCache,
}

impl Consts {
    /// Initializes an empty constants cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the π number computed for `ctx`.
    ///
    /// The first call for a distinct context computes the value and caches it;
    /// the cache lock is held across the computation, so concurrent callers of
    /// the same context compute it once. Later calls are lookups.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision of `ctx` is too large to index the
    ///    series terms.
    pub fn pi(&self, ctx: &Context) -> Result<Rational, Error> {
        self.pi.for_context(ctx)
    }
}
