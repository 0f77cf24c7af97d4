//! Parallel divide and conquer evaluation.

use crate::defs::Error;
use core::ops::Range;

/// Evaluates `leaf` over `range` by splitting the range in half recursively
/// until at most `threshold` elements remain, and merges the partial results
/// with `combine`.
///
/// The two halves of each split run on the rayon thread pool. Splitting is
/// deterministic and `combine` is always applied left half first, so a
/// non-commutative `combine` sees the partial results in range order.
///
/// An empty range is passed through to `leaf`, which is expected to return
/// the identity of the accumulation.
///
/// ## Errors
///
/// Propagates the first error in range order returned by `leaf`.
pub fn reduce<T, L, C>(range: Range<u64>, threshold: u64, leaf: &L, combine: &C) -> Result<T, Error>
where
    T: Send,
    L: Fn(Range<u64>) -> Result<T, Error> + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let threshold = threshold.max(1);
    let len = range.end.saturating_sub(range.start);
    if len <= threshold {
        return leaf(range);
    }

    let mid = range.start + len / 2;
    let (left, right) = rayon::join(
        || reduce(range.start..mid, threshold, leaf, combine),
        || reduce(mid..range.end, threshold, leaf, combine),
    );

    Ok(combine(left?, right?))
}
