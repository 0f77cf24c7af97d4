//! High-level operations on the numbers.

pub mod consts;
pub mod factorial;
pub mod root;

mod atan;
mod cos;
mod exp;
mod ln;
mod sin;


// Iteration limits of the Taylor evaluations, scaled from the context
// precision. The counts assume arguments within each series' convergence
// domain; the operation docs state the exact ranges.
pub(crate) fn series_iters(p: usize) -> usize {
    p * 3 / 2
}

pub(crate) fn log_series_iters(p: usize) -> usize {
    p * 4
}
