//! Common utilities and constants.

pub mod consts;
pub mod util;
