//! Support for third party crates.

mod de;
mod ser;
