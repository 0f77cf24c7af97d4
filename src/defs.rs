//! Definitions.

use core::fmt::Display;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::HalfEven;

/// Default precision in significant decimal digits.
pub const DEFAULT_P: usize = 34;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Divisor is zero: a ratio with a zero denominator, or reciprocation of zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// The argument lies outside of the domain of the operation.
    OutOfDomain,

    /// The operation is inexact and requires a precision context, but none was given.
    MissingContext,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::OutOfDomain => "argument is out of domain",
            Error::MissingContext => "missing precision context",
        };
        f.write_str(repr)
    }
}

/// Rounding modes for bounding an exact value to a finite number of digits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,

    /// Round toward zero.
    Down,

    /// Round toward positive infinity.
    Ceiling,

    /// Round toward negative infinity.
    Floor,

    /// Round to the nearest digit, ties away from zero.
    HalfUp,

    /// Round to the nearest digit, ties toward zero.
    HalfDown,

    /// Round to the nearest digit, ties to even.
    HalfEven,
}

impl RoundingMode {
    pub(crate) fn to_bigdecimal(self) -> bigdecimal::RoundingMode {
        match self {
            RoundingMode::Up => bigdecimal::RoundingMode::Up,
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
            RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
            RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
        }
    }
}
