// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Intermediate or result exceeded the i128 mantissa range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string is not a decimal number
    InvalidInput,
    /// Requested precision (or input scale) exceeds `MAX_SCALE`
    ScaleOutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleOutOfRange => write!(
                f,
                "scale out of range: at most {} fractional digits are supported",
                super::MAX_SCALE
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
