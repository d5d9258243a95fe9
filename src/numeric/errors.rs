// ============================================================================
// Numeric Errors
// Error types for string conversion and narrowing conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by string-to-number and big-to-fixed-width conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionError {
    /// Input was empty or contained a character that is not a digit of the base
    InvalidString,
    /// The requested base is not one of 2, 8, 10 or 16
    InvalidBase,
    /// The value does not fit the requested fixed width
    OutOfBounds,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidString => {
                write!(f, "invalid string: empty or not a digit run of the base")
            },
            ConversionError::InvalidBase => write!(f, "invalid base: expected 2, 8, 10 or 16"),
            ConversionError::OutOfBounds => {
                write!(f, "out of bounds: value does not fit the target width")
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;
