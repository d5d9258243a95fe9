// ============================================================================
// Numeric Base
// Digit alphabets for the bases literal text may use
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base of a digit run.
///
/// - `Bin`: `[0-1]`
/// - `Oct`: `[0-7]`
/// - `Dec`: `[0-9]`
/// - `Hex`: `[0-9a-fA-F]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericBase {
    Bin = 2,
    Oct = 8,
    Dec = 10,
    Hex = 16,
}

impl NumericBase {
    /// Look up a base by its radix.
    ///
    /// # Errors
    /// Returns `InvalidBase` for anything other than 2, 8, 10 or 16.
    pub fn from_radix(radix: u32) -> ConversionResult<Self> {
        match radix {
            2 => Ok(NumericBase::Bin),
            8 => Ok(NumericBase::Oct),
            10 => Ok(NumericBase::Dec),
            16 => Ok(NumericBase::Hex),
            _ => {
                tracing::trace!(radix, "rejected unsupported radix");
                Err(ConversionError::InvalidBase)
            },
        }
    }

    #[inline]
    pub const fn radix(self) -> u8 {
        self as u8
    }

    /// Bits encoded by one digit, or `None` for decimal.
    #[inline]
    pub const fn bits_per_digit(self) -> Option<u32> {
        match self {
            NumericBase::Bin => Some(1),
            NumericBase::Oct => Some(3),
            NumericBase::Dec => None,
            NumericBase::Hex => Some(4),
        }
    }

    /// Value of an ASCII digit character in this base.
    #[inline]
    pub const fn digit_value(self, c: u8) -> Option<u8> {
        let value = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        if value < self.radix() {
            Some(value)
        } else {
            None
        }
    }
}

impl TryFrom<u32> for NumericBase {
    type Error = ConversionError;

    fn try_from(radix: u32) -> ConversionResult<Self> {
        Self::from_radix(radix)
    }
}

impl fmt::Display for NumericBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBase::Bin => write!(f, "bin"),
            NumericBase::Oct => write!(f, "oct"),
            NumericBase::Dec => write!(f, "dec"),
            NumericBase::Hex => write!(f, "hex"),
        }
    }
}
