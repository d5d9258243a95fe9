// ============================================================================
// Digit Run Configuration
// How a format parser wants a digit run folded into a BigInt
// ============================================================================

use crate::numeric::{ConversionResult, NumericBase};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for [`fold_digit_run`](super::fold_digit_run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitRunConfig {
    /// Base of every digit in the run
    pub base: NumericBase,

    /// Accept `_` between digits (Verilog and FASM both allow it)
    pub allow_separators: bool,

    /// Optional: reject values needing more bits than this
    /// None means unbounded
    pub max_width: Option<u64>,
}

impl DigitRunConfig {
    /// Create a configuration with separators disallowed and no width limit
    pub fn new(base: NumericBase) -> Self {
        Self {
            base,
            allow_separators: false,
            max_width: None,
        }
    }

    /// Create a configuration from a numeric radix.
    ///
    /// # Errors
    /// Returns `InvalidBase` unless `radix` is 2, 8, 10 or 16.
    pub fn from_radix(radix: u32) -> ConversionResult<Self> {
        NumericBase::from_radix(radix).map(Self::new)
    }

    /// Builder method: Accept or reject `_` separators
    pub fn with_separators(mut self, allow: bool) -> Self {
        self.allow_separators = allow;
        self
    }

    /// Builder method: Limit the value to `bits` bits
    pub fn with_max_width(mut self, bits: u64) -> Self {
        self.max_width = Some(bits);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_width == Some(0) {
            return Err("Maximum width must be at least one bit".to_string());
        }
        Ok(())
    }
}

impl Default for DigitRunConfig {
    fn default() -> Self {
        Self::new(NumericBase::Dec)
    }
}
