// ============================================================================
// Literal Module
// Digit runs of any length folded into BigInt values
// ============================================================================
//
// The fixed-width conversions in `numeric` reject anything wider than a word.
// Format parsers that accept wide constants (`128'hDEAD_BEEF...`) scan the
// digit run here instead, one character at a time.

mod config;

pub use config::DigitRunConfig;

use crate::bigint::BigInt;
use crate::numeric::{ConversionError, ConversionResult, NumericBase, Word};
use std::fmt;
use std::str::FromStr;

/// Digit separator accepted when [`DigitRunConfig::allow_separators`] is set.
pub const SEPARATOR: u8 = b'_';

/// Fold a digit run into an unsigned BigInt.
///
/// The run must hold at least one digit. A separator may not lead the run:
/// `_ff` is rejected even though FASM value scanners skip a leading `_`, so
/// callers that need that leniency strip it first.
///
/// # Errors
/// - `InvalidString` if the run is empty, starts with a separator or holds a
///   character outside the base
/// - `OutOfBounds` if the value needs more than `config.max_width` bits, or
///   `config` fails [`DigitRunConfig::validate`] (a zero maximum width)
///
/// # Example
/// ```
/// use fasm_numeric::literal::{fold_digit_run, DigitRunConfig};
/// use fasm_numeric::numeric::NumericBase;
///
/// let config = DigitRunConfig::new(NumericBase::Hex).with_separators(true);
/// let value = fold_digit_run("dead_beef_0000_0000_1", &config).unwrap();
/// assert_eq!(value.min_bit_count(), 68);
/// ```
pub fn fold_digit_run(digits: &str, config: &DigitRunConfig) -> ConversionResult<BigInt> {
    if let Err(reason) = config.validate() {
        tracing::trace!(%reason, "rejected digit run configuration");
        return Err(ConversionError::OutOfBounds);
    }

    let bits = config.base.bits_per_digit();
    let radix = Word::from(config.base.radix());

    let mut value = BigInt::new();
    let mut seen_digit = false;

    for c in digits.bytes() {
        if c == SEPARATOR && config.allow_separators && seen_digit {
            continue;
        }

        let digit = match config.base.digit_value(c) {
            Some(digit) => Word::from(digit),
            None => {
                tracing::trace!(base = %config.base, byte = c, "rejected digit run character");
                return Err(ConversionError::InvalidString);
            }
        };
        seen_digit = true;

        match bits {
            Some(shift) => value.fold_bits(shift, digit),
            None => value.fold_digit(radix, digit),
        }

        if let Some(max_width) = config.max_width {
            if value.min_bit_count() > max_width {
                tracing::trace!(max_width, "digit run exceeds maximum width");
                return Err(ConversionError::OutOfBounds);
            }
        }
    }

    if !seen_digit {
        tracing::trace!(base = %config.base, "digit run holds no digits");
        return Err(ConversionError::InvalidString);
    }
    Ok(value)
}

// ============================================================================
// Sized Literals
// ============================================================================

/// A scanned constant with an optional declared bit width, as in
/// `8'hff`, `4'b1010` or a bare `42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedLiteral {
    /// Declared width in bits; None for bare decimal constants
    pub width: Option<u64>,
    pub value: BigInt,
}

impl SizedLiteral {
    pub fn new(width: Option<u64>, value: BigInt) -> Self {
        Self { width, value }
    }

    /// Check the value fits its declared width.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the value needs more bits than declared.
    pub fn check_width(&self) -> ConversionResult<()> {
        match self.width {
            Some(width) if self.value.min_bit_count() > width => {
                tracing::trace!(
                    width,
                    needed = self.value.min_bit_count(),
                    "literal wider than declared"
                );
                Err(ConversionError::OutOfBounds)
            }
            _ => Ok(()),
        }
    }

    /// Narrow to a single word.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the value does not fit its declared width or
    /// a word.
    pub fn to_unsigned(&self) -> ConversionResult<Word> {
        self.check_width()?;
        self.value.to_unsigned()
    }
}

/// Base selector letter after the `'` of a sized literal.
fn base_from_letter(letter: char) -> ConversionResult<NumericBase> {
    match letter.to_ascii_lowercase() {
        'b' => Ok(NumericBase::Bin),
        'o' => Ok(NumericBase::Oct),
        'd' => Ok(NumericBase::Dec),
        'h' => Ok(NumericBase::Hex),
        _ => {
            tracing::trace!(%letter, "unknown literal base letter");
            Err(ConversionError::InvalidBase)
        }
    }
}

impl FromStr for SizedLiteral {
    type Err = ConversionError;

    /// Parse `[width]'<b|o|d|h><digits>` or a bare decimal digit run.
    ///
    /// Separators are allowed in the digit run. The declared width is
    /// enforced while folding.
    ///
    /// # Examples
    /// - "8'hff" -> width 8, value 255
    /// - "'b101" -> no width, value 5
    /// - "1_000" -> no width, value 1000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width_text, rest)) = s.split_once('\'') else {
            let config = DigitRunConfig::default().with_separators(true);
            return Ok(Self::new(None, fold_digit_run(s, &config)?));
        };

        let width = if width_text.is_empty() {
            None
        } else {
            let width = crate::numeric::string_to_unsigned(width_text, NumericBase::Dec)?;
            if width == 0 {
                return Err(ConversionError::OutOfBounds);
            }
            Some(width)
        };

        let mut chars = rest.chars();
        let letter = chars.next().ok_or(ConversionError::InvalidString)?;
        let mut config = DigitRunConfig::new(base_from_letter(letter)?).with_separators(true);
        config.max_width = width;

        let value = fold_digit_run(chars.as_str(), &config)?;
        Ok(Self::new(width, value))
    }
}

impl fmt::Display for SizedLiteral {
    /// Hex form for sized literals, decimal for bare ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(width) => write!(f, "{}'h{:x}", width, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
