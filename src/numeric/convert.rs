// ============================================================================
// Numeric String Conversion
// Digit runs to fixed-width integers and approximate floats
// ============================================================================
//
// Inputs are digit runs already located by a format parser: no whitespace,
// prefixes or separators. Bounds are decided before or during accumulation so
// that no intermediate value ever overflows a word.

use super::base::NumericBase;
use super::dword::{SignedWord, Word, WORD_BITS};
use super::errors::{ConversionError, ConversionResult};

// ============================================================================
// Decimal Bound
// ============================================================================

const fn decimal_len(mut value: Word) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

const WORD_MAX_DECIMAL_LEN: usize = decimal_len(Word::MAX);

/// `Word::MAX` as ASCII decimal digits, most significant first.
const WORD_MAX_DECIMAL: [u8; WORD_MAX_DECIMAL_LEN] = word_max_decimal();

const fn word_max_decimal() -> [u8; WORD_MAX_DECIMAL_LEN] {
    let mut digits = [0u8; WORD_MAX_DECIMAL_LEN];
    let mut value = Word::MAX;
    let mut i = WORD_MAX_DECIMAL_LEN;
    while i > 0 {
        i -= 1;
        digits[i] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    digits
}

// ============================================================================
// Integers
// ============================================================================

/// Convert a digit run to an unsigned word.
///
/// # Errors
/// - `InvalidString` if `digits` is empty or holds a non-digit of `base`
/// - `OutOfBounds` if the value does not fit a [`Word`]
///
/// Over-long runs are rejected as `OutOfBounds` before their characters are
/// inspected; leading zeros count toward the length.
pub fn string_to_unsigned(digits: &str, base: NumericBase) -> ConversionResult<Word> {
    let digits = digits.as_bytes();
    if digits.is_empty() {
        tracing::trace!(%base, "rejected empty digit run");
        return Err(ConversionError::InvalidString);
    }

    match base.bits_per_digit() {
        Some(bits) => power_of_two_to_unsigned(digits, base, bits),
        None => decimal_to_unsigned(digits),
    }
}

fn power_of_two_to_unsigned(digits: &[u8], base: NumericBase, bits: u32) -> ConversionResult<Word> {
    let bits_wide = u64::from(bits);
    let total_bits = (digits.len() as u64).saturating_mul(bits_wide);

    if total_bits > u64::from(WORD_BITS) {
        // Only the leading digit may straddle the word boundary.
        let trailing_bits = total_bits - bits_wide;
        if trailing_bits >= u64::from(WORD_BITS) {
            tracing::trace!(%base, len = digits.len(), "digit run too long");
            return Err(ConversionError::OutOfBounds);
        }

        let headroom = WORD_BITS - trailing_bits as u32;
        let leading = base
            .digit_value(digits[0])
            .ok_or_else(|| invalid_digit(base, digits[0]))?;
        if Word::from(leading) >> headroom != 0 {
            tracing::trace!(%base, leading, headroom, "leading digit exceeds headroom");
            return Err(ConversionError::OutOfBounds);
        }
    }

    let mut result: Word = 0;
    for &c in digits {
        let digit = base.digit_value(c).ok_or_else(|| invalid_digit(base, c))?;
        result = (result << bits) | Word::from(digit);
    }
    Ok(result)
}

fn decimal_to_unsigned(digits: &[u8]) -> ConversionResult<Word> {
    if digits.len() > WORD_MAX_DECIMAL_LEN {
        tracing::trace!(len = digits.len(), "decimal digit run too long");
        return Err(ConversionError::OutOfBounds);
    }
    if let Some(&c) = digits.iter().find(|c| !c.is_ascii_digit()) {
        return Err(invalid_digit(NumericBase::Dec, c));
    }

    let mut result: Word = 0;
    let mut unchecked = digits;

    if digits.len() == WORD_MAX_DECIMAL_LEN {
        // Walk the digits against Word::MAX until the first one that is
        // strictly smaller; the rest then cannot overflow.
        unchecked = &[];
        for (i, (&c, &max)) in digits.iter().zip(WORD_MAX_DECIMAL.iter()).enumerate() {
            if c > max {
                tracing::trace!("decimal digit run exceeds word maximum");
                return Err(ConversionError::OutOfBounds);
            }
            result = result * 10 + Word::from(c - b'0');
            if c < max {
                unchecked = &digits[i + 1..];
                break;
            }
        }
    }

    for &c in unchecked {
        result = result * 10 + Word::from(c - b'0');
    }
    Ok(result)
}

fn invalid_digit(base: NumericBase, c: u8) -> ConversionError {
    tracing::trace!(%base, byte = c, "rejected non-digit character");
    ConversionError::InvalidString
}

/// Convert an optionally signed digit run (`[+-]?digits`) to a signed word.
///
/// # Errors
/// As [`string_to_unsigned`]. A magnitude that occupies the sign bit is
/// `OutOfBounds` unless it is exactly the negative extreme and the run is
/// negated.
pub fn string_to_signed(digits: &str, base: NumericBase) -> ConversionResult<SignedWord> {
    let (negative, magnitude) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };

    narrow_signed(negative, string_to_unsigned(magnitude, base)?)
}

/// Apply a sign to a word magnitude, rejecting values outside the signed range.
pub(crate) fn narrow_signed(negative: bool, magnitude: Word) -> ConversionResult<SignedWord> {
    if let Ok(value) = SignedWord::try_from(magnitude) {
        Ok(if negative { -value } else { value })
    } else if negative && magnitude == SignedWord::MIN.unsigned_abs() {
        Ok(SignedWord::MIN)
    } else {
        Err(ConversionError::OutOfBounds)
    }
}

// ============================================================================
// Floats
// ============================================================================

/// Assemble `(integer.fraction) * exponent_base^exponent` from digit runs.
///
/// - `integer_part`: `[+-]?digits`, required
/// - `fraction_part`: `digits`, may be empty
/// - `exponent_part`: `[+-]?digits`, may be empty
///
/// The fraction takes the sign written on the integer part, so `-0.5` is
/// negative. This is a floating-point approximation, not a correctly rounded
/// conversion: every part is first narrowed to a word and then combined with
/// `powf`, so long or large inputs lose precision or fail with `OutOfBounds`.
pub fn string_to_double(
    integer_part: &str,
    fraction_part: &str,
    exponent_part: &str,
    exponent_base: Word,
    base: NumericBase,
) -> ConversionResult<f64> {
    let integer = string_to_signed(integer_part, base)?;

    let fraction = if fraction_part.is_empty() {
        0
    } else {
        string_to_unsigned(fraction_part, base)?
    };

    let exponent = if exponent_part.is_empty() {
        0
    } else {
        string_to_signed(exponent_part, base)?
    };

    let fraction_scale = f64::from(base.radix()).powf(fraction_part.len() as f64);
    let mut fraction = fraction as f64 / fraction_scale;
    if integer_part.starts_with('-') {
        fraction = -fraction;
    }

    let scale = (exponent_base as f64).powf(exponent as f64);
    Ok((integer as f64 + fraction) * scale)
}

/// As [`string_to_double`], with the exponent base itself given as a digit
/// run in `base`.
pub fn string_to_double_with_base_digits(
    integer_part: &str,
    fraction_part: &str,
    exponent_part: &str,
    exponent_base: &str,
    base: NumericBase,
) -> ConversionResult<f64> {
    let exponent_base = string_to_unsigned(exponent_base, base)?;
    string_to_double(integer_part, fraction_part, exponent_part, exponent_base, base)
}

/// Decimal digits scaled by `10^exponent`.
pub fn dec_string_to_double(
    integer_part: &str,
    fraction_part: &str,
    exponent_part: &str,
) -> ConversionResult<f64> {
    string_to_double(integer_part, fraction_part, exponent_part, 10, NumericBase::Dec)
}

/// Hex digits scaled by `2^exponent`, with the exponent also written in hex.
pub fn hex_string_to_double(
    integer_part: &str,
    fraction_part: &str,
    exponent_part: &str,
) -> ConversionResult<f64> {
    string_to_double(integer_part, fraction_part, exponent_part, 2, NumericBase::Hex)
}

// ============================================================================
// Tests
// ============================================================================
