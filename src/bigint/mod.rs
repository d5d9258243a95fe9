// ============================================================================
// Arbitrary-Precision Integer
// Sign-magnitude integer of unbounded width
// ============================================================================

mod magnitude;
mod ops;

use crate::numeric::{
    narrow_signed, ConversionError, ConversionResult, NumericBase, SignedWord, Word, WORD_BITS,
};
use magnitude::Words;
use std::cmp::Ordering;
use std::fmt;
use std::slice;

/// Signed integer of unbounded width.
///
/// Stored as a sign flag and a magnitude of base-2^64 words, least
/// significant first. The magnitude never carries a most-significant zero
/// word and zero is never negative, so structural equality is numeric
/// equality.
///
/// Right shift and remainder act on the magnitude: `-5 >> 1 == -2` and
/// `-7 % 2 == -1`.
///
/// # Example
/// ```
/// use fasm_numeric::bigint::BigInt;
///
/// let mut value = BigInt::new();
/// for digit in [1, 2, 3] {
///     value.fold_digit(10, digit);
/// }
/// assert_eq!(value, 123u64);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    words: Words,
}

/// Borrow a word as a normalized magnitude.
#[inline]
fn word_magnitude(value: &Word) -> &[Word] {
    if *value == 0 {
        &[]
    } else {
        slice::from_ref(value)
    }
}

impl BigInt {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sign and little-endian magnitude words.
    ///
    /// Most-significant zero words are dropped and a zero magnitude is made
    /// non-negative.
    pub fn from_words(negative: bool, words: &[Word]) -> Self {
        Self::from_parts(negative, Words::from_slice(words))
    }

    fn from_parts(negative: bool, words: Words) -> Self {
        let mut value = Self { negative, words };
        value.normalize();
        value
    }

    #[inline]
    fn normalize(&mut self) {
        magnitude::trim(&mut self.words);
        if self.words.is_empty() {
            self.negative = false;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Magnitude words, least significant first.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for zero as well as positive values.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// True if the magnitude needs more than one word.
    #[inline]
    pub fn is_big(&self) -> bool {
        self.words.len() > 1
    }

    /// Bits held by the magnitude storage.
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.words.len() as u64 * u64::from(WORD_BITS)
    }

    /// Bits needed to represent the magnitude; zero for zero.
    pub fn min_bit_count(&self) -> u64 {
        match self.words.last() {
            Some(top) => self.bit_count() - u64::from(top.leading_zeros()),
            None => 0,
        }
    }

    /// Magnitude bit at `index`; bits past the storage read as zero.
    pub fn bit(&self, index: u64) -> bool {
        let word = (index / u64::from(WORD_BITS)) as usize;
        let shift = (index % u64::from(WORD_BITS)) as u32;
        self.words.get(word).is_some_and(|w| (w >> shift) & 1 == 1)
    }

    /// Set or clear the magnitude bit at `index`, growing storage as needed.
    pub fn set_bit(&mut self, index: u64, value: bool) {
        let word = (index / u64::from(WORD_BITS)) as usize;
        let mask: Word = 1 << (index % u64::from(WORD_BITS));

        if value {
            if word >= self.words.len() {
                self.words.resize(word + 1, 0);
            }
            self.words[word] |= mask;
        } else if let Some(w) = self.words.get_mut(word) {
            *w &= !mask;
            self.normalize();
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            words: self.words.clone(),
        }
    }

    /// Flip the sign in place; zero stays non-negative.
    #[inline]
    pub fn negate(&mut self) {
        self.negative = !self.negative && !self.words.is_empty();
    }

    // ========================================================================
    // Incremental Construction
    // ========================================================================

    /// `magnitude = magnitude * base + digit` in a single pass.
    ///
    /// This is the per-character step when scanning a digit run; the sign is
    /// left untouched.
    #[inline]
    pub fn fold_digit(&mut self, base: Word, digit: Word) {
        magnitude::mul_add_word(&mut self.words, base, digit);
        self.normalize();
    }

    /// `magnitude = (magnitude << shift) | digit`, for power-of-two bases.
    #[inline]
    pub fn fold_bits(&mut self, shift: u32, digit: Word) {
        magnitude::shl_assign(&mut self.words, u64::from(shift));
        self.or_word(digit);
    }

    /// OR a word into the low word of the magnitude.
    fn or_word(&mut self, value: Word) {
        match self.words.first_mut() {
            Some(low) => *low |= value,
            None if value != 0 => self.words.push(value),
            None => {},
        }
    }

    // ========================================================================
    // Signed Arithmetic Kernels
    // ========================================================================

    fn add_signed(&mut self, negative: bool, rhs: &[Word]) {
        if self.words.is_empty() || self.negative == negative {
            if self.words.is_empty() {
                self.negative = negative;
            }
            magnitude::add_assign(&mut self.words, rhs);
        } else if magnitude::cmp(&self.words, rhs) != Ordering::Less {
            magnitude::sub_assign(&mut self.words, rhs);
        } else {
            let mut words = Words::from_slice(rhs);
            magnitude::sub_assign(&mut words, &self.words);
            self.words = words;
            self.negative = negative;
        }
        self.normalize();
    }

    fn add_word_signed(&mut self, negative: bool, value: Word) {
        if value == 0 {
            return;
        }

        if self.words.is_empty() || self.negative == negative {
            if self.words.is_empty() {
                self.negative = negative;
            }
            magnitude::add_word(&mut self.words, value);
        } else if magnitude::cmp(&self.words, slice::from_ref(&value)) != Ordering::Less {
            magnitude::sub_word(&mut self.words, value);
        } else {
            // Magnitude is a single word smaller than `value`.
            self.words[0] = value - self.words[0];
            self.negative = negative;
        }
        self.normalize();
    }

    fn mul_signed(&mut self, negative: bool, rhs: &[Word]) {
        self.words = magnitude::mul(&self.words, rhs);
        self.negative ^= negative;
        self.normalize();
    }

    fn mul_word_signed(&mut self, negative: bool, value: Word) {
        magnitude::mul_add_word(&mut self.words, value, 0);
        self.negative ^= negative;
        self.normalize();
    }

    fn div_rem_signed(&self, negative: bool, rhs: &[Word]) -> (Self, Self) {
        let (quotient, remainder) = magnitude::div_rem(&self.words, rhs);
        (
            Self::from_parts(self.negative != negative, quotient),
            Self::from_parts(self.negative, remainder),
        )
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `quotient * rhs + remainder == self`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> (Self, Self) {
        self.div_rem_signed(rhs.negative, &rhs.words)
    }

    /// As [`div_rem`](Self::div_rem) for a single-word divisor.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_rem_word(&self, rhs: Word) -> (Self, Self) {
        self.div_rem_signed(false, word_magnitude(&rhs))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Narrow to an unsigned word.
    ///
    /// # Errors
    /// Returns `OutOfBounds` for negative values and magnitudes wider than
    /// one word.
    pub fn to_unsigned(&self) -> ConversionResult<Word> {
        match self.words.as_slice() {
            _ if self.negative => Err(ConversionError::OutOfBounds),
            [] => Ok(0),
            [word] => Ok(*word),
            _ => Err(ConversionError::OutOfBounds),
        }
    }

    /// Narrow to a signed word.
    ///
    /// # Errors
    /// Returns `OutOfBounds` unless the value lies in the signed word range.
    pub fn to_signed(&self) -> ConversionResult<SignedWord> {
        match self.words.as_slice() {
            [] => Ok(0),
            [word] => narrow_signed(self.negative, *word),
            _ => Err(ConversionError::OutOfBounds),
        }
    }

    /// Widen to a float; precision is lost beyond 53 significant bits and
    /// magnitudes of 2^1024 or more saturate to infinity.
    pub fn to_double(&self) -> f64 {
        let word_scale = f64::from(WORD_BITS).exp2();
        let magnitude = self
            .words
            .iter()
            .rev()
            .fold(0.0, |acc, &w| acc * word_scale + w as f64);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn cmp_signed(&self, negative: bool, rhs: &[Word]) -> Ordering {
        match (self.negative, negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude::cmp(&self.words, rhs),
            (true, true) => magnitude::cmp(rhs, &self.words),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_signed(other.negative, &other.words)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        Self::from_words(false, &[value as Word, (value >> WORD_BITS) as Word])
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let magnitude = value.unsigned_abs();
        Self::from_words(
            value < 0,
            &[magnitude as Word, (magnitude >> WORD_BITS) as Word],
        )
    }
}

impl TryFrom<&BigInt> for Word {
    type Error = ConversionError;

    fn try_from(value: &BigInt) -> ConversionResult<Self> {
        value.to_unsigned()
    }
}

impl TryFrom<&BigInt> for SignedWord {
    type Error = ConversionError;

    fn try_from(value: &BigInt) -> ConversionResult<Self> {
        value.to_signed()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Largest power of ten in a word, and its digit count.
const DECIMAL_CHUNK: Word = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// Canonical diagnostic form: sign, then each magnitude word as zero-padded
/// hex, most significant first, separated by `'`. Zero prints as `+`.
impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negative { "-" } else { "+" })?;
        for (i, word) in self.words.iter().enumerate().rev() {
            write!(f, "{:0width$x}", word, width = (WORD_BITS / 4) as usize)?;
            if i != 0 {
                f.write_str("'")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = self.words.clone();
        while !rest.is_empty() {
            let (quotient, chunk) = magnitude::div_rem_word(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }

        let mut digits = match chunks.pop() {
            Some(top) => top.to_string(),
            None => String::from("0"),
        };
        for chunk in chunks.iter().rev() {
            digits.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words.iter().rev();
        let mut digits = match words.next() {
            Some(top) => format!("{:x}", top),
            None => String::from("0"),
        };
        for word in words {
            digits.push_str(&format!("{:0width$x}", word, width = (WORD_BITS / 4) as usize));
        }
        f.pad_integral(!self.negative, "0x", &digits)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for BigInt {
    type Err = ConversionError;

    /// Parse an optionally signed decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-340282366920938463463374607431768211456" -> -2^128
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };
        if digits.is_empty() {
            return Err(ConversionError::InvalidString);
        }

        let mut value = Self::new();
        for c in digits.bytes() {
            let digit = NumericBase::Dec
                .digit_value(c)
                .ok_or(ConversionError::InvalidString)?;
            value.fold_digit(Word::from(NumericBase::Dec.radix()), Word::from(digit));
        }
        if negative {
            value.negate();
        }
        Ok(value)
    }
}

// ============================================================================
// Serialization (signed decimal string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn test_zero() {
        let zero = BigInt::new();
        assert!(zero.is_zero());
        assert!(zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero.bit_count(), 0);
        assert_eq!(zero.min_bit_count(), 0);
        assert_eq!(zero, BigInt::from_words(true, &[0, 0]));
    }

    #[test]
    fn test_round_trip_unsigned() {
        for value in [0, 1, 42, Word::MAX - 1, Word::MAX] {
            assert_eq!(BigInt::from(value).to_unsigned(), Ok(value));
        }
    }

    #[test]
    fn test_round_trip_signed() {
        for value in [0, 1, -1, SignedWord::MAX, SignedWord::MIN, SignedWord::MIN + 1] {
            assert_eq!(BigInt::from(value).to_signed(), Ok(value));
        }
    }

    #[test]
    fn test_narrowing_out_of_bounds() {
        let two_words = BigInt::from(1u128 << 64);
        assert_eq!(two_words.to_unsigned(), Err(ConversionError::OutOfBounds));
        assert_eq!(two_words.to_signed(), Err(ConversionError::OutOfBounds));

        assert_eq!(BigInt::from(-1i64).to_unsigned(), Err(ConversionError::OutOfBounds));

        // Sign bit set: only the exact negative extreme is representable.
        let top_bit = BigInt::from(1u64 << 63);
        assert_eq!(top_bit.to_signed(), Err(ConversionError::OutOfBounds));
        assert_eq!((-top_bit).to_signed(), Ok(SignedWord::MIN));
        assert_eq!(
            BigInt::from_words(true, &[(1 << 63) + 1]).to_signed(),
            Err(ConversionError::OutOfBounds)
        );

        assert_eq!(Word::try_from(&BigInt::from(7u64)), Ok(7));
        assert_eq!(SignedWord::try_from(&BigInt::from(-7i64)), Ok(-7));
    }

    #[test]
    fn test_to_double() {
        assert_eq!(BigInt::from(-3i64).to_double(), -3.0);
        assert_eq!(BigInt::from(1u128 << 64).to_double(), 18_446_744_073_709_551_616.0);
        assert_eq!(BigInt::new().to_double(), 0.0);

        // Lossy: 2^64 + 1 is not representable.
        assert_eq!(BigInt::from((1u128 << 64) + 1).to_double(), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_to_double_saturates_past_float_range() {
        let huge = BigInt::from(1u64) << 1088u32;
        assert_eq!(huge.to_double(), f64::INFINITY);
        assert_eq!((-huge).to_double(), f64::NEG_INFINITY);

        // Zero words above the float exponent range must not poison the sum.
        let top = BigInt::from_words(false, &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(top.to_double(), 960f64.exp2());
        assert_eq!((BigInt::from(1u64) << 1024u32).to_double(), f64::INFINITY);
        assert!((BigInt::from(1u64) << 1023u32).to_double().is_finite());
    }

    #[test]
    fn test_fold_digits() {
        let mut value = BigInt::new();
        for c in "123".bytes() {
            value.fold_digit(10, Word::from(c - b'0'));
        }
        assert_eq!(value, 123u64);

        let mut hex = BigInt::new();
        for _ in 0..20 {
            hex.fold_bits(4, 0xf);
        }
        assert_eq!(hex, BigInt::from((1u128 << 80) - 1));
        assert_eq!(hex.min_bit_count(), 80);
    }

    #[test]
    fn test_fold_leading_zeros_stay_zero() {
        let mut value = BigInt::new();
        value.fold_digit(10, 0);
        value.fold_bits(4, 0);
        assert!(value.is_zero());
        assert_eq!(value.words(), &[] as &[Word]);
    }

    #[test]
    fn test_bits() {
        let mut value = BigInt::from(0b1010u64);
        assert!(value.bit(1));
        assert!(!value.bit(0));
        assert!(!value.bit(1000));

        value.set_bit(130, true);
        assert_eq!(value.bit_count(), 192);
        assert_eq!(value.min_bit_count(), 131);
        assert!(value.bit(130));

        value.set_bit(130, false);
        assert_eq!(value.bit_count(), 64);
        assert_eq!(value, 0b1010u64);

        value.set_bit(500, false);
        assert_eq!(value.bit_count(), 64);
    }

    #[test]
    fn test_clearing_last_bit_of_negative_gives_positive_zero() {
        let mut value = BigInt::from(-1i64);
        value.set_bit(0, false);
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn test_negate_and_abs() {
        let mut value = BigInt::from(5u64);
        value.negate();
        assert!(value.is_negative());
        assert_eq!(value.abs(), 5u64);

        let mut zero = BigInt::new();
        zero.negate();
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_ordering() {
        let values = [
            big("-340282366920938463463374607431768211456"),
            big("-18446744073709551616"),
            big("-5"),
            BigInt::new(),
            big("5"),
            big("18446744073709551616"),
        ];
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
        }
        assert_eq!(big("-7").cmp(&big("-7")), Ordering::Equal);
    }

    #[test]
    fn test_debug_canonical_form() {
        assert_eq!(format!("{:?}", BigInt::from(255u64)), "+00000000000000ff");
        assert_eq!(
            format!("{:?}", BigInt::from(-((1i128 << 64) + 2))),
            "-0000000000000001'0000000000000002"
        );
        assert_eq!(format!("{:?}", BigInt::new()), "+");
    }

    #[test]
    fn test_display() {
        assert_eq!(BigInt::new().to_string(), "0");
        assert_eq!(BigInt::from(-42i64).to_string(), "-42");
        assert_eq!(
            BigInt::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(
            big("-100000000000000000000000000000000000001").to_string(),
            "-100000000000000000000000000000000000001"
        );
        assert_eq!(format!("{:>5}", BigInt::from(7u64)), "    7");
    }

    #[test]
    fn test_lower_hex() {
        assert_eq!(format!("{:x}", BigInt::from(1u128 << 64)), "10000000000000000");
        assert_eq!(format!("{:#x}", BigInt::from(-255i64)), "-0xff");
        assert_eq!(format!("{:x}", BigInt::new()), "0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(big("+17"), 17u64);
        assert_eq!(big("-0"), BigInt::new());
        assert!(!big("-0").is_negative());
        assert_eq!("".parse::<BigInt>(), Err(ConversionError::InvalidString));
        assert_eq!("-".parse::<BigInt>(), Err(ConversionError::InvalidString));
        assert_eq!("12x".parse::<BigInt>(), Err(ConversionError::InvalidString));
        assert_eq!("1_000".parse::<BigInt>(), Err(ConversionError::InvalidString));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_decimal_string() {
        let value = big("-123456789012345678901234567890");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
        assert!(serde_json::from_str::<BigInt>("\"1.5\"").is_err());
    }
}
