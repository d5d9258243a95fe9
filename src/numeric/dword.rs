// ============================================================================
// Double-Word Primitives
// Exact carry-safe add/sub/mul on single words with a two-word result
// ============================================================================
//
// Every primitive here is total over its inputs (except `div2`, which has a
// documented precondition) and never relies on native overflow behaviour:
// carries are recovered by working in half words.

/// One digit of a multi-word number.
pub type Word = u64;

/// Signed counterpart of [`Word`], the target of signed narrowing.
pub type SignedWord = i64;

/// Width of a [`Word`] in bits.
pub const WORD_BITS: u32 = Word::BITS;

const HALF_SHIFT: u32 = WORD_BITS / 2;
const HALF_MASK: Word = Word::MAX >> HALF_SHIFT;

/// A value spanning two words: `high * 2^W + low`.
///
/// Field order makes the derived `Ord` compare `high` first, which is the
/// numeric order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoubleWord {
    pub high: Word,
    pub low: Word,
}

impl DoubleWord {
    /// Zero
    pub const ZERO: Self = Self { high: 0, low: 0 };

    #[inline]
    pub const fn new(high: Word, low: Word) -> Self {
        Self { high, low }
    }

    /// Widen a single word.
    #[inline]
    pub const fn from_word(low: Word) -> Self {
        Self { high: 0, low }
    }

    #[inline]
    pub const fn to_u128(self) -> u128 {
        ((self.high as u128) << WORD_BITS) | self.low as u128
    }

    /// Two's complement negation modulo `2^(2W)`.
    #[inline]
    pub const fn negate(self) -> Self {
        add2_wide(
            Self {
                high: !self.high,
                low: !self.low,
            },
            1,
            0,
        )
    }
}

/// Exact `a + b + c`.
#[inline]
pub const fn add2(a: Word, b: Word, c: Word) -> DoubleWord {
    let low = (a & HALF_MASK) + (b & HALF_MASK) + (c & HALF_MASK);
    let mid = (a >> HALF_SHIFT) + (b >> HALF_SHIFT) + (c >> HALF_SHIFT) + (low >> HALF_SHIFT);

    DoubleWord {
        high: mid >> HALF_SHIFT,
        low: (low & HALF_MASK) | (mid << HALF_SHIFT),
    }
}

/// `a + b + c` modulo `2^(2W)`.
#[inline]
pub const fn add2_wide(a: DoubleWord, b: Word, c: Word) -> DoubleWord {
    let sum = add2(a.low, b, c);
    DoubleWord {
        high: sum.high.wrapping_add(a.high),
        low: sum.low,
    }
}

/// `a - b - c` modulo `2^(2W)`.
///
/// The subtrahend is negated by complement-plus-one and added, so a borrow
/// shows up as a non-zero `high` word (all ones for single-word operands).
#[inline]
pub const fn sub2(a: Word, b: Word, c: Word) -> DoubleWord {
    add2_wide(add2(b, c, 0).negate(), a, 0)
}

/// Exact `a * b`, built from four half-word partial products.
#[inline]
pub const fn mul2(a: Word, b: Word) -> DoubleWord {
    let a_low = a & HALF_MASK;
    let a_high = a >> HALF_SHIFT;
    let b_low = b & HALF_MASK;
    let b_high = b >> HALF_SHIFT;

    let low = a_low * b_low;
    let mid = add2(a_low * b_high, a_high * b_low, low >> HALF_SHIFT);
    let high = a_high * b_high;

    DoubleWord {
        high: high + (mid.high << HALF_SHIFT) + (mid.low >> HALF_SHIFT),
        low: (low & HALF_MASK) | (mid.low << HALF_SHIFT),
    }
}

/// Divide a double word by a single word, returning `(quotient, remainder)`.
///
/// # Panics
/// Panics if `divisor` is zero or `n.high >= divisor` (the quotient would not
/// fit one word).
#[inline]
pub fn div2(n: DoubleWord, divisor: Word) -> (Word, Word) {
    assert!(divisor != 0, "division by zero");
    assert!(n.high < divisor, "double-word quotient overflow");

    let divisor = divisor as u128;
    let n = n.to_u128();
    ((n / divisor) as Word, (n % divisor) as Word)
}
