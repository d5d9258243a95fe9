// ============================================================================
// BigInt Operators
// Arithmetic, shift and comparison operators against BigInt and native ints
// ============================================================================

use super::{magnitude, word_magnitude, BigInt};
use crate::numeric::Word;
use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitOr, BitOrAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

// ============================================================================
// BigInt Operands
// ============================================================================

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.negative, &rhs.words);
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(!rhs.negative && !rhs.words.is_empty(), &rhs.words);
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_signed(rhs.negative, &rhs.words);
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).0;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).1;
    }
}

/// Derive the owned and borrowed binary forms from `OpAssign<&BigInt>`.
/// Owned left operands are updated in place without copying their words.
macro_rules! forward_bigint_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, rhs: BigInt) {
                self.$op_assign(&rhs);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, rhs: &BigInt) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, rhs: BigInt) -> BigInt {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: &BigInt) -> BigInt {
                let mut result = self.clone();
                result.$op_assign(rhs);
                result
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: BigInt) -> BigInt {
                let mut result = self.clone();
                result.$op_assign(&rhs);
                result
            }
        }
    };
}

forward_bigint_binop!(Add, add, AddAssign, add_assign);
forward_bigint_binop!(Sub, sub, SubAssign, sub_assign);
forward_bigint_binop!(Mul, mul, MulAssign, mul_assign);
forward_bigint_binop!(Div, div, DivAssign, div_assign);
forward_bigint_binop!(Rem, rem, RemAssign, rem_assign);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// ============================================================================
// Native Integer Operands
// ============================================================================

/// Sign and magnitude of a native integer operand.
trait WordOperand: Copy {
    fn split_sign(self) -> (bool, Word);
}

impl WordOperand for u32 {
    #[inline]
    fn split_sign(self) -> (bool, Word) {
        (false, Word::from(self))
    }
}

impl WordOperand for u64 {
    #[inline]
    fn split_sign(self) -> (bool, Word) {
        (false, self)
    }
}

impl WordOperand for i32 {
    #[inline]
    fn split_sign(self) -> (bool, Word) {
        (self < 0, Word::from(self.unsigned_abs()))
    }
}

impl WordOperand for i64 {
    #[inline]
    fn split_sign(self) -> (bool, Word) {
        (self < 0, self.unsigned_abs())
    }
}

macro_rules! forward_word_binop {
    ($t:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, rhs: $t) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: $t) -> BigInt {
                let mut result = self.clone();
                result.$op_assign(rhs);
                result
            }
        }
    };
}

macro_rules! impl_word_operand {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let (negative, magnitude) = value.split_sign();
                BigInt::from_words(negative, word_magnitude(&magnitude))
            }
        }

        impl AddAssign<$t> for BigInt {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                let (negative, magnitude) = rhs.split_sign();
                self.add_word_signed(negative, magnitude);
            }
        }

        impl SubAssign<$t> for BigInt {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                let (negative, magnitude) = rhs.split_sign();
                self.add_word_signed(!negative, magnitude);
            }
        }

        impl MulAssign<$t> for BigInt {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                let (negative, magnitude) = rhs.split_sign();
                self.mul_word_signed(negative, magnitude);
            }
        }

        impl DivAssign<$t> for BigInt {
            fn div_assign(&mut self, rhs: $t) {
                let (negative, magnitude) = rhs.split_sign();
                *self = self.div_rem_signed(negative, word_magnitude(&magnitude)).0;
            }
        }

        impl RemAssign<$t> for BigInt {
            fn rem_assign(&mut self, rhs: $t) {
                let (negative, magnitude) = rhs.split_sign();
                *self = self.div_rem_signed(negative, word_magnitude(&magnitude)).1;
            }
        }

        forward_word_binop!($t, Add, add, AddAssign, add_assign);
        forward_word_binop!($t, Sub, sub, SubAssign, sub_assign);
        forward_word_binop!($t, Mul, mul, MulAssign, mul_assign);
        forward_word_binop!($t, Div, div, DivAssign, div_assign);
        forward_word_binop!($t, Rem, rem, RemAssign, rem_assign);

        impl PartialEq<$t> for BigInt {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                let (negative, magnitude) = other.split_sign();
                self.cmp_signed(negative, word_magnitude(&magnitude)) == Ordering::Equal
            }
        }

        impl PartialOrd<$t> for BigInt {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                let (negative, magnitude) = other.split_sign();
                Some(self.cmp_signed(negative, word_magnitude(&magnitude)))
            }
        }
    )*};
}

impl_word_operand!(u32, u64, i32, i64);

// ============================================================================
// Bitwise OR (magnitude)
// ============================================================================

impl BitOrAssign<Word> for BigInt {
    #[inline]
    fn bitor_assign(&mut self, rhs: Word) {
        self.or_word(rhs);
    }
}

impl BitOrAssign<u32> for BigInt {
    #[inline]
    fn bitor_assign(&mut self, rhs: u32) {
        self.or_word(Word::from(rhs));
    }
}

forward_word_binop!(Word, BitOr, bitor, BitOrAssign, bitor_assign);
forward_word_binop!(u32, BitOr, bitor, BitOrAssign, bitor_assign);

// ============================================================================
// Shifts (magnitude)
// ============================================================================

macro_rules! impl_shift {
    ($($t:ty),*) => {$(
        impl ShlAssign<$t> for BigInt {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                magnitude::shl_assign(&mut self.words, rhs as u64);
            }
        }

        impl ShrAssign<$t> for BigInt {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                magnitude::shr_assign(&mut self.words, rhs as u64);
                self.normalize();
            }
        }

        forward_word_binop!($t, Shl, shl, ShlAssign, shl_assign);
        forward_word_binop!($t, Shr, shr, ShrAssign, shr_assign);
    )*};
}

impl_shift!(u32, u64, usize);

/// Shift counts held in a BigInt must be non-negative. A left shift also
/// needs the count to fit a word; a wider right shift clears the magnitude.
impl ShlAssign<&BigInt> for BigInt {
    fn shl_assign(&mut self, rhs: &BigInt) {
        assert!(!rhs.negative, "negative shift count");
        let Ok(count) = rhs.to_unsigned() else {
            panic!("shift count out of range");
        };
        *self <<= count;
    }
}

impl ShrAssign<&BigInt> for BigInt {
    fn shr_assign(&mut self, rhs: &BigInt) {
        assert!(!rhs.negative, "negative shift count");
        match rhs.to_unsigned() {
            Ok(count) => *self >>= count,
            Err(_) => {
                self.words.clear();
                self.normalize();
            },
        }
    }
}

forward_word_binop!(&BigInt, Shl, shl, ShlAssign, shl_assign);
forward_word_binop!(&BigInt, Shr, shr, ShrAssign, shr_assign);

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
    fn test_add_mixed_signs() {
        assert_eq!(big("5") + big("-8"), -3i64);
        assert_eq!(big("-5") + big("8"), 3i64);
        assert_eq!(big("-5") + big("-8"), -13i64);
        assert_eq!(big("5") + big("-5"), 0u64);
        assert!(!(big("5") + big("-5")).is_negative());
    }

    #[test]
    fn test_add_carries_into_new_word() {
        let sum = BigInt::from(u64::MAX) + BigInt::from(1u64);
        assert_eq!(sum, BigInt::from(1u128 << 64));
        assert!(sum.is_big());
    }

    #[test]
    fn test_sub() {
        let a = big("340282366920938463463374607431768211456");
        let b = big("1");
        assert_eq!(&a - &b, BigInt::from(u128::MAX));
        assert_eq!(&b - &a, -BigInt::from(u128::MAX));
        assert_eq!(&a - &a, 0u64);
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(big("-3") * big("4"), -12i64);
        assert_eq!(big("-3") * big("-4"), 12i64);
        assert_eq!(big("-3") * BigInt::new(), 0u64);
        assert!(!(big("-3") * BigInt::new()).is_negative());
    }

    #[test]
    fn test_mul_multi_word() {
        let a = BigInt::from(u128::MAX);
        let product = &a * &a;
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let expected = (BigInt::from(1u64) << 256u32) - (BigInt::from(1u64) << 129u32) + 1u64;
        assert_eq!(product, expected);
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(big("-7") / big("2"), -3i64);
        assert_eq!(big("-7") % big("2"), -1i64);
        assert_eq!(big("7") / big("-2"), -3i64);
        assert_eq!(big("7") % big("-2"), 1i64);
        assert_eq!(big("-7") / big("-2"), 3i64);
        assert_eq!(big("-7") % big("-2"), -1i64);
        assert_eq!(big("-6") % big("2"), 0u64);
        assert!(!(big("-6") % big("2")).is_negative());
    }

    #[test]
    fn test_division_by_word() {
        let value = big("-123456789012345678901234567890");
        let (q, r) = value.div_rem_word(1_000_000_007);
        assert_eq!(&q * 1_000_000_007u64 + &r, value);
        assert!(r.is_negative() || r.is_zero());

        assert_eq!(big("-7") / 2i64, -3i64);
        assert_eq!(big("-7") % -2i64, -1i64);
        assert_eq!(big("100") / 7u32, 14u64);
    }

    #[test]
    fn test_division_multi_word_divisor() {
        let dividend = big("340282366920938463463374607431768211457000");
        let divisor = big("18446744073709551629");
        let (q, r) = dividend.div_rem(&divisor);
        assert_eq!(&q * &divisor + &r, dividend);
        assert!(r < divisor);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let _ = big("10") / BigInt::new();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_word_division_by_zero_panics() {
        let _ = big("10") % 0u64;
    }

    #[test]
    fn test_word_operands() {
        let mut value = BigInt::new();
        value -= 5u64;
        assert_eq!(value, -5i64);
        value += 7i32;
        assert_eq!(value, 2u32);
        value -= -3i64;
        assert_eq!(value, 5u64);
        value *= -2i64;
        assert_eq!(value, -10i64);
        value += 10u64;
        assert!(value.is_zero() && !value.is_negative());

        let wide = BigInt::from(u64::MAX) + u64::MAX;
        assert_eq!(wide, BigInt::from(u64::MAX as u128 * 2));
        assert_eq!(wide - u64::MAX, u64::MAX);
    }

    #[test]
    fn test_word_comparisons() {
        assert!(big("-1") < 0u64);
        assert!(big("-1") < 0i64);
        assert!(big("-1") > -2i64);
        assert!(BigInt::from(1u128 << 64) > u64::MAX);
        assert!(BigInt::from(-(1i128 << 64)) < i64::MIN);
        assert_eq!(BigInt::new(), 0i32);
    }

    #[test]
    fn test_shift_round_trip() {
        let value = big("123456789012345678901234567890");
        assert_eq!((&value << 77u32) >> 77u32, value);
        assert_eq!(BigInt::from(1u64) << 64u64, BigInt::from(1u128 << 64));
    }

    #[test]
    fn test_bigint_shift_counts() {
        let value = big("-123456789012345678901234567890");
        let count = BigInt::from(77u64);
        assert_eq!(&value << &count, &value << 77u32);
        assert_eq!((&value << &count) >> &count, value);

        let mut shifted = value.clone();
        shifted <<= &BigInt::from(3u64);
        shifted >>= &BigInt::from(1u64);
        assert_eq!(shifted, &value * 4u64);

        // Counts wider than a word shift everything out.
        let wide = BigInt::from(1u128 << 64);
        assert!((value >> &wide).is_zero());
    }

    #[test]
    #[should_panic(expected = "negative shift count")]
    fn test_negative_bigint_shift_count_panics() {
        let _ = big("1") << &BigInt::from(-1i64);
    }

    #[test]
    #[should_panic(expected = "shift count out of range")]
    fn test_wide_bigint_left_shift_count_panics() {
        let _ = big("1") << &BigInt::from(1u128 << 64);
    }

    #[test]
    fn test_negative_right_shift_acts_on_magnitude() {
        // Two's complement would give -3; the magnitude shift gives -2.
        assert_eq!(big("-5") >> 1u32, -2i64);
        assert_eq!(big("-1") >> 1u32, 0u64);
        assert!(!(big("-1") >> 1u32).is_negative());
        assert_eq!(big("-5") << 2u32, -20i64);
    }

    #[test]
    fn test_incremental_operators() {
        let mut value = BigInt::new();
        for c in "DEADBEEFDEADBEEFDEADBEEF".bytes() {
            value <<= 4u32;
            value |= Word::from((c as char).to_digit(16).unwrap());
        }
        assert_eq!(format!("{:x}", value), "deadbeefdeadbeefdeadbeef");

        let mut decimal = BigInt::new();
        for c in "123".bytes() {
            decimal *= 10u64;
            decimal += Word::from(c - b'0');
        }
        assert_eq!(decimal, 123u64);
    }

    #[test]
    fn test_neg() {
        let value = big("42");
        assert_eq!(-&value, -42i64);
        assert_eq!(-(-value), 42u64);
        assert!(!(-BigInt::new()).is_negative());
    }
}
