// ============================================================================
// FASM Numeric Library
// Literal conversion and arbitrary-precision integers for format parsers
// ============================================================================

//! # FASM Numeric
//!
//! Numeric building blocks for parsers of FPGA assembly and Verilog-style
//! constant text.
//!
//! ## Features
//!
//! - **Double-word primitives**: carry-safe add, subtract and multiply on
//!   64-bit words without a wider native type
//! - **Digit run conversion** to `u64`, `i64` and `f64` with explicit
//!   bounds checking in bases 2, 8, 10 and 16
//! - **Arbitrary-precision integers** with sign-magnitude semantics and
//!   truncating division
//! - **Wide literals** folded one digit at a time, with `_` separators and
//!   declared widths
//!
//! ## Example
//!
//! ```rust
//! use fasm_numeric::prelude::*;
//!
//! // Fixed-width conversion with bounds checking
//! assert_eq!(string_to_unsigned("ff", NumericBase::Hex), Ok(255));
//! assert_eq!(
//!     string_to_unsigned("18446744073709551616", NumericBase::Dec),
//!     Err(ConversionError::OutOfBounds)
//! );
//!
//! // Wide constants go through BigInt
//! let literal: SizedLiteral = "72'hff_0000_0000_0000_0001".parse().unwrap();
//! assert_eq!(literal.value.min_bit_count(), 72);
//!
//! let doubled = &literal.value * 2u64;
//! assert_eq!(doubled.min_bit_count(), 73);
//! ```

pub mod bigint;
pub mod literal;
pub mod numeric;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bigint::BigInt;
    pub use crate::literal::{fold_digit_run, DigitRunConfig, SizedLiteral};
    pub use crate::numeric::{
        add2, mul2, string_to_double, string_to_signed, string_to_unsigned, sub2,
        ConversionError, ConversionResult, DoubleWord, NumericBase, SignedWord, Word,
    };
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use num_bigint::Sign;
    use proptest::prelude::*;

    /// Sign and up to five magnitude words.
    fn operand() -> impl Strategy<Value = (bool, Vec<Word>)> {
        (any::<bool>(), prop::collection::vec(any::<Word>(), 0..6))
    }

    fn ours((negative, words): &(bool, Vec<Word>)) -> BigInt {
        BigInt::from_words(*negative, words)
    }

    fn oracle((negative, words): &(bool, Vec<Word>)) -> num_bigint::BigInt {
        let digits = words
            .iter()
            .flat_map(|&w| [w as u32, (w >> 32) as u32])
            .collect();
        let sign = if *negative { Sign::Minus } else { Sign::Plus };
        num_bigint::BigInt::from_biguint(sign, num_bigint::BigUint::new(digits))
    }

    /// No most-significant zero word and no negative zero.
    fn is_normalized(value: &BigInt) -> bool {
        value.words().last() != Some(&0) && !(value.is_zero() && value.is_negative())
    }

    proptest! {
        #[test]
        fn prop_additive_identity_and_inverse(a in operand()) {
            let a = ours(&a);
            prop_assert_eq!(&a + BigInt::new(), a.clone());

            let zero = &a + &(-&a);
            prop_assert!(zero.is_zero());
            prop_assert!(!zero.is_negative());
            prop_assert_eq!(zero, &a - &a);
        }

        #[test]
        fn prop_unsigned_round_trip(value in any::<Word>()) {
            prop_assert_eq!(BigInt::from(value).to_unsigned(), Ok(value));
            prop_assert_eq!(Word::try_from(&BigInt::from(value)), Ok(value));
        }

        #[test]
        fn prop_signed_round_trip(value in any::<SignedWord>()) {
            prop_assert_eq!(BigInt::from(value).to_signed(), Ok(value));
            prop_assert_eq!(SignedWord::try_from(&BigInt::from(value)), Ok(value));
        }

        #[test]
        fn prop_results_stay_normalized(
            a in operand(),
            b in operand(),
            word in any::<Word>(),
            shift in 0u32..200,
        ) {
            let (a, b) = (ours(&a), ours(&b));
            prop_assert!(is_normalized(&a));

            let mut results = vec![
                &a + &b,
                &a - &b,
                &a * &b,
                -&a,
                &a + word,
                &a - word,
                &a * word,
                &a << shift,
                &a >> shift,
            ];
            if !b.is_zero() {
                results.push(&a / &b);
                results.push(&a % &b);
            }
            if word != 0 {
                results.push(&a / word);
                results.push(&a % word);
            }

            for result in &results {
                prop_assert!(is_normalized(result), "{:?}", result);
            }
        }

        #[test]
        fn prop_multiplicative_identity(a in operand()) {
            let a = ours(&a);
            prop_assert_eq!(&a * 1u64, a.clone());
            prop_assert!((&a * BigInt::new()).is_zero());
        }

        #[test]
        fn prop_commutative(a in operand(), b in operand()) {
            let (a, b) = (ours(&a), ours(&b));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn prop_associative(a in operand(), b in operand(), c in operand()) {
            let (a, b, c) = (ours(&a), ours(&b), ours(&c));
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn prop_division_law(a in operand(), b in operand()) {
            let (a, b) = (ours(&a), ours(&b));
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        #[test]
        fn prop_shift_round_trip(a in operand(), shift in 0u32..300) {
            let a = ours(&a);
            prop_assert_eq!((&a << shift) >> shift, a);
        }

        #[test]
        fn prop_matches_oracle(a in operand(), b in operand()) {
            let (x, y) = (oracle(&a), oracle(&b));
            let (a, b) = (ours(&a), ours(&b));

            prop_assert_eq!(a.to_string(), x.to_string());
            prop_assert_eq!((&a + &b).to_string(), (&x + &y).to_string());
            prop_assert_eq!((&a - &b).to_string(), (&x - &y).to_string());
            prop_assert_eq!((&a * &b).to_string(), (&x * &y).to_string());
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));

            if !b.is_zero() {
                prop_assert_eq!((&a / &b).to_string(), (&x / &y).to_string());
                prop_assert_eq!((&a % &b).to_string(), (&x % &y).to_string());
            }
        }

        #[test]
        fn prop_decimal_text_round_trip(a in operand()) {
            let a = ours(&a);
            let parsed: BigInt = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
