// ============================================================================
// Numeric Module
// Fixed-width building blocks for literal conversion and big integers
// ============================================================================
//
// This module provides:
// - Word/DoubleWord: the base-2^64 digit and its carry-safe primitives
// - NumericBase: the digit alphabets literal text may use
// - string_to_*: digit runs to fixed-width integers and approximate floats
// - ConversionError: the shared error taxonomy
//
// Design principles:
// - No intermediate overflow: bounds are proven before accumulation
// - All conversions return Result (no panics)
// - Pure functions, no I/O

mod base;
mod convert;
mod dword;
mod errors;

pub use base::NumericBase;
pub(crate) use convert::narrow_signed;
pub use convert::{
    dec_string_to_double, hex_string_to_double, string_to_double,
    string_to_double_with_base_digits, string_to_signed, string_to_unsigned,
};
pub use dword::{add2, add2_wide, div2, mul2, sub2, DoubleWord, SignedWord, Word, WORD_BITS};
pub use errors::{ConversionError, ConversionResult};
