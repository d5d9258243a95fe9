// ============================================================================
// Basic Usage Example
// ============================================================================

use fasm_numeric::numeric::{div2, dec_string_to_double, hex_string_to_double};
use fasm_numeric::prelude::*;

fn main() {
    println!("=== FASM Numeric Example ===\n");

    // Fixed-width conversion
    println!("Fixed-width conversion...");
    for (digits, base) in [
        ("101101", NumericBase::Bin),
        ("755", NumericBase::Oct),
        ("18446744073709551615", NumericBase::Dec),
        ("18446744073709551616", NumericBase::Dec),
        ("DEADBEEF", NumericBase::Hex),
        ("12z", NumericBase::Hex),
    ] {
        match string_to_unsigned(digits, base) {
            Ok(value) => println!("  {:>22} ({}) = {}", digits, base, value),
            Err(e) => println!("  {:>22} ({}) rejected: {}", digits, base, e),
        }
    }

    println!("\nSigned conversion...");
    for digits in ["-9223372036854775808", "9223372036854775808", "+42"] {
        println!("  {:>22} -> {:?}", digits, string_to_signed(digits, NumericBase::Dec));
    }

    println!("\nFloat approximation...");
    println!("  -1.5e2  = {:?}", dec_string_to_double("-1", "5", "2"));
    println!("  0x1.8p4 = {:?}", hex_string_to_double("1", "8", "4"));

    // Double-word primitives
    println!("\nDouble-word primitives...");
    let product = mul2(Word::MAX, Word::MAX);
    println!("  MAX * MAX     = {:#x}:{:016x}", product.high, product.low);
    let sum = add2(Word::MAX, Word::MAX, 1);
    println!("  MAX + MAX + 1 = {:#x}:{:016x}", sum.high, sum.low);
    let difference = sub2(0, 1, 0);
    println!("  0 - 1         = {:#x}:{:016x}", difference.high, difference.low);
    let (quotient, remainder) = div2(product, Word::MAX);
    println!("  (MAX * MAX) / MAX = {:#x} rem {}", quotient, remainder);

    // Wide literals
    println!("\nSized literals...");
    for text in ["8'hff", "8'h1ff", "4'b1_010", "128'hffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff"] {
        match text.parse::<SizedLiteral>() {
            Ok(literal) => println!(
                "  {:>48} -> {} ({} bits, fits word: {})",
                text,
                literal,
                literal.value.min_bit_count(),
                literal.to_unsigned().is_ok()
            ),
            Err(e) => println!("  {:>48} rejected: {}", text, e),
        }
    }

    // BigInt arithmetic
    println!("\nBigInt arithmetic...");
    let config = DigitRunConfig::new(NumericBase::Dec).with_separators(true);
    let a = match fold_digit_run("123_456_789_012_345_678_901_234_567_890", &config) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Failed to fold digit run: {}", e);
            return;
        }
    };
    let b = BigInt::from(-987_654_321i64);

    println!("  a       = {}", a);
    println!("  b       = {}", b);
    println!("  a + b   = {}", &a + &b);
    println!("  a * b   = {}", &a * &b);
    let (q, r) = a.div_rem(&b);
    println!("  a / b   = {} rem {}", q, r);
    println!("  -a >> 3 = {}", -&a >> 3u32);
    println!("  a (hex) = {:#x}", a);
    println!("  a (raw) = {:?}", a);

    println!("\n=== Example Complete ===");
}
