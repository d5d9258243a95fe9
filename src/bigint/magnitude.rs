// ============================================================================
// Magnitude Kernels
// Sign-blind arithmetic on little-endian word sequences
// ============================================================================
//
// Every input slice is normalized (no most-significant zero words) and every
// kernel leaves its output normalized. Carries and borrows go through the
// double-word primitives.

use crate::numeric::{add2, add2_wide, div2, mul2, sub2, DoubleWord, Word, WORD_BITS};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// Magnitude storage; one or two words stay inline.
pub(crate) type Words = SmallVec<[Word; 2]>;

const WORD_BITS_WIDE: u64 = WORD_BITS as u64;

#[inline]
pub(super) fn trim(words: &mut Words) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

/// Split a bit count into whole words and the remaining bits.
#[inline]
fn split_shift(shift: u64) -> (u64, u32) {
    (shift / WORD_BITS_WIDE, (shift % WORD_BITS_WIDE) as u32)
}

pub(super) fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

// ============================================================================
// Single-Word Operands
// ============================================================================

pub(super) fn add_word(words: &mut Words, value: Word) {
    let mut carry = value;
    for word in words.iter_mut() {
        if carry == 0 {
            return;
        }
        let sum = add2(*word, carry, 0);
        *word = sum.low;
        carry = sum.high;
    }
    if carry != 0 {
        words.push(carry);
    }
}

/// # Panics
/// Panics if `value` is larger than the magnitude.
pub(super) fn sub_word(words: &mut Words, value: Word) {
    let mut borrow = value;
    for word in words.iter_mut() {
        if borrow == 0 {
            break;
        }
        let diff = sub2(*word, borrow, 0);
        *word = diff.low;
        borrow = Word::from(diff.high != 0);
    }
    assert!(borrow == 0, "magnitude subtraction underflow");
    trim(words);
}

/// `words = words * factor + addend`, in one pass.
pub(super) fn mul_add_word(words: &mut Words, factor: Word, addend: Word) {
    let mut carry = addend;
    for word in words.iter_mut() {
        let product = add2_wide(mul2(*word, factor), carry, 0);
        *word = product.low;
        carry = product.high;
    }
    if carry != 0 {
        words.push(carry);
    }
    trim(words);
}

/// # Panics
/// Panics if `divisor` is zero.
pub(super) fn div_rem_word(words: &[Word], divisor: Word) -> (Words, Word) {
    assert!(divisor != 0, "division by zero");

    let mut quotient: Words = smallvec![0; words.len()];
    let mut remainder = 0;
    for (i, &word) in words.iter().enumerate().rev() {
        let (q, r) = div2(DoubleWord::new(remainder, word), divisor);
        quotient[i] = q;
        remainder = r;
    }
    trim(&mut quotient);
    (quotient, remainder)
}

// ============================================================================
// Multi-Word Operands
// ============================================================================

pub(super) fn add_assign(a: &mut Words, b: &[Word]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut carry = 0;
    for (i, word) in a.iter_mut().enumerate() {
        if i >= b.len() && carry == 0 {
            break;
        }
        let sum = add2(*word, b.get(i).copied().unwrap_or(0), carry);
        *word = sum.low;
        carry = sum.high;
    }
    if carry != 0 {
        a.push(carry);
    }
}

/// # Panics
/// Panics if `b` is larger than `a`.
pub(super) fn sub_assign(a: &mut Words, b: &[Word]) {
    assert!(a.len() >= b.len(), "magnitude subtraction underflow");

    let mut borrow = 0;
    for (i, word) in a.iter_mut().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }
        let diff = sub2(*word, b.get(i).copied().unwrap_or(0), borrow);
        *word = diff.low;
        borrow = Word::from(diff.high != 0);
    }
    assert!(borrow == 0, "magnitude subtraction underflow");
    trim(a);
}

/// Schoolbook product.
pub(super) fn mul(a: &[Word], b: &[Word]) -> Words {
    if a.is_empty() || b.is_empty() {
        return Words::new();
    }

    let mut product: Words = smallvec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            // x*y + product + carry <= (2^W - 1)^2 + 2(2^W - 1) = 2^2W - 1
            let t = add2_wide(mul2(x, y), product[i + j], carry);
            product[i + j] = t.low;
            carry = t.high;
        }
        product[i + b.len()] = carry;
    }
    trim(&mut product);
    product
}

/// Truncating division of magnitudes, returning `(quotient, remainder)`.
///
/// # Panics
/// Panics if `b` is zero.
pub(super) fn div_rem(a: &[Word], b: &[Word]) -> (Words, Words) {
    assert!(!b.is_empty(), "division by zero");

    if cmp(a, b) == Ordering::Less {
        return (Words::new(), Words::from_slice(a));
    }
    if let [divisor] = b {
        let (quotient, remainder) = div_rem_word(a, *divisor);
        let remainder = if remainder == 0 {
            Words::new()
        } else {
            smallvec![remainder]
        };
        return (quotient, remainder);
    }
    div_rem_long(a, b)
}

/// Long division for divisors of two or more words, `a >= b`.
///
/// The divisor is shifted so its top bit is set, which keeps every quotient
/// estimate at most two above the true word.
fn div_rem_long(a: &[Word], b: &[Word]) -> (Words, Words) {
    let n = b.len();
    let shift = u64::from(b[n - 1].leading_zeros());

    let mut v = Words::from_slice(b);
    shl_assign(&mut v, shift);
    let mut u = Words::from_slice(a);
    shl_assign(&mut u, shift);
    if u.len() == a.len() {
        u.push(0);
    }

    let v_top = v[n - 1];
    let v_next = v[n - 2];
    let mut quotient: Words = smallvec![0; u.len() - n];

    for j in (0..u.len() - n).rev() {
        let u_top = u[j + n];
        let (mut q_hat, mut r_hat) = if u_top == v_top {
            (Word::MAX, u[j + n - 1].checked_add(v_top))
        } else {
            let (q, r) = div2(DoubleWord::new(u_top, u[j + n - 1]), v_top);
            (q, Some(r))
        };

        while let Some(r) = r_hat {
            if mul2(q_hat, v_next) <= DoubleWord::new(r, u[j + n - 2]) {
                break;
            }
            q_hat -= 1;
            r_hat = r.checked_add(v_top);
        }

        // u[j..=j+n] -= q_hat * v
        let mut carry = 0;
        let mut borrow = 0;
        for i in 0..n {
            let product = add2_wide(mul2(q_hat, v[i]), carry, 0);
            carry = product.high;
            let diff = sub2(u[i + j], product.low, borrow);
            u[i + j] = diff.low;
            borrow = Word::from(diff.high != 0);
        }
        let diff = sub2(u[j + n], carry, borrow);
        u[j + n] = diff.low;

        if diff.high != 0 {
            // Estimate was one too large: add the divisor back.
            q_hat -= 1;
            let mut carry = 0;
            for i in 0..n {
                let sum = add2(u[i + j], v[i], carry);
                u[i + j] = sum.low;
                carry = sum.high;
            }
            u[j + n] = u[j + n].wrapping_add(carry);
        }

        quotient[j] = q_hat;
    }

    u.truncate(n);
    trim(&mut u);
    shr_assign(&mut u, shift);
    trim(&mut quotient);
    (quotient, u)
}

// ============================================================================
// Shifts
// ============================================================================

pub(super) fn shl_assign(words: &mut Words, shift: u64) {
    if words.is_empty() || shift == 0 {
        return;
    }

    let (word_shift, bit_shift) = split_shift(shift);
    if bit_shift != 0 {
        let mut carry = 0;
        for word in words.iter_mut() {
            let next = *word >> (WORD_BITS - bit_shift);
            *word = (*word << bit_shift) | carry;
            carry = next;
        }
        if carry != 0 {
            words.push(carry);
        }
    }
    if word_shift != 0 {
        words.insert_many(0, std::iter::repeat(0).take(word_shift as usize));
    }
}

pub(super) fn shr_assign(words: &mut Words, shift: u64) {
    let (word_shift, bit_shift) = split_shift(shift);
    if word_shift >= words.len() as u64 {
        words.clear();
        return;
    }

    words.drain(..word_shift as usize);
    if bit_shift != 0 {
        let mut carry = 0;
        for word in words.iter_mut().rev() {
            let next = *word << (WORD_BITS - bit_shift);
            *word = (*word >> bit_shift) | carry;
            carry = next;
        }
    }
    trim(words);
}
