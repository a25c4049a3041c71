//! 256-bit word helpers
//!
//! Unsigned arithmetic wraps modulo 2^256. Signed helpers treat words as
//! two's complement.

pub use primitive_types::U256 as Word;

/// Size of a word in bytes
pub const WORD_SIZE: usize = 32;

/// Number of words needed to hold `n` bytes
pub const fn round_up_bytes_to_words(n: usize) -> usize {
    n.div_ceil(WORD_SIZE)
}

/// Word to `usize`, `None` when it does not fit
pub fn as_usize(value: &Word) -> Option<usize> {
    if value.bits() > usize::BITS as usize {
        return None;
    }
    usize::try_from(value.low_u64()).ok()
}

/// Big-endian encoding
pub fn to_bytes(value: &Word) -> [u8; WORD_SIZE] {
    let mut out = [0u8; WORD_SIZE];
    value.to_big_endian(&mut out);
    out
}

/// Wrapping addition
pub fn add(a: Word, b: Word) -> Word {
    a.overflowing_add(b).0
}

/// Wrapping subtraction
pub fn sub(a: Word, b: Word) -> Word {
    a.overflowing_sub(b).0
}

/// Wrapping multiplication
pub fn mul(a: Word, b: Word) -> Word {
    a.overflowing_mul(b).0
}

/// Unsigned division, zero divisor yields zero
pub fn div(a: Word, b: Word) -> Word {
    if b.is_zero() {
        Word::zero()
    } else {
        a / b
    }
}

/// Unsigned remainder, zero divisor yields zero
pub fn rem(a: Word, b: Word) -> Word {
    if b.is_zero() {
        Word::zero()
    } else {
        a % b
    }
}

/// Signed division, truncating toward zero
///
/// `-2^255 / -1` wraps back to `-2^255`.
pub fn sdiv(a: Word, b: Word) -> Word {
    if b.is_zero() {
        return Word::zero();
    }
    let a_neg = is_negative(&a);
    let b_neg = is_negative(&b);
    let quotient = abs(a) / abs(b);
    if a_neg != b_neg {
        negate(quotient)
    } else {
        quotient
    }
}

/// Signed remainder, result takes the sign of the dividend
pub fn smod(a: Word, b: Word) -> Word {
    if b.is_zero() {
        return Word::zero();
    }
    let remainder = abs(a) % abs(b);
    if is_negative(&a) {
        negate(remainder)
    } else {
        remainder
    }
}

/// `(a + b) % n` without losing the carry bit
pub fn addmod(a: Word, b: Word, n: Word) -> Word {
    if n.is_zero() {
        return Word::zero();
    }
    let a = a % n;
    let b = b % n;
    let (sum, overflow) = a.overflowing_add(b);
    if overflow || sum >= n {
        sum.overflowing_sub(n).0
    } else {
        sum
    }
}

/// `(a * b) % n` over the full 512-bit product
pub fn mulmod(a: Word, b: Word, n: Word) -> Word {
    if n <= Word::one() {
        return Word::zero();
    }
    let mut result = Word::zero();
    let mut base = a % n;
    let mut multiplier = b;
    while !multiplier.is_zero() {
        if multiplier.bit(0) {
            result = addmod(result, base, n);
        }
        base = addmod(base, base, n);
        multiplier >>= 1;
    }
    result
}

/// Exponentiation modulo 2^256
pub fn exp(base: Word, exponent: Word) -> Word {
    let mut result = Word::one();
    let mut base = base;
    let mut exponent = exponent;
    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = mul(result, base);
        }
        base = mul(base, base);
        exponent >>= 1;
    }
    result
}

/// Number of significant bytes in `value`, as charged by EXP
pub fn byte_len(value: &Word) -> u64 {
    value.bits().div_ceil(8) as u64
}

/// Extend the sign of byte `b` (0 = least significant) across the word
pub fn signextend(b: Word, x: Word) -> Word {
    if b >= Word::from(31) {
        return x;
    }
    let bit = b.low_u64() as usize * 8 + 7;
    let mask = (Word::one() << bit) - 1;
    if x.bit(bit) {
        x | !mask
    } else {
        x & mask
    }
}

/// Byte `i` of `x`, counting from the most significant
pub fn byte(i: Word, x: Word) -> Word {
    if i >= Word::from(WORD_SIZE) {
        return Word::zero();
    }
    Word::from(x.byte(WORD_SIZE - 1 - i.low_u64() as usize))
}

/// Logical shift left
pub fn shl(shift: Word, value: Word) -> Word {
    if shift >= Word::from(256) {
        Word::zero()
    } else {
        value << shift.low_u64() as usize
    }
}

/// Logical shift right
pub fn shr(shift: Word, value: Word) -> Word {
    if shift >= Word::from(256) {
        Word::zero()
    } else {
        value >> shift.low_u64() as usize
    }
}

/// Arithmetic shift right
pub fn sar(shift: Word, value: Word) -> Word {
    let negative = is_negative(&value);
    if shift >= Word::from(256) {
        return if negative { Word::MAX } else { Word::zero() };
    }
    let shift = shift.low_u64() as usize;
    let shifted = value >> shift;
    if negative && shift > 0 {
        shifted | (Word::MAX << (256 - shift))
    } else {
        shifted
    }
}

/// Signed less-than
pub fn slt(a: &Word, b: &Word) -> bool {
    match (is_negative(a), is_negative(b)) {
        (true, false) => true,
        (false, true) => false,
        _ => a < b,
    }
}

/// Signed greater-than
pub fn sgt(a: &Word, b: &Word) -> bool {
    slt(b, a)
}

/// 1 for true, 0 for false
pub fn from_bool(value: bool) -> Word {
    if value {
        Word::one()
    } else {
        Word::zero()
    }
}

fn is_negative(v: &Word) -> bool {
    v.bit(255)
}

fn negate(v: Word) -> Word {
    (!v).overflowing_add(Word::one()).0
}

fn abs(v: Word) -> Word {
    if is_negative(&v) {
        negate(v)
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neg(n: u64) -> Word {
        negate(Word::from(n))
    }

    #[test]
    fn test_round_up_bytes_to_words() {
        assert_eq!(round_up_bytes_to_words(0), 0);
        assert_eq!(round_up_bytes_to_words(1), 1);
        assert_eq!(round_up_bytes_to_words(32), 1);
        assert_eq!(round_up_bytes_to_words(33), 2);
    }

    #[test]
    fn test_as_usize() {
        assert_eq!(as_usize(&Word::from(42)), Some(42));
        assert_eq!(as_usize(&(Word::one() << 64)), None);
        assert_eq!(as_usize(&Word::MAX), None);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(add(Word::MAX, Word::one()), Word::zero());
        assert_eq!(sub(Word::zero(), Word::one()), Word::MAX);
        assert_eq!(mul(Word::MAX, Word::from(2)), Word::MAX - 1);
    }

    #[test]
    fn test_div_rem_by_zero() {
        assert_eq!(div(Word::from(10), Word::zero()), Word::zero());
        assert_eq!(rem(Word::from(10), Word::zero()), Word::zero());
        assert_eq!(div(Word::from(10), Word::from(3)), Word::from(3));
        assert_eq!(rem(Word::from(10), Word::from(3)), Word::one());
    }

    #[test]
    fn test_sdiv() {
        assert_eq!(sdiv(neg(10), Word::from(3)), neg(3));
        assert_eq!(sdiv(neg(10), neg(3)), Word::from(3));
        assert_eq!(sdiv(Word::from(10), neg(3)), neg(3));
        assert_eq!(sdiv(Word::from(10), Word::zero()), Word::zero());
    }

    #[test]
    fn test_sdiv_min_by_minus_one() {
        let min = Word::one() << 255;
        assert_eq!(sdiv(min, Word::MAX), min);
    }

    #[test]
    fn test_smod_sign_of_dividend() {
        assert_eq!(smod(neg(10), Word::from(3)), neg(1));
        assert_eq!(smod(Word::from(10), neg(3)), Word::one());
        assert_eq!(smod(neg(10), Word::zero()), Word::zero());
    }

    #[test]
    fn test_addmod_overflowing_sum() {
        assert_eq!(addmod(Word::MAX, Word::from(2), Word::from(2)), Word::one());
        assert_eq!(addmod(Word::from(10), Word::from(10), Word::from(8)), Word::from(4));
        assert_eq!(addmod(Word::one(), Word::one(), Word::zero()), Word::zero());
    }

    #[test]
    fn test_mulmod_wide_product() {
        assert_eq!(mulmod(Word::MAX, Word::MAX, Word::from(12)), Word::from(9));
        assert_eq!(mulmod(Word::from(10), Word::from(10), Word::from(8)), Word::from(4));
        assert_eq!(mulmod(Word::from(10), Word::from(10), Word::zero()), Word::zero());
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(Word::from(2), Word::from(10)), Word::from(1024));
        assert_eq!(exp(Word::from(2), Word::from(256)), Word::zero());
        assert_eq!(exp(Word::zero(), Word::zero()), Word::one());
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(&Word::zero()), 0);
        assert_eq!(byte_len(&Word::from(0xff)), 1);
        assert_eq!(byte_len(&Word::from(0x100)), 2);
        assert_eq!(byte_len(&Word::MAX), 32);
    }

    #[test]
    fn test_signextend() {
        assert_eq!(signextend(Word::zero(), Word::from(0xff)), Word::MAX);
        assert_eq!(signextend(Word::zero(), Word::from(0x7f)), Word::from(0x7f));
        assert_eq!(signextend(Word::one(), Word::from(0x1_80ff)), Word::from(0x80ff) | !Word::from(0xffff));
        assert_eq!(signextend(Word::from(31), Word::from(5)), Word::from(5));
    }

    #[test]
    fn test_byte() {
        let x = Word::from(0xabcd);
        assert_eq!(byte(Word::from(31), x), Word::from(0xcd));
        assert_eq!(byte(Word::from(30), x), Word::from(0xab));
        assert_eq!(byte(Word::zero(), Word::MAX), Word::from(0xff));
        assert_eq!(byte(Word::from(32), Word::MAX), Word::zero());
    }

    #[test]
    fn test_shifts() {
        assert_eq!(shl(Word::one(), Word::one()), Word::from(2));
        assert_eq!(shl(Word::from(256), Word::one()), Word::zero());
        assert_eq!(shr(Word::from(4), Word::from(0xff)), Word::from(0x0f));
        assert_eq!(shr(Word::from(300), Word::MAX), Word::zero());
    }

    #[test]
    fn test_sar() {
        assert_eq!(sar(Word::one(), neg(2)), neg(1));
        assert_eq!(sar(Word::from(256), neg(2)), Word::MAX);
        assert_eq!(sar(Word::from(256), Word::from(2)), Word::zero());
        assert_eq!(sar(Word::zero(), neg(2)), neg(2));
        assert_eq!(sar(Word::from(4), Word::from(0xff)), Word::from(0x0f));
    }

    #[test]
    fn test_signed_comparison() {
        assert!(slt(&neg(1), &Word::one()));
        assert!(!slt(&Word::one(), &neg(1)));
        assert!(sgt(&Word::one(), &neg(1)));
        assert!(slt(&neg(2), &neg(1)));
    }

    #[test]
    fn test_to_bytes() {
        let bytes = to_bytes(&Word::from(0x0102));
        assert_eq!(bytes[30], 0x01);
        assert_eq!(bytes[31], 0x02);
        assert!(bytes[..30].iter().all(|&b| b == 0));
    }
}
