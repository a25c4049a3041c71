//! Byte-addressable execution memory

use crate::fee_schedule::memory_cost;
use crate::status::Status;
use crate::word::{self, Word, WORD_SIZE};

/// Capacity reserved up front
const INITIAL_CAPACITY: usize = 4 * 1024;

/// Largest offset or size the engine accepts. Anything larger could never
/// be paid for, so it is reported as out of gas.
const MAX_BUFFER_SIZE: u64 = u32::MAX as u64;

/// EVM memory
///
/// Zero-initialised, grows in whole words and never shrinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Empty memory
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Size in bytes, always a multiple of 32
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been touched yet
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Charge for and perform the expansion needed to touch
    /// `[offset, offset + size)`.
    ///
    /// A zero `size` never expands. On `OutOfGas` neither memory nor
    /// `gas_left` changes.
    pub fn grow_if_needed(&mut self, gas_left: &mut u64, offset: &Word, size: &Word) -> Status {
        if size.is_zero() {
            return Status::Success;
        }
        if offset.bits() > 32 || size.bits() > 32 {
            return Status::OutOfGas;
        }
        let end = offset.low_u64() + size.low_u64();
        if end > MAX_BUFFER_SIZE {
            return Status::OutOfGas;
        }
        let end = end as usize;
        if end <= self.data.len() {
            return Status::Success;
        }

        let new_words = word::round_up_bytes_to_words(end) as u64;
        let current_words = (self.data.len() / WORD_SIZE) as u64;
        let cost = memory_cost(new_words) - memory_cost(current_words);
        if cost > *gas_left {
            return Status::OutOfGas;
        }
        *gas_left -= cost;
        self.data.resize(new_words as usize * WORD_SIZE, 0);
        Status::Success
    }

    /// Read a word at `offset`; the range must already be expanded
    pub fn load_word(&self, offset: usize) -> Word {
        Word::from_big_endian(&self.data[offset..offset + WORD_SIZE])
    }

    /// Write a word at `offset`; the range must already be expanded
    pub fn store_word(&mut self, offset: usize, value: &Word) {
        value.to_big_endian(&mut self.data[offset..offset + WORD_SIZE]);
    }

    /// Write one byte at `offset`; the byte must already be expanded
    pub fn store_byte(&mut self, offset: usize, value: u8) {
        self.data[offset] = value;
    }

    /// Borrow `size` bytes at `offset`; the range must already be expanded
    pub fn slice(&self, offset: usize, size: usize) -> &[u8] {
        &self.data[offset..offset + size]
    }

    /// Raw contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grow(mem: &mut Memory, gas: &mut u64, offset: u64, size: u64) -> Status {
        mem.grow_if_needed(gas, &Word::from(offset), &Word::from(size))
    }

    #[test]
    fn test_grow_charges_linear_cost() {
        let mut mem = Memory::new();
        let mut gas = 100;
        assert_eq!(grow(&mut mem, &mut gas, 0, 32), Status::Success);
        assert_eq!(mem.len(), 32);
        assert_eq!(gas, 97);
    }

    #[test]
    fn test_grow_rounds_up_to_words() {
        let mut mem = Memory::new();
        let mut gas = 1_000;
        assert_eq!(grow(&mut mem, &mut gas, 0, 33), Status::Success);
        assert_eq!(mem.len(), 64);
        assert_eq!(gas, 1_000 - 6);
        assert_eq!(grow(&mut mem, &mut gas, 31, 1), Status::Success);
        assert_eq!(mem.len(), 64);
        assert_eq!(gas, 1_000 - 6);
    }

    #[test]
    fn test_grow_charges_only_the_difference() {
        let mut mem = Memory::new();
        let mut gas = 10_000;
        grow(&mut mem, &mut gas, 0, 32);
        let before = gas;
        grow(&mut mem, &mut gas, 32, 32);
        assert_eq!(before - gas, 3);
    }

    #[test]
    fn test_grow_quadratic_term() {
        let mut mem = Memory::new();
        let mut gas = u64::MAX;
        // 1024 words: 3 * 1024 + 1024^2 / 512
        grow(&mut mem, &mut gas, 0, 1024 * 32);
        assert_eq!(u64::MAX - gas, 3 * 1024 + 2048);
    }

    #[test]
    fn test_zero_size_never_grows() {
        let mut mem = Memory::new();
        let mut gas = 0;
        assert_eq!(
            mem.grow_if_needed(&mut gas, &Word::MAX, &Word::zero()),
            Status::Success
        );
        assert!(mem.is_empty());
    }

    #[test]
    fn test_out_of_gas_leaves_state() {
        let mut mem = Memory::new();
        let mut gas = 2;
        assert_eq!(grow(&mut mem, &mut gas, 0, 32), Status::OutOfGas);
        assert_eq!(gas, 2);
        assert!(mem.is_empty());
    }

    #[test]
    fn test_huge_offset_is_out_of_gas() {
        let mut mem = Memory::new();
        let mut gas = u64::MAX;
        assert_eq!(
            mem.grow_if_needed(&mut gas, &(Word::one() << 40), &Word::one()),
            Status::OutOfGas
        );
        assert_eq!(
            mem.grow_if_needed(&mut gas, &Word::zero(), &Word::MAX),
            Status::OutOfGas
        );
        assert_eq!(gas, u64::MAX);
    }

    #[test]
    fn test_store_load_word() {
        let mut mem = Memory::new();
        let mut gas = 100;
        grow(&mut mem, &mut gas, 0, 64);
        mem.store_word(16, &Word::from(0xdeadbeefu64));
        assert_eq!(mem.load_word(16), Word::from(0xdeadbeefu64));
        assert_eq!(mem.slice(44, 4), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_store_byte() {
        let mut mem = Memory::new();
        let mut gas = 100;
        grow(&mut mem, &mut gas, 0, 1);
        mem.store_byte(0, 0xab);
        assert_eq!(mem.data()[0], 0xab);
        assert_eq!(mem.len(), 32);
    }

    #[test]
    fn test_fresh_memory_reads_zero() {
        let mut mem = Memory::new();
        let mut gas = 100;
        grow(&mut mem, &mut gas, 0, 32);
        assert_eq!(mem.load_word(0), Word::zero());
    }
}
