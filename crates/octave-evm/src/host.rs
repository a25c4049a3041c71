//! Account storage seen by the interpreter

use crate::storage_status::StorageStatus;
use crate::word::Word;
use octave_primitives::Address;
use std::collections::{HashMap, HashSet};

/// State access required by storage opcodes
///
/// The interpreter never owns state. Implementations decide how slots are
/// persisted and rolled back.
pub trait Host {
    /// Current value of a slot
    fn sload(&mut self, address: &Address, key: &Word) -> Word;

    /// Write a slot and classify the write against its transaction-start value
    fn sstore(&mut self, address: &Address, key: &Word, value: Word) -> StorageStatus;

    /// Mark a slot warm, returning whether it already was
    fn access_storage(&mut self, address: &Address, key: &Word) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    original: Word,
    current: Word,
}

/// In-memory [`Host`] with per-transaction original values and a warm set
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    storage: HashMap<(Address, Word), Slot>,
    warm: HashSet<(Address, Word)>,
}

impl MemoryHost {
    /// Empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot as if it had `value` at transaction start
    pub fn with_storage(mut self, address: Address, key: Word, value: Word) -> Self {
        self.storage.insert(
            (address, key),
            Slot {
                original: value,
                current: value,
            },
        );
        self
    }

    /// Current value of a slot without warming it
    pub fn storage(&self, address: &Address, key: &Word) -> Word {
        self.storage
            .get(&(*address, *key))
            .map(|slot| slot.current)
            .unwrap_or_default()
    }

    /// Value a slot had at transaction start
    pub fn original_storage(&self, address: &Address, key: &Word) -> Word {
        self.storage
            .get(&(*address, *key))
            .map(|slot| slot.original)
            .unwrap_or_default()
    }

    /// End the transaction: current values become original, warm set clears
    pub fn commit(&mut self) {
        self.storage.retain(|_, slot| !slot.current.is_zero());
        for slot in self.storage.values_mut() {
            slot.original = slot.current;
        }
        self.warm.clear();
    }

    /// Non-zero current slots of one account
    pub fn account_storage<'a>(
        &'a self,
        address: &'a Address,
    ) -> impl Iterator<Item = (Word, Word)> + 'a {
        self.storage
            .iter()
            .filter(move |((addr, _), slot)| addr == address && !slot.current.is_zero())
            .map(|((_, key), slot)| (*key, slot.current))
    }

    /// Whether a slot is in the warm set
    pub fn is_warm(&self, address: &Address, key: &Word) -> bool {
        self.warm.contains(&(*address, *key))
    }
}

impl Host for MemoryHost {
    fn sload(&mut self, address: &Address, key: &Word) -> Word {
        self.storage(address, key)
    }

    fn sstore(&mut self, address: &Address, key: &Word, value: Word) -> StorageStatus {
        let slot = self.storage.entry((*address, *key)).or_default();
        let status = StorageStatus::classify(&slot.original, &slot.current, &value);
        slot.current = value;
        status
    }

    fn access_storage(&mut self, address: &Address, key: &Word) -> bool {
        !self.warm.insert((*address, *key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        Address::from_bytes([0x11; 20])
    }

    #[test]
    fn test_sload_default_zero() {
        let mut host = MemoryHost::new();
        assert_eq!(host.sload(&addr(), &Word::one()), Word::zero());
    }

    #[test]
    fn test_sstore_classifies() {
        let mut host = MemoryHost::new();
        let key = Word::one();
        assert_eq!(host.sstore(&addr(), &key, Word::from(5)), StorageStatus::Added);
        assert_eq!(host.sstore(&addr(), &key, Word::zero()), StorageStatus::AddedThenDeleted);
        assert_eq!(host.sload(&addr(), &key), Word::zero());
    }

    #[test]
    fn test_seeded_storage() {
        let mut host = MemoryHost::new().with_storage(addr(), Word::one(), Word::from(5));
        assert_eq!(host.sload(&addr(), &Word::one()), Word::from(5));
        assert_eq!(host.sstore(&addr(), &Word::one(), Word::zero()), StorageStatus::Deleted);
        assert_eq!(host.sstore(&addr(), &Word::one(), Word::from(5)), StorageStatus::DeletedThenRestored);
        assert_eq!(host.original_storage(&addr(), &Word::one()), Word::from(5));
    }

    #[test]
    fn test_account_storage_skips_zero_and_other_accounts() {
        let other = Address::from_bytes([0x22; 20]);
        let mut host = MemoryHost::new()
            .with_storage(addr(), Word::one(), Word::from(3))
            .with_storage(other, Word::one(), Word::from(4));
        host.sstore(&addr(), &Word::from(2), Word::zero());
        let slots: Vec<_> = host.account_storage(&addr()).collect();
        assert_eq!(slots, vec![(Word::one(), Word::from(3))]);
    }

    #[test]
    fn test_access_storage_warms() {
        let mut host = MemoryHost::new();
        assert!(!host.access_storage(&addr(), &Word::one()));
        assert!(host.access_storage(&addr(), &Word::one()));
        assert!(host.is_warm(&addr(), &Word::one()));
        assert!(!host.is_warm(&addr(), &Word::from(2)));
    }

    #[test]
    fn test_commit_resets_originals_and_warm_set() {
        let mut host = MemoryHost::new();
        host.access_storage(&addr(), &Word::one());
        host.sstore(&addr(), &Word::one(), Word::from(9));
        host.commit();
        assert_eq!(host.original_storage(&addr(), &Word::one()), Word::from(9));
        assert!(!host.is_warm(&addr(), &Word::one()));
        assert_eq!(host.sstore(&addr(), &Word::one(), Word::from(10)), StorageStatus::Modified);
    }
}
