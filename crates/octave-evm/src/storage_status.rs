//! EIP-2200 storage write classification

use crate::word::Word;

/// Effect of an SSTORE relative to the slot's value at transaction start
///
/// Letters in the variant docs read `original -> current -> new`; `0` is the
/// zero word and `X`, `Y`, `Z` are distinct non-zero words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StorageStatus {
    /// Any write not covered below, including `new == current`
    Assigned = 0,
    /// `0 -> 0 -> Z`
    Added,
    /// `X -> X -> 0`
    Deleted,
    /// `X -> X -> Z`
    Modified,
    /// `X -> 0 -> Z`
    DeletedThenAdded,
    /// `X -> Y -> 0`
    ModifiedThenDeleted,
    /// `X -> 0 -> X`
    DeletedThenRestored,
    /// `0 -> Y -> 0`
    AddedThenDeleted,
    /// `X -> Y -> X`
    ModifiedThenRestored,
}

impl StorageStatus {
    /// Classify a write of `new` over `current`, given the `original` value
    pub fn classify(original: &Word, current: &Word, new: &Word) -> StorageStatus {
        if current == new {
            return StorageStatus::Assigned;
        }

        if original == current {
            return if original.is_zero() {
                StorageStatus::Added
            } else if new.is_zero() {
                StorageStatus::Deleted
            } else {
                StorageStatus::Modified
            };
        }

        // slot already dirty in this transaction
        if !original.is_zero() {
            if current.is_zero() {
                if new == original {
                    StorageStatus::DeletedThenRestored
                } else {
                    StorageStatus::DeletedThenAdded
                }
            } else if new.is_zero() {
                StorageStatus::ModifiedThenDeleted
            } else if new == original {
                StorageStatus::ModifiedThenRestored
            } else {
                StorageStatus::Assigned
            }
        } else if new.is_zero() {
            StorageStatus::AddedThenDeleted
        } else {
            StorageStatus::Assigned
        }
    }
}
