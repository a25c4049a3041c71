//! Gas constants and revision-dependent fees (Yellow Paper Appendix G)

use crate::revision::Revision;
use crate::storage_status::StorageStatus;
use crate::word;

/// G_zero
pub const ZERO: u64 = 0;
/// G_jumpdest
pub const JUMPDEST: u64 = 1;
/// G_base
pub const BASE: u64 = 2;
/// G_verylow
pub const VERY_LOW: u64 = 3;
/// G_low
pub const LOW: u64 = 5;
/// G_mid
pub const MID: u64 = 8;
/// G_high
pub const HIGH: u64 = 10;
/// G_exp
pub const EXP: u64 = 10;
/// G_memory
pub const MEMORY: u64 = 3;
/// G_keccak256
pub const KECCAK256: u64 = 30;
/// G_keccak256word
pub const KECCAK256_WORD: u64 = 6;
/// G_copy
pub const COPY_WORD: u64 = 3;
/// G_sset
pub const SSET: u64 = 20_000;
/// G_callstipend; SSTORE refuses to run with this much gas or less from Istanbul
pub const CALL_STIPEND: u64 = 2_300;

/// G_expbyte, repriced by EIP-160
pub const fn exp_byte_cost(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::SpuriousDragon) {
        50
    } else {
        10
    }
}

/// G_warmaccess. Before Berlin this is the SLOAD price that EIP-1283 and
/// EIP-2200 charge for no-op and dirty writes.
pub const fn warm_access_cost(rev: Revision) -> u64 {
    match rev {
        Revision::Istanbul => 800,
        _ if rev.is_at_least(Revision::Berlin) => 100,
        _ => 200,
    }
}

/// G_coldsload, zero before access lists existed
pub const fn cold_sload_cost(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::Berlin) {
        2_100
    } else {
        0
    }
}

/// Extra charge for touching a cold slot
pub const fn additional_cold_sload_cost(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::Berlin) {
        cold_sload_cost(rev) - warm_access_cost(rev)
    } else {
        0
    }
}

/// SLOAD baseline
pub const fn sload_cost(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::Berlin) {
        warm_access_cost(rev)
    } else if rev.is_at_least(Revision::Istanbul) {
        800
    } else if rev.is_at_least(Revision::TangerineWhistle) {
        200
    } else {
        50
    }
}

/// G_sreset
pub const fn sreset_cost(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::Berlin) {
        5_000 - cold_sload_cost(rev)
    } else {
        5_000
    }
}

/// R_sclear, reduced by EIP-3529
pub const fn sclear_refund(rev: Revision) -> u64 {
    if rev.is_at_least(Revision::London) {
        4_800
    } else {
        15_000
    }
}

/// Whether SSTORE uses net gas metering (EIP-1283 in Constantinople, EIP-2200
/// from Istanbul). Petersburg went back to the legacy rules.
pub const fn net_sstore_metering(rev: Revision) -> bool {
    matches!(rev, Revision::Constantinople) || rev.is_at_least(Revision::Istanbul)
}

/// SSTORE charge for a write of the given class, excluding cold access
pub const fn sstore_cost(rev: Revision, status: StorageStatus) -> u64 {
    if !net_sstore_metering(rev) {
        return match status {
            StorageStatus::Added
            | StorageStatus::DeletedThenAdded
            | StorageStatus::DeletedThenRestored => SSET,
            StorageStatus::Deleted
            | StorageStatus::Modified
            | StorageStatus::Assigned
            | StorageStatus::ModifiedThenDeleted
            | StorageStatus::AddedThenDeleted
            | StorageStatus::ModifiedThenRestored => sreset_cost(rev),
        };
    }
    match status {
        StorageStatus::Added => SSET,
        StorageStatus::Deleted | StorageStatus::Modified => sreset_cost(rev),
        StorageStatus::Assigned
        | StorageStatus::DeletedThenAdded
        | StorageStatus::ModifiedThenDeleted
        | StorageStatus::DeletedThenRestored
        | StorageStatus::AddedThenDeleted
        | StorageStatus::ModifiedThenRestored => warm_access_cost(rev),
    }
}

/// Refund counter change for a write of the given class; may be negative
pub const fn sstore_refund(rev: Revision, status: StorageStatus) -> i64 {
    let sclear = sclear_refund(rev) as i64;
    if !net_sstore_metering(rev) {
        return match status {
            StorageStatus::Deleted
            | StorageStatus::ModifiedThenDeleted
            | StorageStatus::AddedThenDeleted => sclear,
            _ => 0,
        };
    }
    let warm = warm_access_cost(rev) as i64;
    let sreset = sreset_cost(rev) as i64;
    match status {
        StorageStatus::Assigned | StorageStatus::Added | StorageStatus::Modified => 0,
        StorageStatus::Deleted | StorageStatus::ModifiedThenDeleted => sclear,
        StorageStatus::DeletedThenAdded => -sclear,
        StorageStatus::DeletedThenRestored => sreset - warm - sclear,
        StorageStatus::AddedThenDeleted => SSET as i64 - warm,
        StorageStatus::ModifiedThenRestored => sreset - warm,
    }
}

/// Total cost of a memory of `words` words (Yellow Paper eq. 326)
pub const fn memory_cost(words: u64) -> u64 {
    MEMORY * words + words * words / 512
}

/// Per-word charge for hashing or copying `n` bytes
pub const fn word_cost(per_word: u64, n: usize) -> u64 {
    per_word * word::round_up_bytes_to_words(n) as u64
}
