//! # octave-crypto
//!
//! Keccak-256 hashing for code hashes and the KECCAK256 opcode.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, KECCAK_EMPTY};
