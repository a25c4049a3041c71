//! # octave-primitives
//!
//! Fixed-size byte types shared by the octave crates.
//!
//! - [`Address`]: 20-byte account address
//! - [`H256`]: 32-byte hash / storage word
//! - [`U256`]: re-exported from `primitive-types`

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use hash::{HashError, H256};

pub use primitive_types::U256;

/// Gas amount
pub type Gas = u64;
