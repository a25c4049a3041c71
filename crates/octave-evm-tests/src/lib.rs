//! # octave-evm-tests
//!
//! ethereum/tests VMTest integration for the octave interpreter.
//!
//! This crate provides:
//! - JSON parsing for the VMTest fixture format
//! - A VMTest runner that checks status, gas, output and post storage
//! - Directory walking and aggregated statistics
//! - The `octave-vmtest` command-line runner
//!
//! Fixtures using opcodes the engine does not define at the chosen revision
//! are reported as skipped rather than failed.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod runner;
mod types;

pub use error::{TestError, TestResult};
pub use runner::{TestRunner, TestStats};
pub use types::*;
pub use vm_test::{VmTestResults, VmTestRunner};
