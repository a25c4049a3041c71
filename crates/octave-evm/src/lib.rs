//! # octave-evm
//!
//! Fork-versioned EVM bytecode interpreter.
//!
//! This crate provides:
//! - Code analysis (JUMPDEST bitmap) and a shared analysis cache
//! - A static instruction table per protocol revision
//! - The execute loop over a 1024-slot stack, memory and gas
//! - EIP-2200 storage write classification and SSTORE gas/refunds
//! - A [`Host`] trait for storage, with an in-memory implementation
//!
//! ```ignore
//! let analysis = Arc::new(CodeAnalysis::analyze(&code));
//! let result = octave_evm::run(Revision::LATEST, &env, analysis, &mut host);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod analysis_cache;
pub mod context;
pub mod error;
pub mod fee_schedule;
pub mod host;
pub mod instructions;
pub mod interpreter;
pub mod memory;
pub mod opcode;
pub mod revision;
pub mod stack;
pub mod state;
pub mod status;
pub mod storage_status;
pub mod telemetry;
pub mod word;

pub use analysis::{analyze, CodeAnalysis};
pub use analysis_cache::CodeAnalysisCache;
pub use context::{CallContext, Environment, TxContext};
pub use error::{EvmError, EvmResult, ExecutionResult};
pub use host::{Host, MemoryHost};
pub use instructions::{instruction_table, Handler, Instruction};
pub use interpreter::{execute, run, Interpreter};
pub use memory::Memory;
pub use opcode::Opcode;
pub use revision::Revision;
pub use stack::{Stack, StackCursor, STACK_CAPACITY};
pub use state::{ExecutionState, MachineState};
pub use status::Status;
pub use storage_status::StorageStatus;
pub use telemetry::{Timer, Timers};
pub use word::Word;
