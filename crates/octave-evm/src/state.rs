//! Per-execution mutable state

use crate::analysis::CodeAnalysis;
use crate::context::Environment;
use crate::host::Host;
use crate::memory::Memory;
use crate::revision::Revision;
use bytes::Bytes;
use std::sync::Arc;

/// Machine state µ: pc, remaining gas and memory
///
/// The operand stack is owned by the interpreter next to this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    /// Remaining gas, never negative
    pub gas_left: u64,
    /// Offset of the next instruction
    pub pc: usize,
    /// Execution memory
    pub memory: Memory,
}

impl MachineState {
    /// Fresh state at pc 0
    pub fn new(gas_left: u64) -> Self {
        Self {
            gas_left,
            pc: 0,
            memory: Memory::new(),
        }
    }

    /// Deduct `cost`, `false` when it does not fit
    #[inline]
    pub fn charge(&mut self, cost: u64) -> bool {
        match self.gas_left.checked_sub(cost) {
            Some(left) => {
                self.gas_left = left;
                true
            }
            None => false,
        }
    }
}

/// Everything an instruction handler may read or change besides the stack
pub struct ExecutionState<'a> {
    /// Call and transaction parameters
    pub env: &'a Environment,
    /// Analysed code being executed
    pub analysis: Arc<CodeAnalysis>,
    /// Storage access
    pub host: &'a mut dyn Host,
    /// Active revision
    pub rev: Revision,
    /// pc, gas, memory
    pub mstate: MachineState,
    /// Refund counter, may go negative mid-transaction
    pub gas_refund: i64,
    /// RETURN / REVERT payload
    pub return_data: Bytes,
}

impl<'a> ExecutionState<'a> {
    /// State for running `analysis` with the call's gas
    pub fn new(
        rev: Revision,
        env: &'a Environment,
        analysis: Arc<CodeAnalysis>,
        host: &'a mut dyn Host,
    ) -> Self {
        Self {
            env,
            analysis,
            host,
            rev,
            mstate: MachineState::new(env.call.gas),
            gas_refund: 0,
            return_data: Bytes::new(),
        }
    }
}

impl std::fmt::Debug for ExecutionState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionState")
            .field("rev", &self.rev)
            .field("mstate", &self.mstate)
            .field("gas_refund", &self.gas_refund)
            .field("analysis", &self.analysis)
            .finish_non_exhaustive()
    }
}
