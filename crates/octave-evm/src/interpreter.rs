//! The execute loop

use crate::analysis::CodeAnalysis;
use crate::context::Environment;
use crate::error::ExecutionResult;
use crate::host::Host;
use crate::instructions::{instruction_table, Instruction};
use crate::opcode::Opcode;
use crate::revision::Revision;
use crate::stack::{Stack, STACK_CAPACITY};
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::Word;
use std::sync::Arc;
use tracing::{debug, trace};

/// Owns the operand stack and its depth for one execution
#[derive(Debug, Default)]
pub struct Interpreter {
    stack: Stack,
    depth: usize,
}

impl Interpreter {
    /// Interpreter with an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Live stack items, bottom first
    pub fn stack_items(&self) -> &[Word] {
        self.stack.items(self.depth)
    }

    /// Stack depth and gas checks that run before every handler
    #[inline]
    fn check(&self, instr: &Instruction, gas_left: u64) -> Status {
        if instr.stack_height_change > 0
            && self.depth as isize + instr.stack_height_change > STACK_CAPACITY as isize
        {
            return Status::StackOverflow;
        }
        if self.depth < instr.stack_height_required {
            return Status::StackUnderflow;
        }
        if gas_left < instr.baseline_cost {
            return Status::OutOfGas;
        }
        Status::Success
    }

    /// Run `state`'s code from pc 0 until it halts, fails or runs off the end
    ///
    /// The stack starts empty; items left by an earlier run are discarded.
    ///
    /// # Panics
    ///
    /// If `state` has already been executed (pc is not 0).
    pub fn execute(&mut self, state: &mut ExecutionState<'_>) -> Status {
        assert_eq!(state.mstate.pc, 0, "execution must start at pc 0");
        self.depth = 0;
        let gas_start = state.mstate.gas_left;
        let table = instruction_table(state.rev);
        let analysis = Arc::clone(&state.analysis);
        let code = analysis.padded_code();
        let code_size = analysis.code_size();

        let status = loop {
            let pc = state.mstate.pc;
            if pc >= code_size {
                break Status::Success;
            }
            let op = code[pc];
            let instr = &table[op as usize];

            let status = self.check(instr, state.mstate.gas_left);
            if !status.is_success() {
                break status;
            }
            state.mstate.gas_left -= instr.baseline_cost;
            trace!(
                pc,
                opcode = %Opcode(op),
                gas_left = state.mstate.gas_left,
                depth = self.depth,
                "step"
            );

            let status = (instr.handler)(self.stack.cursor(self.depth), state);
            if !status.is_success() {
                break status;
            }
            self.depth = self.depth.wrapping_add_signed(instr.stack_height_change);
            if instr.halts {
                break Status::Success;
            }
            state.mstate.pc += instr.pc_increment;
        };

        debug!(
            rev = %state.rev,
            ?status,
            gas_used = gas_start - state.mstate.gas_left,
            refund = state.gas_refund,
            "execution finished"
        );
        status
    }
}

/// Run `state` on a fresh interpreter
pub fn execute(state: &mut ExecutionState<'_>) -> Status {
    Interpreter::new().execute(state)
}

/// Build the state for `analysis`, execute it and fold the outcome into an
/// [`ExecutionResult`].
///
/// Gas is returned only on success or REVERT, refunds only on success, and
/// output only for RETURN or REVERT.
pub fn run(
    rev: Revision,
    env: &Environment,
    analysis: Arc<CodeAnalysis>,
    host: &mut dyn Host,
) -> ExecutionResult {
    let mut state = ExecutionState::new(rev, env, analysis, host);
    let status = execute(&mut state);
    ExecutionResult {
        status,
        gas_left: if status.returns_gas() {
            state.mstate.gas_left
        } else {
            0
        },
        gas_refund: if status.is_success() {
            state.gas_refund
        } else {
            0
        },
        output: if status.returns_gas() {
            state.return_data
        } else {
            Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CallContext;
    use crate::host::MemoryHost;

    fn state<'a>(
        env: &'a Environment,
        host: &'a mut MemoryHost,
        code: &[u8],
    ) -> ExecutionState<'a> {
        ExecutionState::new(
            Revision::LATEST,
            env,
            Arc::new(CodeAnalysis::analyze(code)),
            host,
        )
    }

    fn env(gas: u64) -> Environment {
        Environment {
            call: CallContext {
                gas,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_code() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::Success);
        assert_eq!(state.mstate.pc, 0);
        assert_eq!(state.mstate.gas_left, 1000);
        assert_eq!(interp.depth(), 0);
    }

    #[test]
    fn test_add() {
        // PUSH1 5 PUSH1 3 ADD
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x60, 5, 0x60, 3, 0x01]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::Success);
        assert_eq!(interp.stack_items(), &[Word::from(8)]);
        assert_eq!(state.mstate.gas_left, 1000 - 9);
        assert_eq!(state.mstate.pc, 5);
    }

    #[test]
    fn test_stop_halts() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x00, 0x60, 1]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::Success);
        assert_eq!(state.mstate.pc, 0);
        assert_eq!(interp.depth(), 0);
    }

    #[test]
    fn test_baseline_out_of_gas_leaves_state() {
        // PUSH1 1 PUSH1 2 ADD with gas for only the pushes
        let env = env(6);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x60, 1, 0x60, 2, 0x01]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::OutOfGas);
        assert_eq!(state.mstate.gas_left, 0);
        assert_eq!(state.mstate.pc, 4);
        assert_eq!(interp.depth(), 2);
    }

    #[test]
    fn test_underflow() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x01]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::StackUnderflow);
        assert_eq!(state.mstate.gas_left, 1000);
    }

    #[test]
    fn test_overflow() {
        // JUMPDEST PUSH0 PUSH1 0 JUMP
        let env = env(1_000_000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x5B, 0x5F, 0x60, 0, 0x56]);
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute(&mut state), Status::StackOverflow);
        assert_eq!(interp.depth(), STACK_CAPACITY);
        assert_eq!(state.mstate.pc, 2);
    }

    #[test]
    fn test_reused_interpreter_starts_empty() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut interp = Interpreter::new();

        let mut first = state(&env, &mut host, &[0x60, 1, 0x60, 2]);
        assert_eq!(interp.execute(&mut first), Status::Success);
        assert_eq!(interp.depth(), 2);
        drop(first);

        // ADD on what must be an empty stack
        let mut second = state(&env, &mut host, &[0x01]);
        assert_eq!(interp.execute(&mut second), Status::StackUnderflow);
        assert_eq!(interp.depth(), 0);
        assert!(interp.stack_items().is_empty());
        assert_eq!(second.mstate.gas_left, 1000);
    }

    #[test]
    #[should_panic(expected = "pc 0")]
    fn test_reexecute_panics() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let mut state = state(&env, &mut host, &[0x60, 1]);
        state.mstate.pc = 2;
        execute(&mut state);
    }

    #[test]
    fn test_run_zeroes_gas_on_failure() {
        let env = env(1000);
        let mut host = MemoryHost::new();
        let result = run(
            Revision::LATEST,
            &env,
            Arc::new(CodeAnalysis::analyze(&[0xFE])),
            &mut host,
        );
        assert_eq!(result.status, Status::UndefinedInstruction);
        assert_eq!(result.gas_left, 0);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_run_return() {
        // PUSH1 0x2a PUSH1 0 MSTORE8 PUSH1 1 PUSH1 0 RETURN
        let code = [0x60, 0x2a, 0x60, 0, 0x53, 0x60, 1, 0x60, 0, 0xF3];
        let env = env(1000);
        let mut host = MemoryHost::new();
        let result = run(
            Revision::LATEST,
            &env,
            Arc::new(CodeAnalysis::analyze(&code)),
            &mut host,
        );
        assert_eq!(result.status, Status::Success);
        assert_eq!(&result.output[..], &[0x2a]);
        // 4 pushes, MSTORE8 and one word of memory
        assert_eq!(result.gas_left, 1000 - 18);
    }
}
