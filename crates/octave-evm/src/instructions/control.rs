//! Control flow, halting and the machine-state readers

use super::memory_range;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::{self, Word};
use bytes::Bytes;

pub(super) fn stop(_: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    Status::Success
}

/// Every byte without a definition in the active revision, and INVALID
pub(super) fn undefined(_: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    Status::UndefinedInstruction
}

fn jump_to(state: &mut ExecutionState<'_>, dest: &Word) -> Status {
    match word::as_usize(dest) {
        Some(dest) if state.analysis.is_jump_dest(dest) => {
            state.mstate.pc = dest;
            Status::Success
        }
        _ => Status::BadJumpDest,
    }
}

pub(super) fn jump(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let dest = stack.pop();
    jump_to(state, &dest)
}

pub(super) fn jumpi(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let dest = stack.pop();
    let condition = stack.pop();
    if condition.is_zero() {
        state.mstate.pc += 1;
        Status::Success
    } else {
        jump_to(state, &dest)
    }
}

pub(super) fn jumpdest(_: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    Status::Success
}

pub(super) fn pc(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::from(state.mstate.pc));
    Status::Success
}

/// Gas after this instruction's own baseline has been paid
pub(super) fn gas(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::from(state.mstate.gas_left));
    Status::Success
}

fn capture_output(stack: &mut StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let offset = stack.pop();
    let size = stack.pop();
    match memory_range(state, &offset, &size) {
        Ok(range) => {
            state.return_data = Bytes::copy_from_slice(&state.mstate.memory.data()[range]);
            Status::Success
        }
        Err(status) => status,
    }
}

pub(super) fn ret(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    capture_output(&mut stack, state)
}

pub(super) fn revert(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    match capture_output(&mut stack, state) {
        Status::Success => Status::Revert,
        status => status,
    }
}
