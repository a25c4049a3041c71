//! 0x50s/0x60s-0x9f: stack manipulation and memory access

use super::memory_range;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::{Word, WORD_SIZE};
use std::ops::Range;

pub(super) fn pop(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    stack.pop();
    Status::Success
}

pub(super) fn push0(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::zero());
    Status::Success
}

/// PUSH1..PUSH32. The width comes from the opcode byte; immediates running
/// past the end of the code read the zero padding.
pub(super) fn push(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let code = state.analysis.padded_code();
    let pc = state.mstate.pc;
    let width = (code[pc] - 0x5F) as usize;
    stack.push(Word::from_big_endian(&code[pc + 1..pc + 1 + width]));
    Status::Success
}

pub(super) fn dup<const N: usize>(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let value = *stack.at(N - 1);
    stack.push(value);
    Status::Success
}

pub(super) fn swap<const N: usize>(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    stack.swap_top(N);
    Status::Success
}

fn word_range(state: &mut ExecutionState<'_>, offset: &Word, len: usize) -> Result<Range<usize>, Status> {
    memory_range(state, offset, &Word::from(len))
}

pub(super) fn mload(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let offset = stack.pop();
    match word_range(state, &offset, WORD_SIZE) {
        Ok(range) => {
            stack.push(state.mstate.memory.load_word(range.start));
            Status::Success
        }
        Err(status) => status,
    }
}

pub(super) fn mstore(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let offset = stack.pop();
    let value = stack.pop();
    match word_range(state, &offset, WORD_SIZE) {
        Ok(range) => {
            state.mstate.memory.store_word(range.start, &value);
            Status::Success
        }
        Err(status) => status,
    }
}

pub(super) fn mstore8(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let offset = stack.pop();
    let value = stack.pop();
    match word_range(state, &offset, 1) {
        Ok(range) => {
            state.mstate.memory.store_byte(range.start, value.low_u32() as u8);
            Status::Success
        }
        Err(status) => status,
    }
}

pub(super) fn msize(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::from(state.mstate.memory.len()));
    Status::Success
}
