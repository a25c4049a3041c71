//! 0x20s/0x30s: hashing and call environment

use super::memory_range;
use crate::fee_schedule;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::{self, Word, WORD_SIZE};
use octave_crypto::keccak256;

pub(super) fn keccak(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let offset = stack.pop();
    let size = stack.pop();
    let range = match memory_range(state, &offset, &size) {
        Ok(range) => range,
        Err(status) => return status,
    };
    if !state
        .mstate
        .charge(fee_schedule::word_cost(fee_schedule::KECCAK256_WORD, range.len()))
    {
        return Status::OutOfGas;
    }
    let hash = keccak256(&state.mstate.memory.data()[range]);
    stack.push(hash.to_u256());
    Status::Success
}

pub(super) fn address(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(state.env.call.address.to_u256());
    Status::Success
}

pub(super) fn origin(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(state.env.tx.origin.to_u256());
    Status::Success
}

pub(super) fn caller(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(state.env.call.caller.to_u256());
    Status::Success
}

pub(super) fn callvalue(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(state.env.call.value);
    Status::Success
}

/// Reads past the end of the call data are zero-filled
pub(super) fn calldataload(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let input = &state.env.call.input_data;
    let top = stack.at_mut(0);
    *top = match word::as_usize(top) {
        Some(offset) if offset < input.len() => {
            let mut buf = [0u8; WORD_SIZE];
            let end = input.len().min(offset + WORD_SIZE);
            buf[..end - offset].copy_from_slice(&input[offset..end]);
            Word::from_big_endian(&buf)
        }
        _ => Word::zero(),
    };
    Status::Success
}

pub(super) fn calldatasize(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::from(state.env.call.input_data.len()));
    Status::Success
}

pub(super) fn codesize(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(Word::from(state.analysis.code_size()));
    Status::Success
}

pub(super) fn gasprice(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    stack.push(state.env.tx.gas_price);
    Status::Success
}
