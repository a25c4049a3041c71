//! 0x00s: stop and arithmetic

use crate::fee_schedule;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word;

pub(super) fn add(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::add(a, b));
    Status::Success
}

pub(super) fn mul(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::mul(a, b));
    Status::Success
}

pub(super) fn sub(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::sub(a, b));
    Status::Success
}

pub(super) fn div(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::div(a, b));
    Status::Success
}

pub(super) fn sdiv(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::sdiv(a, b));
    Status::Success
}

pub(super) fn rem(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::rem(a, b));
    Status::Success
}

pub(super) fn smod(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::smod(a, b));
    Status::Success
}

pub(super) fn addmod(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    let n = stack.pop();
    stack.push(word::addmod(a, b, n));
    Status::Success
}

pub(super) fn mulmod(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    let n = stack.pop();
    stack.push(word::mulmod(a, b, n));
    Status::Success
}

/// Charges per significant byte of the exponent on top of the baseline
pub(super) fn exp(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let base = stack.pop();
    let exponent = stack.pop();
    let cost = fee_schedule::exp_byte_cost(state.rev) * word::byte_len(&exponent);
    if !state.mstate.charge(cost) {
        return Status::OutOfGas;
    }
    stack.push(word::exp(base, exponent));
    Status::Success
}

pub(super) fn signextend(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let b = stack.pop();
    let x = stack.pop();
    stack.push(word::signextend(b, x));
    Status::Success
}
