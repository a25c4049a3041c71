//! 0x10s: comparison and bitwise logic

use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::{self, Word};

pub(super) fn lt(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::from_bool(a < b));
    Status::Success
}

pub(super) fn gt(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::from_bool(a > b));
    Status::Success
}

pub(super) fn slt(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::from_bool(word::slt(&a, &b)));
    Status::Success
}

pub(super) fn sgt(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::from_bool(word::sgt(&a, &b)));
    Status::Success
}

pub(super) fn eq(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(word::from_bool(a == b));
    Status::Success
}

pub(super) fn iszero(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let top = stack.at_mut(0);
    *top = word::from_bool(top.is_zero());
    Status::Success
}

pub(super) fn and(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(a & b);
    Status::Success
}

pub(super) fn or(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(a | b);
    Status::Success
}

pub(super) fn xor(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let a = stack.pop();
    let b = stack.pop();
    stack.push(a ^ b);
    Status::Success
}

pub(super) fn not(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let top = stack.at_mut(0);
    *top = !*top;
    Status::Success
}

pub(super) fn byte(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let i = stack.pop();
    let x = stack.pop();
    stack.push(word::byte(i, x));
    Status::Success
}

pub(super) fn shl(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let shift = stack.pop();
    let value = stack.pop();
    stack.push(word::shl(shift, value));
    Status::Success
}

pub(super) fn shr(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let shift = stack.pop();
    let value = stack.pop();
    stack.push(word::shr(shift, value));
    Status::Success
}

pub(super) fn sar(mut stack: StackCursor<'_>, _: &mut ExecutionState<'_>) -> Status {
    let shift = stack.pop();
    let value: Word = stack.pop();
    stack.push(word::sar(shift, value));
    Status::Success
}
