//! SLOAD and SSTORE

use crate::fee_schedule;
use crate::revision::Revision;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::Word;

/// Charge the cold surcharge if this is the slot's first touch in the
/// transaction. Always warms the slot.
fn access_slot(state: &mut ExecutionState<'_>, key: &Word, surcharge: u64) -> bool {
    if !state.rev.is_at_least(Revision::Berlin) {
        return true;
    }
    let address = state.env.call.address;
    if state.host.access_storage(&address, key) {
        return true;
    }
    state.mstate.charge(surcharge)
}

pub(super) fn sload(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    let key = stack.pop();
    if !access_slot(state, &key, fee_schedule::additional_cold_sload_cost(state.rev)) {
        return Status::OutOfGas;
    }
    let value = state.host.sload(&state.env.call.address, &key);
    stack.push(value);
    Status::Success
}

/// Net-metered or legacy SSTORE depending on the revision
pub(super) fn sstore(mut stack: StackCursor<'_>, state: &mut ExecutionState<'_>) -> Status {
    if !state.env.can_modify_state() {
        return Status::StaticModeViolation;
    }
    // EIP-2200 sentry: a call left with only the stipend may not write
    if state.rev.is_at_least(Revision::Istanbul)
        && state.mstate.gas_left <= fee_schedule::CALL_STIPEND
    {
        return Status::OutOfGas;
    }

    let key = stack.pop();
    let value = stack.pop();
    if !access_slot(state, &key, fee_schedule::cold_sload_cost(state.rev)) {
        return Status::OutOfGas;
    }

    let status = state.host.sstore(&state.env.call.address, &key, value);
    if !state.mstate.charge(fee_schedule::sstore_cost(state.rev, status)) {
        return Status::OutOfGas;
    }
    state.gas_refund += fee_schedule::sstore_refund(state.rev, status);
    tracing::trace!(?status, key = %key, "sstore");
    Status::Success
}
