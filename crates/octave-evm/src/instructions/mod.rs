//! Per-revision instruction tables
//!
//! Each revision gets a static `[Instruction; 256]` built at compile time.
//! Bytes with no definition keep the UNDEFINED entry, so a lookup can never
//! miss.

mod arithmetic;
mod bitwise;
mod control;
mod environment;
mod stack_memory;
mod storage;

use crate::fee_schedule::{self, BASE, HIGH, JUMPDEST, KECCAK256, LOW, MID, VERY_LOW, ZERO};
use crate::revision::Revision;
use crate::stack::StackCursor;
use crate::state::ExecutionState;
use crate::status::Status;
use crate::word::Word;
use std::ops::Range;

/// Opcode implementation
///
/// Gets a cursor positioned at the current top and may mutate everything in
/// the execution state. Stack depth and baseline gas were checked before the
/// call.
pub type Handler = fn(StackCursor<'_>, &mut ExecutionState<'_>) -> Status;

/// Static description of one opcode at one revision
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Implementation
    pub handler: Handler,
    /// Items that must be on the stack
    pub stack_height_required: usize,
    /// Net stack growth, at most +1
    pub stack_height_change: isize,
    /// Bytes to advance after success; 0 when the handler sets pc
    pub pc_increment: usize,
    /// Gas charged before the handler runs
    pub baseline_cost: u64,
    /// Successful completion ends execution
    pub halts: bool,
    /// Whether the opcode exists at this revision
    pub defined: bool,
}

impl Instruction {
    const fn new(handler: Handler, required: usize, change: isize, cost: u64) -> Self {
        Self {
            handler,
            stack_height_required: required,
            stack_height_change: change,
            pc_increment: 1,
            baseline_cost: cost,
            halts: false,
            defined: true,
        }
    }

    const fn jump(handler: Handler, required: usize, change: isize, cost: u64) -> Self {
        Self {
            pc_increment: 0,
            ..Self::new(handler, required, change, cost)
        }
    }

    const fn halting(handler: Handler, required: usize, change: isize, cost: u64) -> Self {
        Self {
            halts: true,
            ..Self::new(handler, required, change, cost)
        }
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("stack_height_required", &self.stack_height_required)
            .field("stack_height_change", &self.stack_height_change)
            .field("pc_increment", &self.pc_increment)
            .field("baseline_cost", &self.baseline_cost)
            .field("halts", &self.halts)
            .field("defined", &self.defined)
            .finish_non_exhaustive()
    }
}

/// Needs no stack and costs nothing, so it always reaches its handler
const UNDEFINED: Instruction = Instruction {
    handler: control::undefined,
    stack_height_required: 0,
    stack_height_change: 0,
    pc_increment: 1,
    baseline_cost: ZERO,
    halts: false,
    defined: false,
};

const DUP: [Handler; 16] = [
    stack_memory::dup::<1>,
    stack_memory::dup::<2>,
    stack_memory::dup::<3>,
    stack_memory::dup::<4>,
    stack_memory::dup::<5>,
    stack_memory::dup::<6>,
    stack_memory::dup::<7>,
    stack_memory::dup::<8>,
    stack_memory::dup::<9>,
    stack_memory::dup::<10>,
    stack_memory::dup::<11>,
    stack_memory::dup::<12>,
    stack_memory::dup::<13>,
    stack_memory::dup::<14>,
    stack_memory::dup::<15>,
    stack_memory::dup::<16>,
];

const SWAP: [Handler; 16] = [
    stack_memory::swap::<1>,
    stack_memory::swap::<2>,
    stack_memory::swap::<3>,
    stack_memory::swap::<4>,
    stack_memory::swap::<5>,
    stack_memory::swap::<6>,
    stack_memory::swap::<7>,
    stack_memory::swap::<8>,
    stack_memory::swap::<9>,
    stack_memory::swap::<10>,
    stack_memory::swap::<11>,
    stack_memory::swap::<12>,
    stack_memory::swap::<13>,
    stack_memory::swap::<14>,
    stack_memory::swap::<15>,
    stack_memory::swap::<16>,
];

const fn build(rev: Revision) -> [Instruction; 256] {
    let mut t = [UNDEFINED; 256];

    t[0x00] = Instruction::halting(control::stop, 0, 0, ZERO);
    t[0x01] = Instruction::new(arithmetic::add, 2, -1, VERY_LOW);
    t[0x02] = Instruction::new(arithmetic::mul, 2, -1, LOW);
    t[0x03] = Instruction::new(arithmetic::sub, 2, -1, VERY_LOW);
    t[0x04] = Instruction::new(arithmetic::div, 2, -1, LOW);
    t[0x05] = Instruction::new(arithmetic::sdiv, 2, -1, LOW);
    t[0x06] = Instruction::new(arithmetic::rem, 2, -1, LOW);
    t[0x07] = Instruction::new(arithmetic::smod, 2, -1, LOW);
    t[0x08] = Instruction::new(arithmetic::addmod, 3, -2, MID);
    t[0x09] = Instruction::new(arithmetic::mulmod, 3, -2, MID);
    t[0x0A] = Instruction::new(arithmetic::exp, 2, -1, fee_schedule::EXP);
    t[0x0B] = Instruction::new(arithmetic::signextend, 2, -1, LOW);

    t[0x10] = Instruction::new(bitwise::lt, 2, -1, VERY_LOW);
    t[0x11] = Instruction::new(bitwise::gt, 2, -1, VERY_LOW);
    t[0x12] = Instruction::new(bitwise::slt, 2, -1, VERY_LOW);
    t[0x13] = Instruction::new(bitwise::sgt, 2, -1, VERY_LOW);
    t[0x14] = Instruction::new(bitwise::eq, 2, -1, VERY_LOW);
    t[0x15] = Instruction::new(bitwise::iszero, 1, 0, VERY_LOW);
    t[0x16] = Instruction::new(bitwise::and, 2, -1, VERY_LOW);
    t[0x17] = Instruction::new(bitwise::or, 2, -1, VERY_LOW);
    t[0x18] = Instruction::new(bitwise::xor, 2, -1, VERY_LOW);
    t[0x19] = Instruction::new(bitwise::not, 1, 0, VERY_LOW);
    t[0x1A] = Instruction::new(bitwise::byte, 2, -1, VERY_LOW);
    if rev.is_at_least(Revision::Constantinople) {
        t[0x1B] = Instruction::new(bitwise::shl, 2, -1, VERY_LOW);
        t[0x1C] = Instruction::new(bitwise::shr, 2, -1, VERY_LOW);
        t[0x1D] = Instruction::new(bitwise::sar, 2, -1, VERY_LOW);
    }

    t[0x20] = Instruction::new(environment::keccak, 2, -1, KECCAK256);

    t[0x30] = Instruction::new(environment::address, 0, 1, BASE);
    t[0x32] = Instruction::new(environment::origin, 0, 1, BASE);
    t[0x33] = Instruction::new(environment::caller, 0, 1, BASE);
    t[0x34] = Instruction::new(environment::callvalue, 0, 1, BASE);
    t[0x35] = Instruction::new(environment::calldataload, 1, 0, VERY_LOW);
    t[0x36] = Instruction::new(environment::calldatasize, 0, 1, BASE);
    t[0x38] = Instruction::new(environment::codesize, 0, 1, BASE);
    t[0x3A] = Instruction::new(environment::gasprice, 0, 1, BASE);

    t[0x50] = Instruction::new(stack_memory::pop, 1, -1, BASE);
    t[0x51] = Instruction::new(stack_memory::mload, 1, 0, VERY_LOW);
    t[0x52] = Instruction::new(stack_memory::mstore, 2, -2, VERY_LOW);
    t[0x53] = Instruction::new(stack_memory::mstore8, 2, -2, VERY_LOW);
    t[0x54] = Instruction::new(storage::sload, 1, 0, fee_schedule::sload_cost(rev));
    t[0x55] = Instruction::new(storage::sstore, 2, -2, ZERO);
    t[0x56] = Instruction::jump(control::jump, 1, -1, MID);
    t[0x57] = Instruction::jump(control::jumpi, 2, -2, HIGH);
    t[0x58] = Instruction::new(control::pc, 0, 1, BASE);
    t[0x59] = Instruction::new(stack_memory::msize, 0, 1, BASE);
    t[0x5A] = Instruction::new(control::gas, 0, 1, BASE);
    t[0x5B] = Instruction::new(control::jumpdest, 0, 0, JUMPDEST);

    if rev.is_at_least(Revision::Shanghai) {
        t[0x5F] = Instruction::new(stack_memory::push0, 0, 1, BASE);
    }
    let mut n = 1;
    while n <= 32 {
        t[0x5F + n] = Instruction {
            pc_increment: 1 + n,
            ..Instruction::new(stack_memory::push, 0, 1, VERY_LOW)
        };
        n += 1;
    }

    let mut i = 0;
    while i < 16 {
        t[0x80 + i] = Instruction::new(DUP[i], i + 1, 1, VERY_LOW);
        t[0x90 + i] = Instruction::new(SWAP[i], i + 2, 0, VERY_LOW);
        i += 1;
    }

    t[0xF3] = Instruction::halting(control::ret, 2, -2, ZERO);
    if rev.is_at_least(Revision::Byzantium) {
        t[0xFD] = Instruction::new(control::revert, 2, -2, ZERO);
    }
    // 0xFE INVALID stays undefined in every revision

    t
}

static TABLES: [[Instruction; 256]; Revision::COUNT] = [
    build(Revision::Frontier),
    build(Revision::Homestead),
    build(Revision::TangerineWhistle),
    build(Revision::SpuriousDragon),
    build(Revision::Byzantium),
    build(Revision::Constantinople),
    build(Revision::Petersburg),
    build(Revision::Istanbul),
    build(Revision::Berlin),
    build(Revision::London),
    build(Revision::Paris),
    build(Revision::Shanghai),
];

/// Dispatch table for `rev`
#[inline]
pub fn instruction_table(rev: Revision) -> &'static [Instruction; 256] {
    &TABLES[rev as usize]
}

/// Expand memory to cover `[offset, offset + size)` and return that range.
/// A zero size yields an empty range without touching memory.
fn memory_range(
    state: &mut ExecutionState<'_>,
    offset: &Word,
    size: &Word,
) -> Result<Range<usize>, Status> {
    let mstate = &mut state.mstate;
    match mstate.memory.grow_if_needed(&mut mstate.gas_left, offset, size) {
        Status::Success => {}
        status => return Err(status),
    }
    if size.is_zero() {
        return Ok(0..0);
    }
    let start = offset.low_u64() as usize;
    Ok(start..start + size.low_u64() as usize)
}
