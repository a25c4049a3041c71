//! Fixed-capacity operand stack and the cursor handlers use to access it

use crate::word::Word;

/// Maximum stack depth
pub const STACK_CAPACITY: usize = 1024;

/// 1024 word slots
///
/// The stack does not know its own depth. The interpreter tracks it and hands
/// handlers a [`StackCursor`] positioned at the current top.
#[derive(Clone)]
pub struct Stack {
    slots: Box<[Word; STACK_CAPACITY]>,
}

impl Stack {
    /// Zeroed stack
    pub fn new() -> Self {
        Self {
            slots: Box::new([Word::zero(); STACK_CAPACITY]),
        }
    }

    /// Cursor whose top is slot `depth - 1`
    pub fn cursor(&mut self, depth: usize) -> StackCursor<'_> {
        assert!(depth <= STACK_CAPACITY, "stack depth {} out of range", depth);
        StackCursor {
            slots: &mut self.slots[..],
            position: depth,
        }
    }

    /// The first `depth` slots, bottom first
    pub fn items(&self, depth: usize) -> &[Word] {
        &self.slots[..depth]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Stack { .. }")
    }
}

/// View into a [`Stack`] that holds only a position
///
/// Accesses are not checked against the declared stack depth. The
/// interpreter validates depth once per opcode before building the cursor.
/// Going past either end of the slot array panics.
pub struct StackCursor<'a> {
    slots: &'a mut [Word],
    position: usize,
}

impl<'a> StackCursor<'a> {
    /// Remove and return the top item
    #[inline]
    pub fn pop(&mut self) -> Word {
        self.position -= 1;
        self.slots[self.position]
    }

    /// Place `value` above the top item
    #[inline]
    pub fn push(&mut self, value: Word) {
        self.slots[self.position] = value;
        self.position += 1;
    }

    /// Item `n` below the top, `at(0)` is the top
    #[inline]
    pub fn at(&self, n: usize) -> &Word {
        &self.slots[self.position - 1 - n]
    }

    /// Mutable item `n` below the top
    #[inline]
    pub fn at_mut(&mut self, n: usize) -> &mut Word {
        &mut self.slots[self.position - 1 - n]
    }

    /// Exchange the top with item `n` below it
    #[inline]
    pub fn swap_top(&mut self, n: usize) {
        let top = self.position - 1;
        self.slots.swap(top, top - n);
    }

    /// Current depth
    pub fn position(&self) -> usize {
        self.position
    }
}
