//! Execution environment of a message call

use crate::word::Word;
use bytes::Bytes;
use octave_primitives::Address;

/// Call-level parameters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
    /// Account whose code runs
    pub address: Address,
    /// Sender of this message
    pub caller: Address,
    /// Value transferred with the call
    pub value: Word,
    /// Call data
    pub input_data: Bytes,
    /// Gas made available to the call
    pub gas: u64,
    /// Static call: no state modification allowed
    pub is_static: bool,
    /// Nesting depth, 0 for the transaction's own call
    pub depth: usize,
}

impl CallContext {
    /// Top-level call with no value
    pub fn new(address: Address, caller: Address, input_data: Bytes, gas: u64) -> Self {
        Self {
            address,
            caller,
            input_data,
            gas,
            ..Default::default()
        }
    }

    /// Set the transferred value
    pub fn with_value(mut self, value: Word) -> Self {
        self.value = value;
        self
    }

    /// Turn into a static call
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Transaction-level parameters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxContext {
    /// Transaction sender
    pub origin: Address,
    /// Effective gas price
    pub gas_price: Word,
}

/// Everything the opcodes can observe about the call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// Call context
    pub call: CallContext,
    /// Transaction context
    pub tx: TxContext,
}

impl Environment {
    /// Combine call and transaction parameters
    pub fn new(call: CallContext, tx: TxContext) -> Self {
        Self { call, tx }
    }

    /// Whether SSTORE and friends are permitted
    pub fn can_modify_state(&self) -> bool {
        !self.call.is_static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_context_new() {
        let call = CallContext::new(
            Address::from_bytes([1; 20]),
            Address::from_bytes([2; 20]),
            Bytes::from_static(&[0xaa]),
            50_000,
        );
        assert_eq!(call.gas, 50_000);
        assert_eq!(call.value, Word::zero());
        assert!(!call.is_static);
        assert_eq!(call.depth, 0);
    }

    #[test]
    fn test_static_environment() {
        let call = CallContext::default().into_static();
        let env = Environment::new(call, TxContext::default());
        assert!(!env.can_modify_state());
        assert!(Environment::default().can_modify_state());
    }

    #[test]
    fn test_with_value() {
        let call = CallContext::default().with_value(Word::from(7));
        assert_eq!(call.value, Word::from(7));
    }
}
