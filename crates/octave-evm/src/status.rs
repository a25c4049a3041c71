//! Outcome of a single instruction or a whole execution

use crate::error::{EvmError, EvmResult};
use std::fmt;

/// Execution status
///
/// Every failure an instruction can hit is a value of this type. Handlers
/// return it, the driver stops on anything other than `Success`, and the
/// caller decides what to roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Continue, or halted normally
    Success,
    /// Gas budget exhausted
    OutOfGas,
    /// Memory access outside what the engine can address
    ///
    /// Reserved for hosts and collaborators; the interpreter reports
    /// oversized offsets as `OutOfGas`.
    InvalidMemoryAccess,
    /// State modification inside a static call
    StaticModeViolation,
    /// Jump target is not a JUMPDEST
    BadJumpDest,
    /// REVERT executed
    Revert,
    /// Opcode undefined at the active revision
    UndefinedInstruction,
    /// Stack would exceed 1024 items
    StackOverflow,
    /// Not enough stack items for the opcode
    StackUnderflow,
    /// Precompiled contract failed
    PrecompileFailure,
    /// Value transfer exceeds the sender balance
    InsufficientBalance,
}

impl Status {
    /// Whether execution may continue / halted normally
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Whether remaining gas goes back to the caller.
    /// Only normal halts and REVERT keep their unused gas.
    pub const fn returns_gas(self) -> bool {
        matches!(self, Status::Success | Status::Revert)
    }

    /// Convert a terminal status into a `Result`
    pub fn into_result(self) -> EvmResult<()> {
        let err = match self {
            Status::Success => return Ok(()),
            Status::OutOfGas => EvmError::OutOfGas,
            Status::InvalidMemoryAccess => EvmError::InvalidMemoryAccess,
            Status::StaticModeViolation => EvmError::StaticModeViolation,
            Status::BadJumpDest => EvmError::BadJumpDest,
            Status::Revert => EvmError::Revert,
            Status::UndefinedInstruction => EvmError::UndefinedInstruction,
            Status::StackOverflow => EvmError::StackOverflow,
            Status::StackUnderflow => EvmError::StackUnderflow,
            Status::PrecompileFailure => EvmError::PrecompileFailure,
            Status::InsufficientBalance => EvmError::InsufficientBalance,
        };
        Err(err)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::Revert.is_success());
        assert!(!Status::OutOfGas.is_success());
    }

    #[test]
    fn test_returns_gas() {
        assert!(Status::Success.returns_gas());
        assert!(Status::Revert.returns_gas());
        assert!(!Status::BadJumpDest.returns_gas());
        assert!(!Status::StackUnderflow.returns_gas());
    }

    #[test]
    fn test_into_result() {
        assert!(Status::Success.into_result().is_ok());
        assert_eq!(Status::OutOfGas.into_result(), Err(EvmError::OutOfGas));
        assert_eq!(Status::Revert.into_result(), Err(EvmError::Revert));
        assert_eq!(
            Status::UndefinedInstruction.into_result(),
            Err(EvmError::UndefinedInstruction)
        );
    }

    #[test]
    fn test_invalid_memory_access_bridges_for_hosts() {
        let status = Status::InvalidMemoryAccess;
        assert!(!status.is_success());
        assert!(!status.returns_gas());
        assert_eq!(status.into_result(), Err(EvmError::InvalidMemoryAccess));
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::BadJumpDest.to_string(), "BadJumpDest");
    }
}
