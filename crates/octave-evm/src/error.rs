//! EVM error types

use crate::status::Status;
use bytes::Bytes;
use thiserror::Error;

/// EVM errors surfaced outside the interpreter loop
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvmError {
    /// Out of gas
    #[error("out of gas")]
    OutOfGas,

    /// Invalid memory access
    #[error("invalid memory access")]
    InvalidMemoryAccess,

    /// Write in static context
    #[error("state modification in static context")]
    StaticModeViolation,

    /// Invalid jump destination
    #[error("invalid jump destination")]
    BadJumpDest,

    /// Execution reverted
    #[error("execution reverted")]
    Revert,

    /// Undefined opcode
    #[error("undefined instruction")]
    UndefinedInstruction,

    /// Stack overflow
    #[error("stack overflow (max 1024)")]
    StackOverflow,

    /// Stack underflow
    #[error("stack underflow")]
    StackUnderflow,

    /// Precompile failure
    #[error("precompile failure")]
    PrecompileFailure,

    /// Insufficient balance for transfer
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Unrecognised fork name
    #[error("unknown revision: {0}")]
    UnknownRevision(String),
}

/// Result type for EVM operations
pub type EvmResult<T> = Result<T, EvmError>;

/// Outcome of one `execute` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Terminal status
    pub status: Status,
    /// Gas remaining; zero unless the status returns gas
    pub gas_left: u64,
    /// Refund counter accrued by SSTORE
    pub gas_refund: i64,
    /// RETURN or REVERT data
    pub output: Bytes,
}

impl ExecutionResult {
    /// Whether execution halted normally
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Gas consumed out of `gas_limit`
    pub fn gas_used(&self, gas_limit: u64) -> u64 {
        gas_limit.saturating_sub(self.gas_left)
    }

    /// Output on success, the mapped error otherwise
    pub fn into_output(self) -> EvmResult<Bytes> {
        self.status.into_result().map(|()| self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(EvmError::OutOfGas.to_string(), "out of gas");
        assert_eq!(EvmError::StackOverflow.to_string(), "stack overflow (max 1024)");
        assert_eq!(EvmError::StackUnderflow.to_string(), "stack underflow");
        assert_eq!(EvmError::BadJumpDest.to_string(), "invalid jump destination");
        assert_eq!(
            EvmError::StaticModeViolation.to_string(),
            "state modification in static context"
        );
        assert_eq!(
            EvmError::UnknownRevision("Prague".into()).to_string(),
            "unknown revision: Prague"
        );
    }

    #[test]
    fn test_result_gas_used() {
        let result = ExecutionResult {
            status: Status::Success,
            gas_left: 70,
            gas_refund: 0,
            output: Bytes::new(),
        };
        assert_eq!(result.gas_used(100), 30);
        assert!(result.is_success());
    }

    #[test]
    fn test_into_output() {
        let ok = ExecutionResult {
            status: Status::Success,
            gas_left: 0,
            gas_refund: 0,
            output: Bytes::from_static(&[1, 2]),
        };
        assert_eq!(ok.into_output().unwrap(), Bytes::from_static(&[1, 2]));

        let reverted = ExecutionResult {
            status: Status::Revert,
            gas_left: 10,
            gas_refund: 0,
            output: Bytes::from_static(&[3]),
        };
        assert_eq!(reverted.into_output(), Err(EvmError::Revert));
    }
}
