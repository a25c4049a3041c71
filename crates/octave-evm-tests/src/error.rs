//! Error types for fixture runs

use octave_evm::EvmError;
use thiserror::Error;

/// Test error type
#[derive(Error, Debug)]
pub enum TestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex decoding error
    #[error("Hex error: {0}")]
    Hex(String),

    /// Engine error, e.g. an unknown fork name
    #[error("EVM error: {0}")]
    Evm(#[from] EvmError),

    /// Expected and actual outcome differ
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Fixture needs something the engine does not implement
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl From<hex::FromHexError> for TestError {
    fn from(e: hex::FromHexError) -> Self {
        TestError::Hex(e.to_string())
    }
}

/// Test result type
pub type TestResult<T> = Result<T, TestError>;
