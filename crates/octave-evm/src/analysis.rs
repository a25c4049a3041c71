//! Jump-destination analysis

use crate::opcode::Opcode;

/// Zero bytes appended to analysed code.
/// Covers a truncated PUSH32 at the end plus an implicit STOP.
const CODE_PADDING: usize = 33;

/// Bytecode plus its JUMPDEST validity bitmap
///
/// Immutable once built, so it is shared between executions behind an `Arc`.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeAnalysis {
    /// Code followed by `CODE_PADDING` zero bytes
    code: Box<[u8]>,
    /// One entry per byte of the original code
    jump_dests: Box<[bool]>,
}

impl CodeAnalysis {
    /// Scan `code` once, marking JUMPDEST bytes that are not push data
    pub fn analyze(code: &[u8]) -> Self {
        let mut jump_dests = vec![false; code.len()];
        let mut i = 0;
        while i < code.len() {
            let op = Opcode(code[i]);
            if op == Opcode::JUMPDEST {
                jump_dests[i] = true;
            }
            i += 1 + op.push_size();
        }

        let mut padded = Vec::with_capacity(code.len() + CODE_PADDING);
        padded.extend_from_slice(code);
        padded.resize(code.len() + CODE_PADDING, 0);

        let analysis = Self {
            code: padded.into_boxed_slice(),
            jump_dests: jump_dests.into_boxed_slice(),
        };
        debug_assert_eq!(analysis.jump_dests.len(), analysis.code_size());
        analysis
    }

    /// Length of the original code
    pub fn code_size(&self) -> usize {
        self.code.len() - CODE_PADDING
    }

    /// Original code, without padding
    pub fn code(&self) -> &[u8] {
        &self.code[..self.code_size()]
    }

    /// Code including the zero padding
    pub fn padded_code(&self) -> &[u8] {
        &self.code
    }

    /// Whether `offset` is a valid jump target
    pub fn is_jump_dest(&self, offset: usize) -> bool {
        self.jump_dests.get(offset).copied().unwrap_or(false)
    }

    /// The full validity bitmap
    pub fn jump_dests(&self) -> &[bool] {
        &self.jump_dests
    }
}

impl std::fmt::Debug for CodeAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeAnalysis")
            .field("code_size", &self.code_size())
            .field("jump_dests", &self.jump_dests.iter().filter(|&&d| d).count())
            .finish()
    }
}

/// Analyse `code`
pub fn analyze(code: &[u8]) -> CodeAnalysis {
    CodeAnalysis::analyze(code)
}
