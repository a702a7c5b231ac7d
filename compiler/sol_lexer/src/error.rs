//! Lexer errors.

use sol_ir::TokenKind;
use thiserror::Error;

/// A character sequence the lexer does not recognize.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("unrecognized input at offset {offset}")]
pub struct LexError {
    pub offset: u32,
}

/// Why a fragment did not reduce to exactly one token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum SingleTokenError {
    #[error("no token found")]
    Empty,
    #[error("unrecognized input at offset {offset}")]
    Unrecognized { offset: u32 },
    #[error("unexpected input at offset {offset} after `{first}`")]
    Trailing { first: TokenKind, offset: u32 },
}

impl From<LexError> for SingleTokenError {
    fn from(err: LexError) -> Self {
        SingleTokenError::Unrecognized { offset: err.offset }
    }
}
