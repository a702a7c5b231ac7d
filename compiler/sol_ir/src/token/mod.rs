//! Token types for the contract language.
//!
//! The importer never tokenizes whole sources; it re-lexes short fragments
//! (operators, pragma literals, type names) and keeps only the token identity.

mod elementary;
mod kind;

pub use elementary::ElementaryTypeNameToken;
pub use kind::TokenKind;

use std::fmt;

use super::Span;

/// A token with its span in the lexed fragment.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}
