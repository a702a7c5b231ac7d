//! Lexer for Solidity fragments using logos.
//!
//! The importer never lexes whole sources. It re-lexes short fragments
//! recovered from a serialized AST (operator symbols, pragma literals,
//! elementary type names) and needs the token identity of each one.
//! [`scan_single_token`] is that primitive: the fragment must reduce to
//! exactly one token followed by end of input.

mod error;
mod keywords;
mod parse_helpers;
mod raw_token;

use logos::Logos;
use sol_ir::{Span, Token, TokenKind};

pub use error::{LexError, SingleTokenError};

use raw_token::RawToken;

/// Iterator over the tokens of a fragment.
///
/// Yields `Err` once for unrecognized input and then stops.
pub(crate) struct Tokens<'src> {
    inner: logos::Lexer<'src, RawToken>,
    failed: bool,
}

impl<'src> Tokens<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Tokens {
            inner: RawToken::lexer(source),
            failed: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.inner.next()?;
        let range = self.inner.span();
        let span = Span::new(to_offset(range.start), to_offset(range.end));
        match raw {
            Ok(raw) => Some(Ok(Token::new(convert(raw, self.inner.slice()), span))),
            Err(()) => {
                self.failed = true;
                Some(Err(LexError { offset: span.start }))
            }
        }
    }
}

/// Resolve a fragment that must consist of exactly one token.
///
/// Surrounding whitespace and comments are ignored. `"+"`, `"&&"` and `"="`
/// resolve to their operators; `"+ +"` and `"1abc"` are rejected because a
/// second token follows the first.
pub fn scan_single_token(text: &str) -> Result<TokenKind, SingleTokenError> {
    let mut tokens = Tokens::new(text);
    let first = match tokens.next() {
        None => return Err(SingleTokenError::Empty),
        Some(token) => token?,
    };
    match tokens.next() {
        None => Ok(first.kind),
        Some(Ok(next)) => Err(SingleTokenError::Trailing {
            first: first.kind,
            offset: next.span.start,
        }),
        Some(Err(err)) => Err(SingleTokenError::Trailing {
            first: first.kind,
            offset: err.offset,
        }),
    }
}

/// Fragments are short; offsets past `u32::MAX` saturate.
fn to_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrack => TokenKind::LBrack,
        RawToken::RBrack => TokenKind::RBrack,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Period => TokenKind::Period,
        RawToken::Conditional => TokenKind::Conditional,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Assign => TokenKind::Assign,
        RawToken::AssignBitOr => TokenKind::AssignBitOr,
        RawToken::AssignBitXor => TokenKind::AssignBitXor,
        RawToken::AssignBitAnd => TokenKind::AssignBitAnd,
        RawToken::AssignShl => TokenKind::AssignShl,
        RawToken::AssignSar => TokenKind::AssignSar,
        RawToken::AssignShr => TokenKind::AssignShr,
        RawToken::AssignAdd => TokenKind::AssignAdd,
        RawToken::AssignSub => TokenKind::AssignSub,
        RawToken::AssignMul => TokenKind::AssignMul,
        RawToken::AssignDiv => TokenKind::AssignDiv,
        RawToken::AssignMod => TokenKind::AssignMod,
        RawToken::Or => TokenKind::Or,
        RawToken::And => TokenKind::And,
        RawToken::BitOr => TokenKind::BitOr,
        RawToken::BitXor => TokenKind::BitXor,
        RawToken::BitAnd => TokenKind::BitAnd,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Sar => TokenKind::Sar,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Add => TokenKind::Add,
        RawToken::Sub => TokenKind::Sub,
        RawToken::Mul => TokenKind::Mul,
        RawToken::Div => TokenKind::Div,
        RawToken::Mod => TokenKind::Mod,
        RawToken::Exp => TokenKind::Exp,
        RawToken::Equal => TokenKind::Equal,
        RawToken::NotEqual => TokenKind::NotEqual,
        RawToken::LessThan => TokenKind::LessThan,
        RawToken::GreaterThan => TokenKind::GreaterThan,
        RawToken::LessThanOrEqual => TokenKind::LessThanOrEqual,
        RawToken::GreaterThanOrEqual => TokenKind::GreaterThanOrEqual,
        RawToken::Not => TokenKind::Not,
        RawToken::BitNot => TokenKind::BitNot,
        RawToken::Inc => TokenKind::Inc,
        RawToken::Dec => TokenKind::Dec,
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::StringLiteral,
        RawToken::HexString => TokenKind::HexStringLiteral,
        RawToken::Word => keywords::classify(slice),
        RawToken::BlockComment => unreachable!("block comments are skipped while lexing"),
    }
}
