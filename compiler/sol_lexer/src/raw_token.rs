//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! identifiers are classified into keywords and elementary types.

use logos::{FilterResult, Lexer, Logos};

/// Raw token from logos (before keyword classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBrack,
    #[token("]")]
    RBrack,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Period,
    #[token("?")]
    Conditional,
    #[token("=>")]
    Arrow,
    #[token(",")]
    Comma,

    // Assignment
    #[token("=")]
    Assign,
    #[token("|=")]
    AssignBitOr,
    #[token("^=")]
    AssignBitXor,
    #[token("&=")]
    AssignBitAnd,
    #[token("<<=")]
    AssignShl,
    #[token(">>=")]
    AssignSar,
    #[token(">>>=")]
    AssignShr,
    #[token("+=")]
    AssignAdd,
    #[token("-=")]
    AssignSub,
    #[token("*=")]
    AssignMul,
    #[token("/=")]
    AssignDiv,
    #[token("%=")]
    AssignMod,

    // Logical and bitwise
    #[token("||")]
    Or,
    #[token("&&")]
    And,
    #[token("|")]
    BitOr,
    #[token("^")]
    BitXor,
    #[token("&")]
    BitAnd,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Sar,
    #[token(">>>")]
    Shr,

    // Arithmetic
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,
    #[token("**")]
    Exp,

    // Comparison
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("<=")]
    LessThanOrEqual,
    #[token(">=")]
    GreaterThanOrEqual,

    // Unary
    #[token("!")]
    Not,
    #[token("~")]
    BitNot,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]+)?([eE]-?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE]-?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    String,

    #[regex(r#"hex"[0-9a-fA-F]*""#)]
    #[regex(r#"hex'[0-9a-fA-F]*'"#)]
    HexString,

    /// Keywords, elementary types and plain names; classified after lexing.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Word,

    /// Never produced: the callback skips the comment or fails.
    #[token("/*", skip_block_comment)]
    BlockComment,
}

/// Skip to just past the closing `*/`; an unterminated comment is an error.
fn skip_block_comment(lex: &mut Lexer<'_, RawToken>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}
