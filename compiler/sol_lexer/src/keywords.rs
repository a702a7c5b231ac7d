//! Keyword and elementary-type resolution.
//!
//! Words are lexed by a single regex and classified here. The fixed table
//! covers keywords, boolean literals, subdenominations and unsized
//! elementary types. Sized elementary types (`uint256`, `bytes32`,
//! `fixed128x18`) are recognized structurally; a name like `uint7` or
//! `bytes33` is an ordinary identifier.

use sol_ir::TokenKind;

use crate::parse_helpers::{parse_fixed_sizes, parse_size};

/// Classify a lexed word.
pub(crate) fn classify(text: &str) -> TokenKind {
    lookup(text)
        .or_else(|| sized_elementary(text))
        .unwrap_or(TokenKind::Identifier)
}

/// Look up a word with a fixed spelling.
///
/// Uses length-bucketing for fast rejection: every fixed-spelling word is
/// 2-10 chars.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=10).contains(&len) {
        return None;
    }

    let kind = match len {
        2 => match text {
            "as" => TokenKind::As,
            "do" => TokenKind::Do,
            "if" => TokenKind::If,
            "is" => TokenKind::Is,
            _ => return None,
        },
        3 => match text {
            "for" => TokenKind::For,
            "hex" => TokenKind::Hex,
            "int" => TokenKind::Int,
            "new" => TokenKind::New,
            "var" => TokenKind::Var,
            "wei" => TokenKind::SubWei,
            _ => return None,
        },
        4 => match text {
            "bool" => TokenKind::Bool,
            "byte" => TokenKind::Byte,
            "days" => TokenKind::SubDay,
            "else" => TokenKind::Else,
            "emit" => TokenKind::Emit,
            "enum" => TokenKind::Enum,
            "pure" => TokenKind::Pure,
            "true" => TokenKind::TrueLiteral,
            "uint" => TokenKind::UInt,
            "view" => TokenKind::View,
            _ => return None,
        },
        5 => match text {
            "break" => TokenKind::Break,
            "bytes" => TokenKind::Bytes,
            "event" => TokenKind::Event,
            "false" => TokenKind::FalseLiteral,
            "fixed" => TokenKind::Fixed,
            "hours" => TokenKind::SubHour,
            "szabo" => TokenKind::SubSzabo,
            "throw" => TokenKind::Throw,
            "using" => TokenKind::Using,
            "weeks" => TokenKind::SubWeek,
            "while" => TokenKind::While,
            "years" => TokenKind::SubYear,
            "ether" => TokenKind::SubEther,
            _ => return None,
        },
        6 => match text {
            "delete" => TokenKind::Delete,
            "finney" => TokenKind::SubFinney,
            "import" => TokenKind::Import,
            "memory" => TokenKind::Memory,
            "pragma" => TokenKind::Pragma,
            "public" => TokenKind::Public,
            "return" => TokenKind::Return,
            "string" => TokenKind::String,
            "struct" => TokenKind::Struct,
            "ufixed" => TokenKind::UFixed,
            _ => return None,
        },
        7 => match text {
            "address" => TokenKind::Address,
            "indexed" => TokenKind::Indexed,
            "library" => TokenKind::Library,
            "mapping" => TokenKind::Mapping,
            "minutes" => TokenKind::SubMinute,
            "payable" => TokenKind::Payable,
            "private" => TokenKind::Private,
            "returns" => TokenKind::Returns,
            "seconds" => TokenKind::SubSecond,
            "storage" => TokenKind::Storage,
            _ => return None,
        },
        8 => match text {
            "assembly" => TokenKind::Assembly,
            "constant" => TokenKind::Constant,
            "continue" => TokenKind::Continue,
            "contract" => TokenKind::Contract,
            "external" => TokenKind::External,
            "function" => TokenKind::Function,
            "internal" => TokenKind::Internal,
            "modifier" => TokenKind::Modifier,
            _ => return None,
        },
        9 => match text {
            "anonymous" => TokenKind::Anonymous,
            "interface" => TokenKind::Interface,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}

/// Recognize `intM`, `uintM`, `bytesM`, `fixedMxN` and `ufixedMxN`.
fn sized_elementary(text: &str) -> Option<TokenKind> {
    if let Some(sizes) = text.strip_prefix("ufixed") {
        let (m, n) = parse_fixed_sizes(sizes)?;
        return Some(TokenKind::UFixedMxN(m, n));
    }
    if let Some(sizes) = text.strip_prefix("fixed") {
        let (m, n) = parse_fixed_sizes(sizes)?;
        return Some(TokenKind::FixedMxN(m, n));
    }
    if let Some(size) = text.strip_prefix("uint") {
        return int_bits(size).map(TokenKind::UIntM);
    }
    if let Some(size) = text.strip_prefix("int") {
        return int_bits(size).map(TokenKind::IntM);
    }
    if let Some(size) = text.strip_prefix("bytes") {
        let bytes = parse_size(size)?;
        return match u8::try_from(bytes) {
            Ok(b @ 1..=32) => Some(TokenKind::BytesM(b)),
            _ => None,
        };
    }
    None
}

fn int_bits(size: &str) -> Option<u16> {
    let bits = parse_size(size)?;
    (8..=256)
        .contains(&bits)
        .then_some(bits)
        .filter(|bits| bits % 8 == 0)
}
