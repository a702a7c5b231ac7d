use std::fmt;

use super::TokenKind;

/// An elementary type token with its size parameters.
///
/// `first_size` is the bit width (or byte count for `bytesM`); `second_size`
/// is the number of decimal digits for fixed-point types. Unsized types carry
/// zero in both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementaryTypeNameToken {
    pub token: TokenKind,
    pub first_size: u16,
    pub second_size: u8,
}

impl ElementaryTypeNameToken {
    /// Builds the elementary token for `kind`, or `None` if `kind` is not an
    /// elementary type.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let (first_size, second_size) = match kind {
            TokenKind::IntM(m) | TokenKind::UIntM(m) => (m, 0),
            TokenKind::BytesM(m) => (u16::from(m), 0),
            TokenKind::FixedMxN(m, n) | TokenKind::UFixedMxN(m, n) => (m, n),
            other if other.is_elementary_type() => (0, 0),
            _ => return None,
        };
        Some(ElementaryTypeNameToken {
            token: kind,
            first_size,
            second_size,
        })
    }
}

impl fmt::Display for ElementaryTypeNameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}
