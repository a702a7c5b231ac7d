//! Token kinds.

use std::fmt;

/// Token kinds of the contract language.
///
/// Sized elementary types carry their sizes: `uint256` is `UIntM(256)`,
/// `bytes32` is `BytesM(32)`, `fixed128x18` is `FixedMxN(128, 18)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
    Period,
    Conditional,
    Arrow,

    // Assignment operators
    Assign,
    AssignBitOr,
    AssignBitXor,
    AssignBitAnd,
    AssignShl,
    AssignSar,
    AssignShr,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,

    // Binary operators
    Comma,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Shl,
    Sar,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,

    // Unary operators
    Not,
    BitNot,
    Inc,
    Dec,
    Delete,

    // Keywords
    Anonymous,
    As,
    Assembly,
    Break,
    Constant,
    Continue,
    Contract,
    Do,
    Else,
    Emit,
    Enum,
    Event,
    External,
    For,
    Function,
    Hex,
    If,
    Import,
    Indexed,
    Interface,
    Internal,
    Is,
    Library,
    Mapping,
    Memory,
    Modifier,
    New,
    Payable,
    Pragma,
    Private,
    Public,
    Pure,
    Return,
    Returns,
    Storage,
    Struct,
    Throw,
    Using,
    Var,
    View,
    While,

    // Elementary types
    Int,
    UInt,
    IntM(u16),
    UIntM(u16),
    Bytes,
    BytesM(u8),
    Byte,
    String,
    Address,
    Bool,
    Fixed,
    UFixed,
    FixedMxN(u16, u8),
    UFixedMxN(u16, u8),

    // Literals
    TrueLiteral,
    FalseLiteral,
    Number,
    StringLiteral,
    HexStringLiteral,

    // Ether and time subdenominations
    SubWei,
    SubSzabo,
    SubFinney,
    SubEther,
    SubSecond,
    SubMinute,
    SubHour,
    SubDay,
    SubWeek,
    SubYear,

    Identifier,
}

impl TokenKind {
    /// Whether this token is an assignment operator (`=`, `+=`, ...).
    pub const fn is_assignment_op(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::AssignBitOr
                | TokenKind::AssignBitXor
                | TokenKind::AssignBitAnd
                | TokenKind::AssignShl
                | TokenKind::AssignSar
                | TokenKind::AssignShr
                | TokenKind::AssignAdd
                | TokenKind::AssignSub
                | TokenKind::AssignMul
                | TokenKind::AssignDiv
                | TokenKind::AssignMod
        )
    }

    /// Whether this token may appear as the operator of a binary operation.
    pub const fn is_binary_op(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::BitOr
                | TokenKind::BitXor
                | TokenKind::BitAnd
                | TokenKind::Shl
                | TokenKind::Sar
                | TokenKind::Shr
                | TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::Exp
        ) || self.is_compare_op()
    }

    pub const fn is_compare_op(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LessThanOrEqual
                | TokenKind::GreaterThanOrEqual
        )
    }

    /// Whether this token may appear as the operator of a unary operation.
    ///
    /// `+` and `-` double as unary operators.
    pub const fn is_unary_op(self) -> bool {
        matches!(
            self,
            TokenKind::Not
                | TokenKind::BitNot
                | TokenKind::Inc
                | TokenKind::Dec
                | TokenKind::Delete
                | TokenKind::Add
                | TokenKind::Sub
        )
    }

    pub const fn is_elementary_type(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::UInt
                | TokenKind::IntM(_)
                | TokenKind::UIntM(_)
                | TokenKind::Bytes
                | TokenKind::BytesM(_)
                | TokenKind::Byte
                | TokenKind::String
                | TokenKind::Address
                | TokenKind::Bool
                | TokenKind::Fixed
                | TokenKind::UFixed
                | TokenKind::FixedMxN(_, _)
                | TokenKind::UFixedMxN(_, _)
        )
    }

    pub const fn is_subdenomination(self) -> bool {
        matches!(
            self,
            TokenKind::SubWei
                | TokenKind::SubSzabo
                | TokenKind::SubFinney
                | TokenKind::SubEther
                | TokenKind::SubSecond
                | TokenKind::SubMinute
                | TokenKind::SubHour
                | TokenKind::SubDay
                | TokenKind::SubWeek
                | TokenKind::SubYear
        )
    }

    /// Source text of fixed-spelling tokens.
    ///
    /// Returns `None` for tokens whose text varies (identifiers, literals,
    /// sized elementary types).
    pub const fn as_str(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrack => "[",
            TokenKind::RBrack => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Period => ".",
            TokenKind::Conditional => "?",
            TokenKind::Arrow => "=>",
            TokenKind::Assign => "=",
            TokenKind::AssignBitOr => "|=",
            TokenKind::AssignBitXor => "^=",
            TokenKind::AssignBitAnd => "&=",
            TokenKind::AssignShl => "<<=",
            TokenKind::AssignSar => ">>=",
            TokenKind::AssignShr => ">>>=",
            TokenKind::AssignAdd => "+=",
            TokenKind::AssignSub => "-=",
            TokenKind::AssignMul => "*=",
            TokenKind::AssignDiv => "/=",
            TokenKind::AssignMod => "%=",
            TokenKind::Comma => ",",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::BitOr => "|",
            TokenKind::BitXor => "^",
            TokenKind::BitAnd => "&",
            TokenKind::Shl => "<<",
            TokenKind::Sar => ">>",
            TokenKind::Shr => ">>>",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Exp => "**",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanOrEqual => "<=",
            TokenKind::GreaterThanOrEqual => ">=",
            TokenKind::Not => "!",
            TokenKind::BitNot => "~",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::Delete => "delete",
            TokenKind::Anonymous => "anonymous",
            TokenKind::As => "as",
            TokenKind::Assembly => "assembly",
            TokenKind::Break => "break",
            TokenKind::Constant => "constant",
            TokenKind::Continue => "continue",
            TokenKind::Contract => "contract",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Emit => "emit",
            TokenKind::Enum => "enum",
            TokenKind::Event => "event",
            TokenKind::External => "external",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Hex => "hex",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::Indexed => "indexed",
            TokenKind::Interface => "interface",
            TokenKind::Internal => "internal",
            TokenKind::Is => "is",
            TokenKind::Library => "library",
            TokenKind::Mapping => "mapping",
            TokenKind::Memory => "memory",
            TokenKind::Modifier => "modifier",
            TokenKind::New => "new",
            TokenKind::Payable => "payable",
            TokenKind::Pragma => "pragma",
            TokenKind::Private => "private",
            TokenKind::Public => "public",
            TokenKind::Pure => "pure",
            TokenKind::Return => "return",
            TokenKind::Returns => "returns",
            TokenKind::Storage => "storage",
            TokenKind::Struct => "struct",
            TokenKind::Throw => "throw",
            TokenKind::Using => "using",
            TokenKind::Var => "var",
            TokenKind::View => "view",
            TokenKind::While => "while",
            TokenKind::Int => "int",
            TokenKind::UInt => "uint",
            TokenKind::Bytes => "bytes",
            TokenKind::Byte => "byte",
            TokenKind::String => "string",
            TokenKind::Address => "address",
            TokenKind::Bool => "bool",
            TokenKind::Fixed => "fixed",
            TokenKind::UFixed => "ufixed",
            TokenKind::TrueLiteral => "true",
            TokenKind::FalseLiteral => "false",
            TokenKind::SubWei => "wei",
            TokenKind::SubSzabo => "szabo",
            TokenKind::SubFinney => "finney",
            TokenKind::SubEther => "ether",
            TokenKind::SubSecond => "seconds",
            TokenKind::SubMinute => "minutes",
            TokenKind::SubHour => "hours",
            TokenKind::SubDay => "days",
            TokenKind::SubWeek => "weeks",
            TokenKind::SubYear => "years",
            TokenKind::IntM(_)
            | TokenKind::UIntM(_)
            | TokenKind::BytesM(_)
            | TokenKind::FixedMxN(_, _)
            | TokenKind::UFixedMxN(_, _)
            | TokenKind::Number
            | TokenKind::StringLiteral
            | TokenKind::HexStringLiteral
            | TokenKind::Identifier => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntM(_) | TokenKind::UIntM(_) => "sized integer type",
            TokenKind::BytesM(_) => "fixed bytes type",
            TokenKind::FixedMxN(_, _) | TokenKind::UFixedMxN(_, _) => "sized fixed-point type",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string literal",
            TokenKind::HexStringLiteral => "hex string literal",
            TokenKind::Identifier => "identifier",
            other => other.as_str().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TokenKind::IntM(m) => write!(f, "int{m}"),
            TokenKind::UIntM(m) => write!(f, "uint{m}"),
            TokenKind::BytesM(m) => write!(f, "bytes{m}"),
            TokenKind::FixedMxN(m, n) => write!(f, "fixed{m}x{n}"),
            TokenKind::UFixedMxN(m, n) => write!(f, "ufixed{m}x{n}"),
            other => f.write_str(other.display_name()),
        }
    }
}
