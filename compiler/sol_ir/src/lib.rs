//! Sol IR - typed AST for contract sources
//!
//! This crate contains the data structures produced by the AST importer:
//! - Spans and named source locations
//! - Node identifiers carried over from the serialized document
//! - Token kinds and elementary type tokens
//! - AST nodes (declarations, type names, statements, expressions)
//! - Narrowing from the generic `Node` to position-specific types
//! - A pre-order visitor over `AstNode`
//!
//! # Design Philosophy
//!
//! - **Strict tree**: children are owned by their parents; no sharing, no
//!   back edges
//! - **Closed sums**: `Node`, `Statement`, `Expression` and `TypeName` are
//!   enums so every match over them is checked for exhaustiveness

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod traits;

pub mod ast;
mod location;
mod node_id;
mod span;
mod token;
pub mod visitor;

pub use ast::{Narrow, Node, NodeKind};
pub use location::{SourceLocation, SourceName};
pub use node_id::NodeId;
pub use span::{Span, SpanError};
pub use token::{ElementaryTypeNameToken, Token, TokenKind};
pub use traits::AstNode;
