//! Uniform access to imported nodes.
//!
//! `AstNode` is implemented by every node struct and by the sum types that
//! group them (`Node`, `Statement`, `Expression`, `TypeName`). Traversal goes
//! through `for_each_child`, which yields children in source order.

use super::ast::NodeKind;
use super::{NodeId, SourceLocation};

/// A node of the imported tree.
pub trait AstNode {
    /// Identifier carried over from the document.
    fn id(&self) -> NodeId;

    fn location(&self) -> &SourceLocation;

    fn kind(&self) -> NodeKind;

    /// Call `f` on each direct child, in source order.
    fn for_each_child(&self, f: &mut dyn FnMut(&dyn AstNode)) {
        let _ = f;
    }
}

/// Implements `id` and `location` for a struct with `id` and `location` fields.
macro_rules! node_header {
    () => {
        #[inline]
        fn id(&self) -> $crate::NodeId {
            self.id
        }

        #[inline]
        fn location(&self) -> &$crate::SourceLocation {
            &self.location
        }
    };
}

/// Implements `AstNode` for a sum type by forwarding to each variant.
macro_rules! delegate_ast_node {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::AstNode for $ty {
            fn id(&self) -> $crate::NodeId {
                match self {
                    $($ty::$variant(inner) => $crate::AstNode::id(inner),)+
                }
            }

            fn location(&self) -> &$crate::SourceLocation {
                match self {
                    $($ty::$variant(inner) => $crate::AstNode::location(inner),)+
                }
            }

            fn kind(&self) -> $crate::ast::NodeKind {
                match self {
                    $($ty::$variant(inner) => $crate::AstNode::kind(inner),)+
                }
            }

            fn for_each_child(&self, f: &mut dyn FnMut(&dyn $crate::AstNode)) {
                match self {
                    $($ty::$variant(inner) => $crate::AstNode::for_each_child(inner, f),)+
                }
            }
        }
    };
}

pub(crate) use delegate_ast_node;
pub(crate) use node_header;
