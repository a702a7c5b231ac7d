//! AST Visitor Pattern
//!
//! Pre-order traversal over any imported tree through the `AstNode` trait.
//!
//! Override `visit` to observe nodes and call `walk` to continue into
//! children. The tree itself is never mutated.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl Visitor for CountLiterals {
//!     fn visit(&mut self, node: &dyn AstNode) {
//!         if node.kind() == NodeKind::Literal {
//!             self.count += 1;
//!         }
//!         walk(self, node);
//!     }
//! }
//! ```

use super::ast::NodeKind;
use super::{AstNode, NodeId, Span};

/// AST visitor trait.
pub trait Visitor {
    fn visit(&mut self, node: &dyn AstNode) {
        walk(self, node);
    }
}

/// Visit each direct child of `node`.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: &dyn AstNode) {
    node.for_each_child(&mut |child| visitor.visit(child));
}

/// One entry of a pre-order listing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeSummary {
    pub kind: NodeKind,
    pub id: NodeId,
    pub span: Span,
}

#[derive(Default)]
struct Preorder {
    nodes: Vec<NodeSummary>,
}

impl Visitor for Preorder {
    fn visit(&mut self, node: &dyn AstNode) {
        self.nodes.push(NodeSummary {
            kind: node.kind(),
            id: node.id(),
            span: node.location().span,
        });
        walk(self, node);
    }
}

/// Kind, id and span of every node under `root` (inclusive), in pre-order.
pub fn preorder(root: &dyn AstNode) -> Vec<NodeSummary> {
    let mut collector = Preorder::default();
    collector.visit(root);
    collector.nodes
}

/// Number of nodes under `root`, inclusive.
pub fn count_nodes(root: &dyn AstNode) -> usize {
    struct Counter(usize);

    impl Visitor for Counter {
        fn visit(&mut self, node: &dyn AstNode) {
            self.0 += 1;
            walk(self, node);
        }
    }

    let mut counter = Counter(0);
    counter.visit(root);
    counter.0
}
