//! Node identifiers carried over from the serialized document.

use std::fmt;

/// Numeric identifier of an AST node.
///
/// Propagated verbatim from the document; the importer never renumbers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct NodeId(pub i64);

impl NodeId {
    #[inline]
    pub const fn new(raw: i64) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
