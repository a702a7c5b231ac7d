//! Source locations: a span attributed to a named source.

use std::fmt;
use std::sync::Arc;

use crate::Span;

/// Name of the source a tree was imported from.
///
/// Shared by every location of one import; cloning is a reference-count bump.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SourceName(Arc<str>);

impl SourceName {
    pub fn new(name: &str) -> Self {
        SourceName(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two names share the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &SourceName) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for SourceName {
    fn from(name: &str) -> Self {
        SourceName::new(name)
    }
}

impl From<String> for SourceName {
    fn from(name: String) -> Self {
        SourceName(Arc::from(name))
    }
}

impl fmt::Debug for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open byte range `[start, end)` in a named source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    pub span: Span,
    pub source: SourceName,
}

impl SourceLocation {
    pub fn new(span: Span, source: SourceName) -> Self {
        SourceLocation { span, source }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        self.source.as_str()
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.source, self.span)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.span)
    }
}
