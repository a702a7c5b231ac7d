//! Import errors.
//!
//! Every failure aborts the whole import; the first error raised is the one
//! returned.

use std::fmt;

use sol_ir::{NodeKind, TokenKind};
use sol_lexer::SingleTokenError;
use thiserror::Error;

/// The document node an error was raised on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct NodeContext {
    pub kind: Option<NodeKind>,
    pub id: Option<i64>,
}

impl NodeContext {
    pub fn new(kind: NodeKind, id: Option<i64>) -> Self {
        NodeContext {
            kind: Some(kind),
            id,
        }
    }
}

impl fmt::Display for NodeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.id) {
            (Some(kind), Some(id)) => write!(f, "{kind} #{id}"),
            (Some(kind), None) => write!(f, "{kind}"),
            (None, Some(id)) => write!(f, "node #{id}"),
            (None, None) => f.write_str("node"),
        }
    }
}

/// What is wrong with a field.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum SchemaReason {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },
    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("invalid source range `{marker}`")]
    InvalidSourceRange { marker: String },
    #[error("expected a node object")]
    NotAnObject,
}

/// Why a text fragment did not resolve to the token required.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum TokenErrorReason {
    #[error(transparent)]
    Lex(#[from] SingleTokenError),
    #[error("expected {expected}, found `{found}`")]
    WrongCategory {
        expected: &'static str,
        found: TokenKind,
    },
}

/// The error taxonomy, without payloads.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCategory {
    SchemaViolation,
    UnknownKind,
    InvalidToken,
    InvariantViolation,
    DepthLimitExceeded,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ImportError {
    /// A required field is missing, null or of the wrong type.
    #[error("schema violation in {node}: {reason}")]
    SchemaViolation {
        node: NodeContext,
        reason: SchemaReason,
    },

    #[error("unknown node kind `{kind}`")]
    UnknownKind { kind: String },

    #[error("invalid token `{text}`: {reason}")]
    InvalidToken {
        text: String,
        reason: TokenErrorReason,
    },

    /// The tree is not well formed with respect to the grammar.
    #[error("invariant violation in {node}: {message}")]
    InvariantViolation { node: NodeContext, message: String },

    #[error("document nests deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::SchemaViolation { .. } => ErrorCategory::SchemaViolation,
            ImportError::UnknownKind { .. } => ErrorCategory::UnknownKind,
            ImportError::InvalidToken { .. } => ErrorCategory::InvalidToken,
            ImportError::InvariantViolation { .. } => ErrorCategory::InvariantViolation,
            ImportError::DepthLimitExceeded { .. } => ErrorCategory::DepthLimitExceeded,
        }
    }

    pub(crate) fn schema(node: NodeContext, reason: SchemaReason) -> Self {
        ImportError::SchemaViolation { node, reason }
    }

    pub(crate) fn missing(node: NodeContext, field: &'static str) -> Self {
        ImportError::schema(node, SchemaReason::MissingField { field })
    }

    pub(crate) fn wrong_type(node: NodeContext, field: &'static str, expected: &'static str) -> Self {
        ImportError::schema(node, SchemaReason::WrongType { field, expected })
    }

    pub(crate) fn invariant(node: NodeContext, message: impl Into<String>) -> Self {
        ImportError::InvariantViolation {
            node,
            message: message.into(),
        }
    }
}
