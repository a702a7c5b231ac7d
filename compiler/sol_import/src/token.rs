//! Token recovery from text fragments.

use sol_ir::{ElementaryTypeNameToken, TokenKind};
use sol_lexer::scan_single_token;

use crate::error::{ImportError, TokenErrorReason};

/// Resolve `text` to exactly one token.
pub fn resolve_token(text: &str) -> Result<TokenKind, ImportError> {
    scan_single_token(text).map_err(|err| ImportError::InvalidToken {
        text: text.to_owned(),
        reason: TokenErrorReason::Lex(err),
    })
}

fn resolve_category(
    text: &str,
    expected: &'static str,
    accept: fn(TokenKind) -> bool,
) -> Result<TokenKind, ImportError> {
    let kind = resolve_token(text)?;
    if accept(kind) {
        Ok(kind)
    } else {
        Err(ImportError::InvalidToken {
            text: text.to_owned(),
            reason: TokenErrorReason::WrongCategory {
                expected,
                found: kind,
            },
        })
    }
}

pub(crate) fn resolve_assignment_op(text: &str) -> Result<TokenKind, ImportError> {
    resolve_category(text, "an assignment operator", TokenKind::is_assignment_op)
}

pub(crate) fn resolve_binary_op(text: &str) -> Result<TokenKind, ImportError> {
    resolve_category(text, "a binary operator", TokenKind::is_binary_op)
}

pub(crate) fn resolve_unary_op(text: &str) -> Result<TokenKind, ImportError> {
    resolve_category(text, "a unary operator", TokenKind::is_unary_op)
}

pub(crate) fn resolve_subdenomination(text: &str) -> Result<TokenKind, ImportError> {
    resolve_category(text, "a subdenomination", TokenKind::is_subdenomination)
}

pub(crate) fn resolve_bool_literal(text: &str) -> Result<TokenKind, ImportError> {
    resolve_category(text, "`true` or `false`", |kind| {
        matches!(kind, TokenKind::TrueLiteral | TokenKind::FalseLiteral)
    })
}

/// Resolve an elementary type name such as `uint256` or `fixed128x18`.
pub(crate) fn resolve_elementary(text: &str) -> Result<ElementaryTypeNameToken, ImportError> {
    let kind = resolve_category(text, "an elementary type", TokenKind::is_elementary_type)?;
    ElementaryTypeNameToken::from_token(kind).ok_or_else(|| ImportError::InvalidToken {
        text: text.to_owned(),
        reason: TokenErrorReason::WrongCategory {
            expected: "an elementary type",
            found: kind,
        },
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sol_lexer::SingleTokenError;

    use super::*;
    use crate::ErrorCategory;

    #[test]
    fn operators_in_their_category() {
        assert_eq!(resolve_assignment_op("-="), Ok(TokenKind::AssignSub));
        assert_eq!(resolve_binary_op("&&"), Ok(TokenKind::And));
        assert_eq!(resolve_binary_op("<="), Ok(TokenKind::LessThanOrEqual));
        assert_eq!(resolve_unary_op("delete"), Ok(TokenKind::Delete));
        assert_eq!(resolve_unary_op("-"), Ok(TokenKind::Sub));
    }

    #[test]
    fn operators_outside_their_category() {
        assert_eq!(
            resolve_assignment_op("+"),
            Err(ImportError::InvalidToken {
                text: "+".to_owned(),
                reason: TokenErrorReason::WrongCategory {
                    expected: "an assignment operator",
                    found: TokenKind::Add,
                },
            })
        );
        assert!(resolve_binary_op("=").is_err());
        assert!(resolve_unary_op("*").is_err());
    }

    #[test]
    fn multi_token_text_is_invalid() {
        let err = resolve_token("+ +");
        assert_eq!(
            err,
            Err(ImportError::InvalidToken {
                text: "+ +".to_owned(),
                reason: TokenErrorReason::Lex(SingleTokenError::Trailing {
                    first: TokenKind::Add,
                    offset: 2,
                }),
            })
        );
        assert_eq!(
            resolve_token("1abc").map_err(|e| e.category()),
            Err(ErrorCategory::InvalidToken)
        );
    }

    #[test]
    fn elementary_sizes() {
        let token = resolve_elementary("fixed128x18");
        assert_eq!(token.map(|t| (t.first_size, t.second_size)), Ok((128, 18)));
        assert_eq!(resolve_elementary("uint256").map(|t| t.first_size), Ok(256));
        assert!(resolve_elementary("Point").is_err());
        assert!(resolve_elementary("address payable").is_err());
    }

    #[test]
    fn literal_tokens() {
        assert_eq!(resolve_bool_literal("true"), Ok(TokenKind::TrueLiteral));
        assert!(resolve_bool_literal("1").is_err());
        assert_eq!(resolve_subdenomination("ether"), Ok(TokenKind::SubEther));
        assert!(resolve_subdenomination("wad").is_err());
    }
}
