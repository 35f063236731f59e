//! Typed parse faults.

use thiserror::Error;
use umbra_common::{Position, Span};
use umbra_diagnostic::{Diagnostic, ErrorCode, Label};
use umbra_lexer::{Token, TokenKind};

/// Why a statement could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("unexpected token {0} at the start of a statement")]
    UnexpectedToken(TokenKind),

    #[error("expected {what}, found {found}")]
    ExpectedIdent { what: &'static str, found: TokenKind },

    #[error("expected {what}, found {found}")]
    ExpectedType { what: &'static str, found: TokenKind },

    #[error("expected {expected} {context}, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        context: &'static str,
        found: TokenKind,
    },

    #[error("expected newline after {after}, found {found}")]
    MissingNewline { after: &'static str, found: TokenKind },

    #[error("expected expression, found {0}")]
    ExpectedExpression(TokenKind),

    #[error("number literal out of range: {0}")]
    NumberOutOfRange(String),

    #[error("{what} nested more than {limit} levels deep")]
    NestingTooDeep { what: &'static str, limit: usize },
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::UnexpectedToken(_) => ErrorCode::UnexpectedToken,
            SyntaxError::ExpectedIdent { .. } => ErrorCode::ExpectedIdentifier,
            SyntaxError::ExpectedType { .. } => ErrorCode::ExpectedType,
            SyntaxError::ExpectedToken { expected, .. } => match expected {
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                    ErrorCode::UnclosedDelimiter
                }
                _ => ErrorCode::UnexpectedToken,
            },
            SyntaxError::MissingNewline { .. } => ErrorCode::MissingNewline,
            SyntaxError::ExpectedExpression(_) => ErrorCode::ExpectedExpression,
            SyntaxError::NumberOutOfRange(_) => ErrorCode::NumberOutOfRange,
            SyntaxError::NestingTooDeep { .. } => ErrorCode::NestingTooDeep,
        }
    }

    fn label(&self) -> String {
        match self {
            SyntaxError::UnexpectedToken(_) => "a statement cannot start here".to_string(),
            SyntaxError::ExpectedIdent { what, .. } | SyntaxError::ExpectedType { what, .. } => {
                format!("expected {what} here")
            }
            SyntaxError::ExpectedToken { expected, .. } => format!("expected {expected} here"),
            SyntaxError::MissingNewline { .. } => "statement continues here".to_string(),
            SyntaxError::ExpectedExpression(_) => "expected expression here".to_string(),
            SyntaxError::NumberOutOfRange(_) => "does not fit in a 64-bit integer".to_string(),
            SyntaxError::NestingTooDeep { .. } => "nesting limit reached here".to_string(),
        }
    }
}

/// A syntax error anchored at the token where it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFault {
    pub error: SyntaxError,
    pub span: Span,
    pub position: Position,
}

impl ParseFault {
    pub fn new(error: SyntaxError, at: &Token) -> Self {
        Self {
            error,
            span: at.span,
            position: at.position,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let label = Label::new(self.span, self.error.label());
        Diagnostic::syntax(self.span, self.position, self.error.to_string())
            .with_code(self.error.code())
            .with_label(label)
    }
}
