//! Error recovery strategies for the parser.
//!
//! Recovery is panic mode at statement granularity: after a fault the
//! parser skips to the end of the current line and starts over.

use umbra_lexer::TokenKind;

/// Where skipping after a fault is allowed to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPoint {
    /// Between top-level statements. Stops after a newline or at the end.
    TopLevel,
    /// Between statements of a function body. Also stops in front of the
    /// `}` that closes the body.
    Block,
}

/// Delimiter kinds for recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Paren,   // )
    Bracket, // ]
    Brace,   // }
}

/// Delimiters opened while skipping.
///
/// A newline inside a brace opened during the skip does not end it, so a
/// broken function header discards its whole body rather than leaving the
/// body lines to be parsed as top-level statements.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    stack: Vec<DelimiterKind>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if we're inside a specific delimiter.
    pub fn inside(&self, kind: DelimiterKind) -> bool {
        self.stack.contains(&kind)
    }

    /// Close `kind`, dropping anything opened after it. A closer with no
    /// matching opener is ignored.
    fn close(&mut self, kind: DelimiterKind) {
        if let Some(idx) = self.stack.iter().rposition(|&k| k == kind) {
            self.stack.truncate(idx);
        }
    }

    /// Update stack based on current token.
    pub fn update(&mut self, token: TokenKind) {
        match token {
            TokenKind::LParen => self.stack.push(DelimiterKind::Paren),
            TokenKind::LBracket => self.stack.push(DelimiterKind::Bracket),
            TokenKind::LBrace => self.stack.push(DelimiterKind::Brace),
            TokenKind::RParen => self.close(DelimiterKind::Paren),
            TokenKind::RBracket => self.close(DelimiterKind::Bracket),
            TokenKind::RBrace => self.close(DelimiterKind::Brace),
            _ => {}
        }
    }
}
