//! The Umbra lexer.
//! Umbra 词法分析器。

use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;
use umbra_common::{Position, Span};
use umbra_diagnostic::{Diagnostic, ErrorCode, Label, Reporter};

/// Where a token or fault begins.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    position: Position,
}

/// A saved cursor, used to rewind after an unterminated string.
#[derive(Clone)]
struct Checkpoint<'src> {
    chars: Peekable<CharIndices<'src>>,
    offset: usize,
    position: Position,
}

/// The Umbra lexer.
/// Umbra 词法分析器。
///
/// Converts source code into a sequence of tokens in a single forward pass.
/// Lexical faults go to the shared [`Reporter`]; scanning never stops early.
/// 单次前向扫描将源代码转换为 token 序列。词法错误写入共享的 [`Reporter`]，
/// 扫描不会提前终止。
pub struct Lexer<'src, 'r> {
    source: &'src str,
    /// Character iterator with byte offsets
    chars: Peekable<CharIndices<'src>>,
    /// Byte offset of the next character
    offset: usize,
    /// Line and column of the next character
    position: Position,
    /// Set after a newline token so that a run of blank lines yields one token
    after_newline: bool,
    reporter: &'r mut Reporter,
}

impl<'src, 'r> Lexer<'src, 'r> {
    /// Create a new lexer for the given source code.
    /// 为给定源代码创建新的词法分析器。
    pub fn new(source: &'src str, reporter: &'r mut Reporter) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            offset: 0,
            position: Position::START,
            after_newline: false,
            reporter,
        }
    }

    /// Tokenize the entire source. The result always ends with `Eof`.
    /// 对整个源代码进行词法分析，结果总以 `Eof` 结尾。
    #[tracing::instrument(skip_all, fields(source_len = self.source.len()))]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tracing::trace!(kind = ?token.kind, at = %token.position, "token");
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Scan until a token is produced. Whitespace, repeated newlines and
    /// malformed spans are consumed without yielding anything.
    fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.mark();
            let Some(ch) = self.advance() else {
                return Token::new(
                    TokenKind::Eof,
                    "",
                    Span::from_usize(self.offset, self.offset),
                    self.position,
                );
            };

            if ch == '\n' {
                if self.after_newline {
                    continue;
                }
                self.after_newline = true;
                return self.make_token(TokenKind::Newline, start);
            }

            let kind = match ch {
                '=' => TokenKind::Assign,
                '+' => TokenKind::Plus,
                '*' => TokenKind::Star,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,

                // Minus or arrow
                '-' => {
                    if self.peek_char() == Some('>') {
                        self.advance();
                        TokenKind::Arrow
                    } else {
                        TokenKind::Minus
                    }
                }

                '"' => match self.string_literal(start) {
                    Some(kind) => kind,
                    None => continue,
                },

                '0'..='9' => self.number(),

                'a'..='z' | 'A'..='Z' | '_' => self.identifier(start),

                _ => {
                    self.error_unexpected_char(ch, start);
                    continue;
                }
            };

            // Skipped characters leave the flag alone, so a line holding only
            // them stays blank
            self.after_newline = false;
            return self.make_token(kind, start);
        }
    }

    fn make_token(&self, kind: TokenKind, start: Mark) -> Token {
        Token::new(
            kind,
            &self.source[start.offset..self.offset],
            Span::from_usize(start.offset, self.offset),
            start.position,
        )
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            position: self.position,
        }
    }

    fn checkpoint(&self) -> Checkpoint<'src> {
        Checkpoint {
            chars: self.chars.clone(),
            offset: self.offset,
            position: self.position,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'src>) {
        self.chars = checkpoint.chars;
        self.offset = checkpoint.offset;
        self.position = checkpoint.position;
    }

    /// Advance to the next character, keeping line and column in step.
    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.offset = pos + ch.len_utf8();
        self.position = if ch == '\n' {
            self.position.newline()
        } else {
            self.position.advance()
        };
        Some(ch)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    /// Peek at the nth character ahead; `peek_nth(0)` is `peek_char`.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Skip spaces, tabs and carriage returns. Newlines are significant.
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r') = self.peek_char() {
            self.advance();
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// An unterminated literal yields no token. The rest of its opening line
    /// is discarded and scanning resumes at the following newline.
    fn string_literal(&mut self, start: Mark) -> Option<TokenKind> {
        let after_quote = self.checkpoint();

        loop {
            match self.advance() {
                Some('"') => return Some(TokenKind::StringLit),
                Some(_) => {}
                None => break,
            }
        }

        let span = Span::from_usize(start.offset, start.offset + 1);
        self.reporter.report(
            Diagnostic::lexical(
                span,
                start.position,
                format!("unterminated string starting at {}", start.position),
            )
            .with_code(ErrorCode::UnterminatedString)
            .with_label(Label::new(span, "string starts here")),
        );

        self.restore(after_quote);
        while !matches!(self.peek_char(), Some('\n') | None) {
            self.advance();
        }
        tracing::debug!(line = start.position.line, "discarded rest of line after unterminated string");
        None
    }

    /// Scan a number literal; the first digit is already consumed.
    fn number(&mut self) -> TokenKind {
        self.skip_digits();

        if self.peek_char() == Some('.') {
            if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
                self.advance(); // consume .
                self.skip_digits();
            } else {
                let dot = self.mark();
                self.advance();
                let span = Span::from_usize(dot.offset, self.offset);
                self.reporter.report(
                    Diagnostic::lexical(span, dot.position, "malformed number: expected digits after decimal point")
                        .with_code(ErrorCode::MalformedNumber)
                        .with_label(Label::new(span, "no digits follow this point")),
                );
            }
        }

        TokenKind::Number
    }

    fn skip_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scan an identifier or keyword.
    fn identifier(&mut self, start: Mark) -> TokenKind {
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.source[start.offset..self.offset];
        TokenKind::keyword_from_str(text).unwrap_or(TokenKind::Ident)
    }

    /// Report an unexpected character error.
    fn error_unexpected_char(&mut self, ch: char, start: Mark) {
        let span = Span::from_usize(start.offset, self.offset);
        self.reporter.report(
            Diagnostic::lexical(span, start.position, format!("unexpected character: {:?}", ch))
                .with_code(ErrorCode::UnexpectedCharacter)
                .with_label(Label::new(span, "unexpected character here")),
        );
    }
}
