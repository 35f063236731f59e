//! Token definitions for Umbra.

use std::fmt;
use umbra_common::{Position, Span};

/// A token with its kind, exact source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text the token was scanned from. Empty for `Eof`.
    pub lexeme: String,
    pub span: Span,
    /// Line and column of the first character.
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            position,
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Eof,
    Newline,

    // Type keywords
    Int,
    Float,
    Bool,
    Char,
    String,

    // Control keywords
    If,
    Else,
    Repeat,
    Times,

    // Function keywords
    Func,
    Return,

    // Memory keywords
    New,
    Delete,

    // Logical operators
    And, // and
    Or,  // or

    // Comparison operators
    Equal,          // equal
    Different,      // different
    LessThan,       // less_than
    GreaterThan,    // greater_than
    LessOrEqual,    // less_or_equal
    GreaterOrEqual, // greater_or_equal

    // Operators
    Assign, // =
    Minus,  // -
    Plus,   // +
    Star,   // *
    Slash,  // / (reserved, never scanned)
    Arrow,  // ->

    // Identifiers and literals
    Ident,
    Number,
    StringLit,

    // Delimiters
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]
    LParen,   // (
    RParen,   // )

    // Punctuation
    Comma, // ,
    Dot,   // .
}

impl TokenKind {
    /// Look up a word in the keyword table.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "int" => Some(TokenKind::Int),
            "float" => Some(TokenKind::Float),
            "bool" => Some(TokenKind::Bool),
            "char" => Some(TokenKind::Char),
            "string" => Some(TokenKind::String),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "repeat" => Some(TokenKind::Repeat),
            "times" => Some(TokenKind::Times),
            "func" => Some(TokenKind::Func),
            "return" => Some(TokenKind::Return),
            "new" => Some(TokenKind::New),
            "delete" => Some(TokenKind::Delete),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "equal" => Some(TokenKind::Equal),
            "different" => Some(TokenKind::Different),
            "less_than" => Some(TokenKind::LessThan),
            "greater_than" => Some(TokenKind::GreaterThan),
            "less_or_equal" => Some(TokenKind::LessOrEqual),
            "greater_or_equal" => Some(TokenKind::GreaterOrEqual),
            _ => None,
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.is_type_keyword()
            || matches!(
                self,
                TokenKind::If
                    | TokenKind::Else
                    | TokenKind::Repeat
                    | TokenKind::Times
                    | TokenKind::Func
                    | TokenKind::Return
                    | TokenKind::New
                    | TokenKind::Delete
                    | TokenKind::And
                    | TokenKind::Or
                    | TokenKind::Equal
                    | TokenKind::Different
                    | TokenKind::LessThan
                    | TokenKind::GreaterThan
                    | TokenKind::LessOrEqual
                    | TokenKind::GreaterOrEqual
            )
    }

    /// Returns true for the keywords that name a type.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Bool | TokenKind::Char | TokenKind::String
        )
    }

    /// Returns true for the keyword comparison operators.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::Different
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LessOrEqual
                | TokenKind::GreaterOrEqual
        )
    }

    /// The fixed spelling of this kind, or a category name for tokens
    /// whose text varies.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "newline",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Bool => "bool",
            TokenKind::Char => "char",
            TokenKind::String => "string",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Repeat => "repeat",
            TokenKind::Times => "times",
            TokenKind::Func => "func",
            TokenKind::Return => "return",
            TokenKind::New => "new",
            TokenKind::Delete => "delete",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Equal => "equal",
            TokenKind::Different => "different",
            TokenKind::LessThan => "less_than",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::LessOrEqual => "less_or_equal",
            TokenKind::GreaterOrEqual => "greater_or_equal",
            TokenKind::Assign => "=",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Arrow => "->",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLit => "string literal",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
        }
    }

    /// Whether the kind stands for a category of texts rather than one
    /// fixed spelling.
    fn is_category(&self) -> bool {
        matches!(
            self,
            TokenKind::Eof
                | TokenKind::Newline
                | TokenKind::Ident
                | TokenKind::Number
                | TokenKind::StringLit
        )
    }
}

/// Formats the kind the way diagnostics mention it: fixed spellings in
/// backticks, categories by name.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_category() {
            f.write_str(self.as_str())
        } else {
            write!(f, "`{}`", self.as_str())
        }
    }
}
