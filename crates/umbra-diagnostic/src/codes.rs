//! Error codes for Umbra diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexical errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    MalformedNumber,

    // Syntax errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedIdentifier,
    ExpectedType,
    ExpectedExpression,
    MissingNewline,
    UnclosedDelimiter,
    NumberOutOfRange,
    NestingTooDeep,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::MalformedNumber => "E0003",

            // Syntax
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedIdentifier => "E0101",
            ErrorCode::ExpectedType => "E0102",
            ErrorCode::ExpectedExpression => "E0103",
            ErrorCode::MissingNewline => "E0104",
            ErrorCode::UnclosedDelimiter => "E0105",
            ErrorCode::NumberOutOfRange => "E0106",
            ErrorCode::NestingTooDeep => "E0107",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::MalformedNumber => "malformed number literal",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedIdentifier => "expected an identifier",
            ErrorCode::ExpectedType => "expected a type keyword",
            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::MissingNewline => "statement is not terminated by a newline",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::NumberOutOfRange => "number literal does not fit in 64 bits",
            ErrorCode::NestingTooDeep => "nesting exceeds the parser's depth limit",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::MalformedNumber => Some("add digits after the decimal point, e.g. `7.0`"),
            ErrorCode::ExpectedType => {
                Some("use one of `int`, `float`, `bool`, `char` or `string`")
            }
            ErrorCode::MissingNewline => Some("put each statement on its own line"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::NestingTooDeep => Some("split the construct into separate declarations"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
