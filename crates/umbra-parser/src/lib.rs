//! Parser for Umbra.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into an abstract syntax tree.
//!
//! ## Error Recovery
//!
//! A malformed statement is reported and skipped up to the next line, so
//! one parse pass reports every broken statement and keeps the good ones.
//! The returned [`Program`] never contains partial nodes.

mod error;
mod parser;
mod recovery;

pub use error::{ParseFault, SyntaxError};
pub use parser::Parser;
pub use recovery::{DelimiterKind, DelimiterStack, SyncPoint};

use umbra_diagnostic::{Diagnostic, Reporter};
use umbra_lexer::{Lexer, Token};
use umbra_syntax::Program;

/// Parse source code into an AST.
///
/// Diagnostics from both the lexer and the parser are returned in the
/// order they were reported.
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let mut reporter = Reporter::new();
    let tokens = Lexer::new(source, &mut reporter).tokenize();
    let program = parse_tokens(tokens, &mut reporter);
    (program, reporter.into_diagnostics())
}

/// Parse an already scanned token sequence, reporting into `reporter`.
pub fn parse_tokens(tokens: Vec<Token>, reporter: &mut Reporter) -> Program {
    Parser::new(tokens, reporter).parse_program()
}
