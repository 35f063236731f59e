//! Lexical analysis for Umbra.
//! Umbra 词法分析模块。
//!
//! This crate provides the lexer that converts source code into tokens.
//! 本 crate 提供词法分析器，将源代码转换为 token 序列。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use umbra_diagnostic::{Diagnostic, Reporter};

/// Tokenize source code with a fresh reporter.
/// 使用新的报告器对源代码进行词法分析。
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut reporter = Reporter::new();
    let tokens = Lexer::new(source, &mut reporter).tokenize();
    (tokens, reporter.into_diagnostics())
}
