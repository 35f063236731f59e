//! The `umbra tokens` command.

use super::{emit_all, read_source};
use crate::{CliError, Context};
use umbra_lexer::{Token, tokenize};

/// One token per line: `line:column kind lexeme`.
pub fn format_token(token: &Token) -> String {
    format!(
        "{} {:?} {}",
        token.position,
        token.kind,
        token.lexeme.escape_debug()
    )
}

pub fn run(file: &str, ctx: &Context) -> Result<(), CliError> {
    let source = read_source(file)?;
    let (tokens, diagnostics) = tokenize(&source);

    for token in &tokens {
        println!("{}", format_token(token));
    }
    emit_all(&source, file, &diagnostics, ctx)
}
