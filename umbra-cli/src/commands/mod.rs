//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod repl;
pub mod tokens;

use crate::{CliError, Context};
use std::fs;
use umbra_diagnostic::{Diagnostic, emit};

fn read_source(file: &str) -> Result<String, CliError> {
    let source = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_string(),
        source,
    })?;
    tracing::debug!(file, bytes = source.len(), "read source");
    Ok(source)
}

/// Render every diagnostic to stderr.
fn emit_all(
    source: &str,
    file: &str,
    diagnostics: &[Diagnostic],
    ctx: &Context,
) -> Result<(), CliError> {
    for diag in diagnostics {
        emit(source, file, diag, &ctx.render)?;
    }
    Ok(())
}
