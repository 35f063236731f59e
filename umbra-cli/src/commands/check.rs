//! The `umbra check` command.
//! `umbra check` 命令。

use super::{emit_all, read_source};
use crate::{CliError, Context, output};
use umbra_diagnostic::DiagnosticKind;
use umbra_parser::parse;

/// Check a file for lexical and syntax errors.
/// 检查文件的词法与语法错误。
pub fn run(file: &str, ctx: &Context) -> Result<(), CliError> {
    let source = read_source(file)?;
    let (program, diagnostics) = parse(&source);

    emit_all(&source, file, &diagnostics, ctx)?;

    if ctx.verbose {
        let lexical = diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Lexical)
            .count();
        output::info(
            &format!(
                "Parsed {} statement(s); {} lexical and {} syntax error(s)",
                program.statements.len(),
                lexical,
                diagnostics.len() - lexical
            ),
            ctx.color(),
        );
    }

    if !diagnostics.is_empty() {
        return Err(CliError::Diagnostics(diagnostics.len()));
    }

    output::success("OK - No errors found", ctx.color());
    Ok(())
}
