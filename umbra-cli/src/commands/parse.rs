//! The `umbra parse` command.

use super::{emit_all, read_source};
use crate::{CliError, Context};
use umbra_parser::parse;
use umbra_printer::{PrintConfig, print_program_with_config};

pub fn run(file: &str, indent: usize, tabs: bool, ctx: &Context) -> Result<(), CliError> {
    let source = read_source(file)?;
    let (program, diagnostics) = parse(&source);
    emit_all(&source, file, &diagnostics, ctx)?;

    let config = PrintConfig::new().indent_width(indent).use_tabs(tabs);
    print!("{}", print_program_with_config(&program, &config));
    Ok(())
}
