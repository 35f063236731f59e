//! Structural printer for Umbra syntax trees.
//! Umbra 语法树的结构化打印器。
//!
//! Printing is one [`Visitor`](umbra_syntax::Visitor) over the tree; it
//! reads the nodes and produces text, nothing else.

mod config;
pub mod printer;
mod tree;

pub use config::PrintConfig;
pub use tree::TreePrinter;

use umbra_syntax::{Node, Program};

/// Print a program with the default configuration.
/// 使用默认配置打印程序。
pub fn print_program(program: &Program) -> String {
    print_program_with_config(program, &PrintConfig::default())
}

/// Print a program with a custom configuration.
/// 使用自定义配置打印程序。
pub fn print_program_with_config(program: &Program, config: &PrintConfig) -> String {
    let mut printer = TreePrinter::new(config.clone());
    program.accept(&mut printer);
    printer.finish()
}
