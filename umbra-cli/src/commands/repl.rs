//! The `umbra repl` command.

use super::tokens::format_token;
use crate::{CliError, Context};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use umbra_diagnostic::{Reporter, emit};
use umbra_lexer::Lexer;
use umbra_parser::parse_tokens;
use umbra_printer::print_program;

pub fn run(ctx: &Context) -> Result<(), CliError> {
    println!("Umbra REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new()?;
    let mut show_tokens = false;

    loop {
        match rl.readline("umbra> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if line.starts_with(':') {
                    match line {
                        ":quit" | ":q" => break,
                        ":help" | ":h" => {
                            println!("Commands:");
                            println!("  :help, :h    Show this help");
                            println!("  :quit, :q    Exit the REPL");
                            println!("  :tokens      Toggle token display");
                        }
                        ":tokens" => {
                            show_tokens = !show_tokens;
                            println!("token display {}", if show_tokens { "on" } else { "off" });
                        }
                        _ => println!("Unknown command: {}", line),
                    }
                    continue;
                }

                let mut reporter = Reporter::new();
                let tokens = Lexer::new(line, &mut reporter).tokenize();
                if show_tokens {
                    for token in &tokens {
                        println!("{}", format_token(token));
                    }
                }
                let program = parse_tokens(tokens, &mut reporter);

                for diag in &reporter {
                    emit(line, "<repl>", diag, &ctx.render)?;
                }
                if !program.statements.is_empty() {
                    print!("{}", print_program(&program));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}
