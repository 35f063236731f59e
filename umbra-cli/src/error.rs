//! Errors surfaced by CLI commands.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} error(s) found")]
    Diagnostics(usize),

    #[error("line editor failed: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}
