//! Umbra front end.
//!
//! Re-exports the pipeline crates so the whole front end is reachable
//! from one place:
//!
//! - [`lexer`]: source text to tokens
//! - [`parser`]: tokens to a [`syntax::Program`]
//! - [`syntax`]: the tree and its [`syntax::Visitor`]
//! - [`printer`]: structural printing of the tree
//! - [`diagnostic`]: the shared error reporter and rendering

pub use umbra_common as common;
pub use umbra_diagnostic as diagnostic;
pub use umbra_lexer as lexer;
pub use umbra_parser as parser;
pub use umbra_printer as printer;
pub use umbra_syntax as syntax;

pub use umbra_parser::parse;
