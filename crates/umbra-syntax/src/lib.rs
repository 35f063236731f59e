//! AST and syntax definitions for Umbra.
//!
//! This crate defines the abstract syntax tree built by the parser and the
//! [`Visitor`] trait used to add operations over it. Every node owns its
//! children outright; the tree is never shared or mutated after parsing.

mod ast;
mod expr;
mod types;
pub mod visit;

pub use ast::*;
pub use expr::*;
pub use types::*;
pub use visit::{Node, Visitor};
