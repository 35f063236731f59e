//! Common data structures for the Umbra front end.
//!
//! This crate provides the source-location types used by every stage:
//! - `Span`: byte range of a construct in the source text
//! - `Position`: 1-based line and column of a character

mod span;

pub use span::{BytePos, Position, Span};
