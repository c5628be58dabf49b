/*!
# Rust Language Module

This Rust module classifies the lines of a snippet and parses them
into statements. Nothing here evaluates anything.

*/

pub type LineNumber = usize;

#[macro_use]
mod error;
mod lex;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{read_integer_prefix, read_number};
pub use parse::parse;
pub use parse::Parser;

pub mod ast;

#[cfg(test)]
mod tests;
