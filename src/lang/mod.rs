/*!
# Rust Language Module

This Rust module provides lexical analysis of the Baya language
and the error type shared with the machine.

*/

#[macro_use]
mod error;
mod lex;
mod number;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use lex::Token;
pub use number::{is_number_like, parse_number};

pub mod token;

/// Source line, counted from 1.
pub type LineNumber = Option<usize>;
/// Character columns of a token within its line.
pub type Column = std::ops::Range<usize>;

/// Longest token the assembler accepts.
pub const MAX_TOKEN_LEN: usize = 32;

#[cfg(test)]
mod tests;
