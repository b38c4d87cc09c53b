//! Lexical analysis for the surface language.
//!
//! Converts source text into tokens using an ordered table of anchored
//! regex patterns. Keywords are resolved through `RESERVED_LOOKUP`; every
//! token records the byte span it came from for error reporting.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
