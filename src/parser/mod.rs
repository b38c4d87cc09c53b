//! Parser building the statement tree from tokens.
//!
//! Expressions go through a Pratt parser: NUD (null denotation) handlers
//! start an expression, LED (left denotation) handlers extend it, and
//! binding powers decide precedence. Statements are dispatched on their
//! leading token; a leading expression must be a call or an assignment.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
