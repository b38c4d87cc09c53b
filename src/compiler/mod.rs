//! The lowering engine.
//!
//! This module turns the AST into C source text. It handles:
//!
//! - Scope chains for resolving variables and function signatures
//! - Type propagation and checking through expressions
//! - Forward declarations and self-recursive functions
//! - Indented emission that mirrors the block structure of the tree

pub mod code;
pub mod compiler;
pub mod expr;
pub mod scope;
pub mod stmt;
pub mod types;
