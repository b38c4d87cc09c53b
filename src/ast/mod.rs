/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Expression nodes and binary operators
/// - statements: Statement nodes and function declarations
/// - types: The closed set of semantic types
/// - json: Reading and writing the tagged JSON form of the tree
pub mod expressions;
pub mod json;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
