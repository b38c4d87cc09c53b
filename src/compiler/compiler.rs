//! Program-level entry points of the lowering engine.
//!
//! Statements are folded left to right with the scope chain threaded
//! through, so a declaration is visible to the siblings after it and to
//! nothing before it. Fragments that lower to no text, such as prototypes,
//! are dropped before joining.

use std::{rc::Rc, time::Instant};

use log::info;

use crate::{
    ast::statements::Stmt, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse,
};

use super::{scope::ScopeChain, stmt::compile_stmt};

/// Lowers a whole program, starting from a single empty root frame.
pub fn compile_program(statements: &[Stmt]) -> Result<String, Error> {
    compile_block(statements, &ScopeChain::root(), "")
}

/// Lowers a statement sequence at `indent`, starting from `scope`.
///
/// Bindings made inside the sequence are discarded once it is done; only
/// the joined text is returned.
pub fn compile_block(statements: &[Stmt], scope: &ScopeChain, indent: &str) -> Result<String, Error> {
    let mut scope = scope.clone();
    let mut fragments = Vec::with_capacity(statements.len());

    for statement in statements {
        let compiled = compile_stmt(statement, &scope, indent)?;
        if !compiled.code.is_empty() {
            fragments.push(compiled.code);
        }
        scope = compiled.scope;
    }

    Ok(fragments.join("\n"))
}

/// Tokenizes and parses surface syntax into a program.
pub fn parse_source(source: &str, file_name: &str) -> Result<Vec<Stmt>, Error> {
    let start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name.to_string()))?;
    info!("Parsed in {:?}", parse_start.elapsed());

    Ok(program)
}

/// Runs the whole pipeline on surface syntax: tokenize, parse, lower.
pub fn compile_source(source: &str, file_name: &str) -> Result<String, Error> {
    let program = parse_source(source, file_name)?;

    let compile_start = Instant::now();
    let compiled = compile_program(&program)?;
    info!("Compiled in {:?}", compile_start.elapsed());

    Ok(compiled)
}
