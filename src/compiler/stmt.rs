use log::{debug, warn};

use crate::{
    ast::{
        statements::{ForStmt, FunctionDecl, IfStmt, Stmt, VarDeclStmt},
        types::Type,
    },
    errors::errors::Error,
};

use super::{
    code::{nested, Code},
    compiler::compile_block,
    expr::{compile_assignment, compile_call, compile_expr},
    scope::{Frame, ScopeChain, Symbol},
    types::map_type,
};

/// A lowered statement and the scope later siblings should see.
#[derive(Debug, Clone)]
pub struct CompiledStmt {
    pub code: String,
    pub scope: ScopeChain,
}

pub fn compile_stmt(
    statement: &Stmt,
    scope: &ScopeChain,
    indent: &str,
) -> Result<CompiledStmt, Error> {
    match statement {
        Stmt::Function(function) => compile_function(function, scope, indent),
        Stmt::If(if_stmt) => compile_if(if_stmt, scope, indent),
        Stmt::For(for_stmt) => compile_for(for_stmt, scope, indent),
        Stmt::Return(value) => {
            let mut code = Code::new();
            match value {
                Some(value) => {
                    let value = compile_expr(value, scope)?;
                    code.indented(indent, "return ").push(value.code).push(";");
                }
                None => {
                    code.indented(indent, "return;");
                }
            }

            Ok(unchanged(code, scope))
        }
        Stmt::VarDecl(var_decl) => compile_var_decl(var_decl, scope, indent),
        Stmt::Call(call) => {
            // The call's result is discarded.
            let call = compile_call(call, scope)?;
            let mut code = Code::new();
            code.indented(indent, call.code).push(";");

            Ok(unchanged(code, scope))
        }
        Stmt::Assignment(assignment) => {
            let assignment = compile_assignment(assignment, scope)?;
            let mut code = Code::new();
            code.indented(indent, assignment.code).push(";");

            Ok(unchanged(code, scope))
        }
        Stmt::PassThrough(raw) => {
            let mut code = Code::new();
            code.indented(indent, raw).newline();

            Ok(unchanged(code, scope))
        }
        Stmt::Unrecognized(node) => {
            warn!("Unrecognized statement node: {}", node);
            let mut code = Code::new();
            code.indented(indent, "// UNK: ").push(node);

            Ok(unchanged(code, scope))
        }
    }
}

fn unchanged(code: Code, scope: &ScopeChain) -> CompiledStmt {
    CompiledStmt {
        code: code.finish(),
        scope: scope.clone(),
    }
}

fn compile_function(
    function: &FunctionDecl,
    scope: &ScopeChain,
    indent: &str,
) -> Result<CompiledStmt, Error> {
    let signature = Symbol::function(function.return_type, function.parameters.clone());
    let outer_scope = scope.bind_in_head(function.name.clone(), signature.clone());

    let body = match &function.body {
        Some(body) => body,
        None => {
            debug!("Registered prototype for `{}`", function.name);
            return Ok(CompiledStmt {
                code: String::new(),
                scope: outer_scope,
            });
        }
    };

    // Parameters are bound after the function itself so a parameter may
    // shadow the function's own name.
    let mut frame = Frame::new();
    frame.insert(function.name.clone(), signature);
    for parameter in function.parameters.iter() {
        frame.insert(parameter.name.clone(), Symbol::variable(parameter.param_type));
    }
    let inner_scope = scope.push_frame(frame);

    let parameters = if function.parameters.is_empty() {
        String::from("void")
    } else {
        function
            .parameters
            .iter()
            .map(|parameter| format!("{} {}", map_type(parameter.param_type), parameter.name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let body = compile_block(body, &inner_scope, &nested(indent))?;

    let mut code = Code::new();
    code.indented(indent, map_type(function.return_type))
        .push(" ")
        .push(&function.name)
        .push("(")
        .push(parameters)
        .push(")")
        .block(indent, &body)
        .newline();

    Ok(CompiledStmt {
        code: code.finish(),
        scope: outer_scope,
    })
}

fn compile_if(if_stmt: &IfStmt, scope: &ScopeChain, indent: &str) -> Result<CompiledStmt, Error> {
    let condition = compile_expr(&if_stmt.condition, scope)?;
    if !condition.expr_type.is_compatible_with(&Type::Bool) {
        debug!(
            "Condition `{}` has type {}, not Bool",
            condition.code, condition.expr_type
        );
    }

    let body_indent = nested(indent);
    let then_body = compile_block(&if_stmt.then_body, &scope.push_empty_frame(), &body_indent)?;

    let mut code = Code::new();
    code.indented(indent, "if(")
        .push(condition.code)
        .push(")")
        .block(indent, &then_body);

    if let Some(else_body) = &if_stmt.else_body {
        let else_body = compile_block(else_body, &scope.push_empty_frame(), &body_indent)?;
        code.push(" else").block(indent, &else_body);
    }

    Ok(unchanged(code, scope))
}

fn compile_for(for_stmt: &ForStmt, scope: &ScopeChain, indent: &str) -> Result<CompiledStmt, Error> {
    let initial = compile_stmt(&for_stmt.initial, &scope.push_empty_frame(), "")?;
    let loop_scope = initial.scope;

    let condition = compile_expr(&for_stmt.condition, &loop_scope)?;
    let step = compile_expr(&for_stmt.step, &loop_scope)?;
    let body = compile_block(&for_stmt.body, &loop_scope.push_empty_frame(), &nested(indent))?;

    let mut code = Code::new();
    code.indented(indent, "for(")
        .push(initial.code)
        .push(" ")
        .push(condition.code)
        .push("; ")
        .push(step.code)
        .push(")")
        .block(indent, &body);

    // Loop-local bindings end with the loop.
    Ok(unchanged(code, scope))
}

fn compile_var_decl(
    var_decl: &VarDeclStmt,
    scope: &ScopeChain,
    indent: &str,
) -> Result<CompiledStmt, Error> {
    let value = compile_expr(&var_decl.assigned_value, scope)?;

    let mut code = Code::new();
    code.indented(indent, map_type(value.expr_type))
        .push(" ")
        .push(&var_decl.identifier)
        .push(" = ")
        .push(value.code)
        .push(";");

    Ok(CompiledStmt {
        code: code.finish(),
        scope: scope.bind_in_head(
            var_decl.identifier.clone(),
            Symbol::variable(value.expr_type),
        ),
    })
}
