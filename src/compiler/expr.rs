use log::warn;

use crate::{
    ast::{
        expressions::{AssignmentExpr, BinaryExpr, CallExpr, Expr},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::scope::{ScopeChain, Symbol};

/// A lowered expression: its C text and the type it was inferred to have.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    pub code: String,
    pub expr_type: Type,
}

impl CompiledExpr {
    fn new(code: impl Into<String>, expr_type: Type) -> Self {
        CompiledExpr {
            code: code.into(),
            expr_type,
        }
    }
}

/// Lowers an expression to C, checking it against the given scope.
pub fn compile_expr(expression: &Expr, scope: &ScopeChain) -> Result<CompiledExpr, Error> {
    match expression {
        Expr::Binary(binary) => compile_binary(binary, scope),
        Expr::Symbol(name) => {
            let symbol = scope.lookup(name).ok_or_else(|| {
                Error::unlocated(ErrorImpl::UndefinedSymbol { name: name.clone() })
            })?;

            Ok(CompiledExpr::new(name.as_str(), symbol.get_type()))
        }
        Expr::Float(text) => Ok(CompiledExpr::new(text.as_str(), Type::F32)),
        Expr::Double(text) => Ok(CompiledExpr::new(text.as_str(), Type::F64)),
        Expr::Integer(text) => Ok(CompiledExpr::new(text.as_str(), Type::I32)),
        // Embedded quotes are not escaped.
        Expr::String(text) => Ok(CompiledExpr::new(format!("\"{}\"", text), Type::String)),
        Expr::Boolean(value) => Ok(CompiledExpr::new(value.to_string(), Type::Bool)),
        Expr::Call(call) => compile_call(call, scope),
        Expr::Assignment(assignment) => compile_assignment(assignment, scope),
        Expr::PassThrough(raw) => Ok(CompiledExpr::new(raw.as_str(), Type::Any)),
        Expr::Unrecognized(node) => {
            warn!("Unrecognized expression node: {}", node);
            Ok(CompiledExpr::new(format!("/* UNK: {} */", node), Type::Unknown))
        }
    }
}

fn compile_binary(binary: &BinaryExpr, scope: &ScopeChain) -> Result<CompiledExpr, Error> {
    let left = compile_expr(&binary.left, scope)?;
    let right = compile_expr(&binary.right, scope)?;

    if !left.expr_type.is_compatible_with(&right.expr_type) {
        return Err(Error::unlocated(ErrorImpl::TypeMismatch {
            context: format!("`{}` operands", binary.operator),
            expected: left.expr_type.to_string(),
            received: right.expr_type.to_string(),
        }));
    }

    let result_type = if binary.operator.is_comparison() {
        Type::Bool
    } else {
        left.expr_type.unify(right.expr_type)
    };

    let precedence = binary.operator.precedence();
    let left_code = parenthesize(&binary.left, left.code, |inner| inner < precedence);
    let right_code = parenthesize(&binary.right, right.code, |inner| inner <= precedence);

    Ok(CompiledExpr::new(
        format!("{} {} {}", left_code, binary.operator, right_code),
        result_type,
    ))
}

/// Wraps a lowered operand in parentheses when C would otherwise bind it
/// differently from the tree. Operators are left-associative.
fn parenthesize(operand: &Expr, code: String, needs_parens: impl Fn(u8) -> bool) -> String {
    match operand {
        Expr::Binary(inner) if needs_parens(inner.operator.precedence()) => format!("({})", code),
        Expr::Assignment(_) => format!("({})", code),
        _ => code,
    }
}

/// Arguments are lowered before the arity check, so an undefined name inside
/// an argument is reported ahead of a count mismatch. Argument types are not
/// compared with parameter types.
pub fn compile_call(call: &CallExpr, scope: &ScopeChain) -> Result<CompiledExpr, Error> {
    let signature = scope.lookup_function(&call.callee).ok_or_else(|| {
        Error::unlocated(ErrorImpl::UndefinedFunction {
            name: call.callee.clone(),
        })
    })?;

    let arguments = call
        .arguments
        .iter()
        .map(|argument| compile_expr(argument, scope))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(extra) = arguments.get(signature.parameters.len()) {
        return Err(Error::unlocated(ErrorImpl::ExtraArgument {
            function: call.callee.clone(),
            argument: extra.code.clone(),
        }));
    }

    if let Some(missing) = signature.parameters.get(arguments.len()) {
        return Err(Error::unlocated(ErrorImpl::MissingArgument {
            function: call.callee.clone(),
            parameter: missing.name.clone(),
        }));
    }

    let arguments = arguments
        .into_iter()
        .map(|argument| argument.code)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(CompiledExpr::new(
        format!("{}({})", call.callee, arguments),
        signature.return_type,
    ))
}

pub fn compile_assignment(
    assignment: &AssignmentExpr,
    scope: &ScopeChain,
) -> Result<CompiledExpr, Error> {
    let target_type = match scope.lookup(&assignment.assignee) {
        Some(Symbol::Variable { var_type }) => *var_type,
        _ => {
            return Err(Error::unlocated(ErrorImpl::UndefinedSymbol {
                name: assignment.assignee.clone(),
            }))
        }
    };

    let value = compile_expr(&assignment.value, scope)?;

    if !value.expr_type.is_compatible_with(&target_type) {
        return Err(Error::unlocated(ErrorImpl::TypeMismatch {
            context: format!("assignment to `{}`", assignment.assignee),
            expected: target_type.to_string(),
            received: value.expr_type.to_string(),
        }));
    }

    Ok(CompiledExpr::new(
        format!("{} = {}", assignment.assignee, value.code),
        target_type,
    ))
}
