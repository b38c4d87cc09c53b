//! JSON form of the AST.
//!
//! Every node is an object tagged by the key that is present, e.g.
//! `{"plus": [lhs, rhs]}`, `{"id": "x"}` or
//! `{"function": {"name": "main", "parameters": [], "type": "I32", "body": [...]}}`.
//! Objects that match no known shape are kept as `Unrecognized` nodes so the
//! lowering engine can report them inline instead of failing.

use serde_json::{json, Map, Value};

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    expressions::{AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr},
    statements::{ForStmt, FunctionDecl, IfStmt, Parameter, Stmt, VarDeclStmt},
    types::Type,
};

/// Parses a JSON document holding an array of statements.
pub fn program_from_str(source: &str) -> Result<Vec<Stmt>, Error> {
    let value: Value = serde_json::from_str(source).map_err(|error| {
        Error::unlocated(ErrorImpl::InvalidAst {
            message: error.to_string(),
        })
    })?;

    program_from_json(&value)
}

pub fn program_from_json(value: &Value) -> Result<Vec<Stmt>, Error> {
    match value {
        Value::Array(statements) => Ok(statements.iter().map(stmt_from_json).collect()),
        other => Err(Error::unlocated(ErrorImpl::InvalidAst {
            message: format!("expected an array of statements, found {}", kind_of(other)),
        })),
    }
}

pub fn stmt_from_json(value: &Value) -> Stmt {
    read_stmt(value).unwrap_or_else(|| Stmt::Unrecognized(value.clone()))
}

pub fn expr_from_json(value: &Value) -> Expr {
    read_expr(value).unwrap_or_else(|| Expr::Unrecognized(value.clone()))
}

fn read_stmt(value: &Value) -> Option<Stmt> {
    let object = value.as_object()?;

    if let Some(function) = object.get("function") {
        let function = function.as_object()?;
        let parameters = function
            .get("parameters")
            .and_then(Value::as_array)
            .map(|parameters| parameters.iter().map(read_parameter).collect::<Option<Vec<_>>>())
            .unwrap_or(Some(vec![]))?;

        Some(Stmt::Function(FunctionDecl {
            name: function.get("name")?.as_str()?.to_string(),
            parameters,
            return_type: read_type(function.get("type")),
            body: match function.get("body") {
                None | Some(Value::Null) => None,
                Some(body) => Some(read_block(body)?),
            },
        }))
    } else if let Some(if_stmt) = object.get("if") {
        let if_stmt = if_stmt.as_object()?;
        Some(Stmt::If(IfStmt {
            condition: expr_from_json(if_stmt.get("condition")?),
            then_body: read_block(if_stmt.get("body")?)?,
            else_body: match if_stmt.get("elseBody") {
                None | Some(Value::Null) => None,
                Some(body) => Some(read_block(body)?),
            },
        }))
    } else if let Some(for_stmt) = object.get("for") {
        let for_stmt = for_stmt.as_object()?;
        Some(Stmt::For(ForStmt {
            initial: Box::new(stmt_from_json(for_stmt.get("initialStatement")?)),
            condition: expr_from_json(for_stmt.get("condition")?),
            step: expr_from_json(for_stmt.get("recurringExpression")?),
            body: read_block(for_stmt.get("body")?)?,
        }))
    } else if let Some(value) = object.get("return") {
        match value {
            Value::Null => Some(Stmt::Return(None)),
            value => Some(Stmt::Return(Some(expr_from_json(value)))),
        }
    } else if let Some(var) = object.get("var").or_else(|| object.get("let")) {
        let var = var.as_object()?;
        Some(Stmt::VarDecl(VarDeclStmt {
            identifier: var.get("name")?.as_str()?.to_string(),
            assigned_value: expr_from_json(var.get("value")?),
        }))
    } else if let Some(call) = object.get("call") {
        Some(Stmt::Call(read_call(call)?))
    } else if let Some(assign) = object.get("assign") {
        Some(Stmt::Assignment(read_assignment(assign)?))
    } else if let Some(raw) = object.get("passThrough") {
        Some(Stmt::PassThrough(raw.as_str()?.to_string()))
    } else {
        None
    }
}

fn read_expr(value: &Value) -> Option<Expr> {
    let object = value.as_object()?;

    for operator in BinaryOperator::ALL {
        if let Some(operands) = object.get(operator.tag()) {
            let operands = operands.as_array()?;
            if operands.len() != 2 {
                return None;
            }
            return Some(Expr::Binary(BinaryExpr {
                operator,
                left: Box::new(expr_from_json(&operands[0])),
                right: Box::new(expr_from_json(&operands[1])),
            }));
        }
    }

    if let Some(id) = object.get("id") {
        Some(Expr::Symbol(id.as_str()?.to_string()))
    } else if let Some(value) = object.get("float") {
        Some(Expr::Float(literal_text(value)?))
    } else if let Some(value) = object.get("double") {
        Some(Expr::Double(literal_text(value)?))
    } else if let Some(value) = object.get("integer") {
        Some(Expr::Integer(literal_text(value)?))
    } else if let Some(value) = object.get("string") {
        Some(Expr::String(value.as_str()?.to_string()))
    } else if let Some(value) = object.get("boolean") {
        match value {
            Value::Bool(value) => Some(Expr::Boolean(*value)),
            Value::String(text) if text == "true" => Some(Expr::Boolean(true)),
            Value::String(text) if text == "false" => Some(Expr::Boolean(false)),
            _ => None,
        }
    } else if let Some(call) = object.get("call") {
        Some(Expr::Call(read_call(call)?))
    } else if let Some(assign) = object.get("assign") {
        Some(Expr::Assignment(read_assignment(assign)?))
    } else if let Some(raw) = object.get("passThrough") {
        Some(Expr::PassThrough(raw.as_str()?.to_string()))
    } else {
        None
    }
}

fn read_block(value: &Value) -> Option<Vec<Stmt>> {
    Some(value.as_array()?.iter().map(stmt_from_json).collect())
}

fn read_parameter(value: &Value) -> Option<Parameter> {
    let parameter = value.as_object()?;
    Some(Parameter {
        name: parameter.get("name")?.as_str()?.to_string(),
        param_type: read_type(parameter.get("type")),
    })
}

fn read_call(value: &Value) -> Option<CallExpr> {
    let call = value.as_object()?;
    Some(CallExpr {
        callee: call.get("id")?.as_str()?.to_string(),
        arguments: match call.get("args") {
            None | Some(Value::Null) => vec![],
            Some(args) => args.as_array()?.iter().map(expr_from_json).collect(),
        },
    })
}

fn read_assignment(value: &Value) -> Option<AssignmentExpr> {
    let assign = value.as_object()?;
    Some(AssignmentExpr {
        assignee: assign.get("name")?.as_str()?.to_string(),
        value: Box::new(expr_from_json(assign.get("value")?)),
    })
}

// Missing or unreadable annotations still lower, with a placeholder type.
fn read_type(value: Option<&Value>) -> Type {
    value
        .and_then(Value::as_str)
        .and_then(Type::from_name)
        .unwrap_or(Type::Unknown)
}

fn literal_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn program_to_json(program: &[Stmt]) -> Value {
    Value::Array(program.iter().map(stmt_to_json).collect())
}

pub fn stmt_to_json(stmt: &Stmt) -> Value {
    match stmt {
        Stmt::Function(function) => {
            let mut fields = Map::new();
            fields.insert("name".to_string(), json!(function.name));
            fields.insert(
                "parameters".to_string(),
                Value::Array(
                    function
                        .parameters
                        .iter()
                        .map(|parameter| json!({ "name": parameter.name, "type": parameter.param_type.name() }))
                        .collect(),
                ),
            );
            fields.insert("type".to_string(), json!(function.return_type.name()));
            if let Some(body) = &function.body {
                fields.insert("body".to_string(), program_to_json(body));
            }
            json!({ "function": fields })
        }
        Stmt::If(if_stmt) => {
            let mut fields = Map::new();
            fields.insert("condition".to_string(), expr_to_json(&if_stmt.condition));
            fields.insert("body".to_string(), program_to_json(&if_stmt.then_body));
            if let Some(else_body) = &if_stmt.else_body {
                fields.insert("elseBody".to_string(), program_to_json(else_body));
            }
            json!({ "if": fields })
        }
        Stmt::For(for_stmt) => json!({
            "for": {
                "initialStatement": stmt_to_json(&for_stmt.initial),
                "condition": expr_to_json(&for_stmt.condition),
                "recurringExpression": expr_to_json(&for_stmt.step),
                "body": program_to_json(&for_stmt.body),
            }
        }),
        Stmt::Return(value) => json!({ "return": value.as_ref().map(expr_to_json) }),
        Stmt::VarDecl(var) => json!({
            "var": { "name": var.identifier, "value": expr_to_json(&var.assigned_value) }
        }),
        Stmt::Call(call) => json!({ "call": call_to_json(call) }),
        Stmt::Assignment(assign) => json!({ "assign": assignment_to_json(assign) }),
        Stmt::PassThrough(raw) => json!({ "passThrough": raw }),
        Stmt::Unrecognized(value) => value.clone(),
    }
}

pub fn expr_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Binary(binary) => {
            let mut fields = Map::new();
            fields.insert(
                binary.operator.tag().to_string(),
                json!([expr_to_json(&binary.left), expr_to_json(&binary.right)]),
            );
            Value::Object(fields)
        }
        Expr::Symbol(name) => json!({ "id": name }),
        Expr::Float(text) => json!({ "float": text }),
        Expr::Double(text) => json!({ "double": text }),
        Expr::Integer(text) => json!({ "integer": text }),
        Expr::String(text) => json!({ "string": text }),
        Expr::Boolean(value) => json!({ "boolean": value }),
        Expr::Call(call) => json!({ "call": call_to_json(call) }),
        Expr::Assignment(assign) => json!({ "assign": assignment_to_json(assign) }),
        Expr::PassThrough(raw) => json!({ "passThrough": raw }),
        Expr::Unrecognized(value) => value.clone(),
    }
}

fn call_to_json(call: &CallExpr) -> Value {
    json!({
        "id": call.callee,
        "args": call.arguments.iter().map(expr_to_json).collect::<Vec<_>>(),
    })
}

fn assignment_to_json(assign: &AssignmentExpr) -> Value {
    json!({ "name": assign.assignee, "value": expr_to_json(&assign.value) })
}
