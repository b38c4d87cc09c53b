//! Unit tests for the AST module.
//!
//! Covers reading the tagged JSON form, the fallback to unrecognized nodes
//! and block depth bookkeeping.

use serde_json::json;

use super::{
    expressions::{BinaryOperator, Expr},
    json::{expr_from_json, program_from_json, program_from_str, program_to_json, stmt_from_json},
    statements::{block_depth, Parameter, Stmt},
    types::Type,
};

#[test]
fn test_read_binary_expression() {
    let expr = expr_from_json(&json!({ "plus": [{ "integer": 1 }, { "id": "x" }] }));

    assert_eq!(
        expr,
        Expr::binary(BinaryOperator::Plus, Expr::integer(1), Expr::symbol("x"))
    );
}

#[test]
fn test_read_literals_keep_their_text() {
    assert_eq!(expr_from_json(&json!({ "double": 2.5 })), Expr::Double("2.5".to_string()));
    assert_eq!(expr_from_json(&json!({ "float": "1.5" })), Expr::Float("1.5".to_string()));
    assert_eq!(expr_from_json(&json!({ "boolean": true })), Expr::Boolean(true));
    assert_eq!(expr_from_json(&json!({ "string": "hi" })), Expr::string("hi"));
}

#[test]
fn test_read_call_without_args() {
    let expr = expr_from_json(&json!({ "call": { "id": "tick" } }));

    assert_eq!(expr, Expr::call("tick", vec![]));
}

#[test]
fn test_unknown_expression_shape_is_kept() {
    let node = json!({ "modulo": [{ "integer": 1 }, { "integer": 2 }] });

    assert_eq!(expr_from_json(&node), Expr::Unrecognized(node.clone()));
}

#[test]
fn test_binary_with_wrong_arity_is_unrecognized() {
    let node = json!({ "plus": [{ "integer": 1 }] });

    assert!(matches!(expr_from_json(&node), Expr::Unrecognized(_)));
}

#[test]
fn test_read_function_and_prototype() {
    let program = program_from_json(&json!([
        { "function": { "name": "puts", "parameters": [{ "name": "s", "type": "String" }], "type": "I32" } },
        { "function": { "name": "main", "parameters": [], "type": "I32", "body": [{ "return": { "integer": 0 } }] } }
    ]))
    .unwrap();

    assert_eq!(
        program[0],
        Stmt::function("puts", vec![Parameter::new("s", Type::String)], Type::I32, None)
    );
    assert_eq!(
        program[1],
        Stmt::function(
            "main",
            vec![],
            Type::I32,
            Some(vec![Stmt::Return(Some(Expr::integer(0)))])
        )
    );
}

#[test]
fn test_unknown_type_annotation_becomes_unknown() {
    let stmt = stmt_from_json(&json!({
        "function": { "name": "f", "parameters": [{ "name": "m", "type": "Matrix" }] }
    }));

    match stmt {
        Stmt::Function(function) => {
            assert_eq!(function.parameters[0].param_type, Type::Unknown);
            assert_eq!(function.return_type, Type::Unknown);
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_read_let_alias_and_for() {
    let stmt = stmt_from_json(&json!({
        "for": {
            "initialStatement": { "let": { "name": "i", "value": { "integer": 0 } } },
            "condition": { "lessThan": [{ "id": "i" }, { "integer": 3 }] },
            "recurringExpression": { "assign": { "name": "i", "value": { "plus": [{ "id": "i" }, { "integer": 1 }] } } },
            "body": []
        }
    }));

    match stmt {
        Stmt::For(for_stmt) => {
            assert_eq!(*for_stmt.initial, Stmt::var("i", Expr::integer(0)));
            assert!(for_stmt.body.is_empty());
        }
        other => panic!("expected for loop, got {:?}", other),
    }
}

#[test]
fn test_unknown_statement_shape_is_kept() {
    let node = json!({ "while": { "condition": { "boolean": true }, "body": [] } });

    assert_eq!(stmt_from_json(&node), Stmt::Unrecognized(node.clone()));
}

#[test]
fn test_top_level_must_be_an_array() {
    let error = program_from_json(&json!({ "return": null })).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidAst");
}

#[test]
fn test_invalid_json_text() {
    let error = program_from_str("[{").unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidAst");
}

#[test]
fn test_written_json_reads_back() {
    let program = vec![
        Stmt::PassThrough("#include <stdio.h>".to_string()),
        Stmt::function(
            "main",
            vec![],
            Type::Void,
            Some(vec![
                Stmt::var("x", Expr::integer(1)),
                Stmt::Return(None),
            ]),
        ),
    ];

    let written = program_to_json(&program);

    assert_eq!(program_from_json(&written).unwrap(), program);
    assert_eq!(written[0], json!({ "passThrough": "#include <stdio.h>" }));
}

#[test]
fn test_block_depth() {
    let program = vec![Stmt::function(
        "main",
        vec![],
        Type::Void,
        Some(vec![Stmt::If(super::statements::IfStmt {
            condition: Expr::Boolean(true),
            then_body: vec![],
            else_body: Some(vec![Stmt::If(super::statements::IfStmt {
                condition: Expr::Boolean(false),
                then_body: vec![],
                else_body: None,
            })]),
        })]),
    )];

    assert_eq!(block_depth(&program), 3);
    assert_eq!(block_depth(&[Stmt::function("f", vec![], Type::Void, None)]), 0);
}
