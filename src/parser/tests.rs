//! Unit tests for the parser module.

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        expressions::{BinaryOperator, Expr},
        statements::{Parameter, Stmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lc".to_string()))?;
    parse(tokens, Rc::new("test.lc".to_string()))
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("let x = 42; var y = 1.5;").unwrap();

    assert_eq!(
        program,
        vec![
            Stmt::var("x", Expr::integer(42)),
            Stmt::var("y", Expr::Double("1.5".to_string())),
        ]
    );
}

#[test]
fn test_parse_literals() {
    let program =
        parse_source("let a = 2.5f; let b = \"hi\\n\"; let c = true; let d = `NULL`; let e = -3;")
            .unwrap();

    assert_eq!(
        program,
        vec![
            Stmt::var("a", Expr::Float("2.5f".to_string())),
            Stmt::var("b", Expr::string("hi\\n")),
            Stmt::var("c", Expr::Boolean(true)),
            Stmt::var("d", Expr::PassThrough("NULL".to_string())),
            Stmt::var("e", Expr::Integer("-3".to_string())),
        ]
    );
}

#[test]
fn test_parse_operator_precedence() {
    let program = parse_source("x = 1 + 2 * 3 < 10;").unwrap();

    let expected = Stmt::assign(
        "x",
        Expr::binary(
            BinaryOperator::LessThan,
            Expr::binary(
                BinaryOperator::Plus,
                Expr::integer(1),
                Expr::binary(BinaryOperator::Multiply, Expr::integer(2), Expr::integer(3)),
            ),
            Expr::integer(10),
        ),
    );
    assert_eq!(program, vec![expected]);
}

#[test]
fn test_parse_left_associative_subtraction() {
    let program = parse_source("x = 10 - 4 - 3;").unwrap();

    let expected = Stmt::assign(
        "x",
        Expr::binary(
            BinaryOperator::Minus,
            Expr::binary(BinaryOperator::Minus, Expr::integer(10), Expr::integer(4)),
            Expr::integer(3),
        ),
    );
    assert_eq!(program, vec![expected]);
}

#[test]
fn test_parse_grouping() {
    let program = parse_source("x = (1 + 2) * 3;").unwrap();

    let expected = Stmt::assign(
        "x",
        Expr::binary(
            BinaryOperator::Multiply,
            Expr::binary(BinaryOperator::Plus, Expr::integer(1), Expr::integer(2)),
            Expr::integer(3),
        ),
    );
    assert_eq!(program, vec![expected]);
}

#[test]
fn test_parse_chained_assignment_is_right_associative() {
    let program = parse_source("a = b = 1;").unwrap();

    assert_eq!(
        program,
        vec![Stmt::assign("a", Expr::assign("b", Expr::integer(1)))]
    );
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("fn add(a: I32, b: I32) -> I32 { return a + b; }").unwrap();

    let expected = Stmt::function(
        "add",
        vec![Parameter::new("a", Type::I32), Parameter::new("b", Type::I32)],
        Type::I32,
        Some(vec![Stmt::Return(Some(Expr::binary(
            BinaryOperator::Plus,
            Expr::symbol("a"),
            Expr::symbol("b"),
        )))]),
    );
    assert_eq!(program, vec![expected]);
}

#[test]
fn test_parse_prototype_and_default_return_type() {
    let program = parse_source("fn puts(s: String) -> I32; fn main() { return; }").unwrap();

    assert_eq!(
        program,
        vec![
            Stmt::function("puts", vec![Parameter::new("s", Type::String)], Type::I32, None),
            Stmt::function("main", vec![], Type::Void, Some(vec![Stmt::Return(None)])),
        ]
    );
}

#[test]
fn test_parse_if_else_chain() {
    let program =
        parse_source("if x > 0 { f(1); } else if x == 0 { f(0); } else { f(2); }").unwrap();

    let Stmt::If(outer) = &program[0] else {
        panic!("expected an if statement, got {:?}", program[0]);
    };
    assert_eq!(outer.then_body, vec![Stmt::call("f", vec![Expr::integer(1)])]);

    let else_body = outer.else_body.as_ref().unwrap();
    assert_eq!(else_body.len(), 1);
    let Stmt::If(inner) = &else_body[0] else {
        panic!("expected a nested if, got {:?}", else_body[0]);
    };
    assert_eq!(
        inner.condition,
        Expr::binary(BinaryOperator::Equals, Expr::symbol("x"), Expr::integer(0))
    );
    assert_eq!(
        inner.else_body,
        Some(vec![Stmt::call("f", vec![Expr::integer(2)])])
    );
}

#[test]
fn test_parse_for_loop() {
    let program = parse_source("for (let i = 0; i < 12; i = i + 1) { f(i); }").unwrap();

    let Stmt::For(for_stmt) = &program[0] else {
        panic!("expected a for statement, got {:?}", program[0]);
    };
    assert_eq!(*for_stmt.initial, Stmt::var("i", Expr::integer(0)));
    assert_eq!(
        for_stmt.condition,
        Expr::binary(BinaryOperator::LessThan, Expr::symbol("i"), Expr::integer(12))
    );
    assert_eq!(
        for_stmt.step,
        Expr::assign(
            "i",
            Expr::binary(BinaryOperator::Plus, Expr::symbol("i"), Expr::integer(1))
        )
    );
    assert_eq!(for_stmt.body, vec![Stmt::call("f", vec![Expr::symbol("i")])]);
}

#[test]
fn test_parse_raw_statement() {
    let program = parse_source("`#include <stdio.h>`\n`#define N 3`;").unwrap();

    assert_eq!(
        program,
        vec![
            Stmt::PassThrough("#include <stdio.h>".to_string()),
            Stmt::PassThrough("#define N 3".to_string()),
        ]
    );
}

#[test]
fn test_parse_nested_calls() {
    let program = parse_source("printf(\"%d\", fib(0, 1, n - 1));").unwrap();

    let expected = Stmt::call(
        "printf",
        vec![
            Expr::string("%d"),
            Expr::call(
                "fib",
                vec![
                    Expr::integer(0),
                    Expr::integer(1),
                    Expr::binary(BinaryOperator::Minus, Expr::symbol("n"), Expr::integer(1)),
                ],
            ),
        ],
    );
    assert_eq!(program, vec![expected]);
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(parse_source("// nothing here\n").unwrap(), vec![]);
}

#[test]
fn test_parse_error_unknown_type() {
    let error = parse_source("fn f(a: Int) {}").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnknownType {
            type_: "Int".to_string()
        }
    );
    assert_eq!(error.get_position().unwrap().0, 8);
}

#[test]
fn test_parse_error_missing_semicolon() {
    let error = parse_source("let x = 1 let y = 2;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: "let".to_string()
        }
    );
}

#[test]
fn test_parse_error_bare_expression_statement() {
    let error = parse_source("1 + 2;").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
    assert_eq!(error.get_position().unwrap().0, 0);
}

#[test]
fn test_parse_error_call_on_non_identifier() {
    let error = parse_source("x = 1(2);").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "("
    ));
}

#[test]
fn test_parse_error_assign_to_literal() {
    assert!(parse_source("1 = 2;").is_err());
}

#[test]
fn test_parse_error_var_without_initializer() {
    let error = parse_source("let x;").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == ";"
    ));
}

#[test]
fn test_parse_error_unclosed_block() {
    let error = parse_source("fn main() { f();").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: "EOF".to_string()
        }
    );
}

#[test]
fn test_parse_error_integer_overflow() {
    let error = parse_source("let x = 99999999999;").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::NumberParseError {
            token: "99999999999".to_string()
        }
    );
}

#[test]
fn test_parse_without_trailing_eof_token() {
    let mut tokens = tokenize("f();".to_string(), None).unwrap();
    tokens.pop();

    let program = parse(tokens, Rc::new("shell".to_string())).unwrap();
    assert_eq!(program, vec![Stmt::call("f", vec![])]);
}
