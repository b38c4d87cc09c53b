//! Unit tests for the lexer module.

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lc".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("fn let var if else for return true false"),
        vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo baz_123 _underscore CamelCase fnord".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "baz_123", "_underscore", "CamelCase", "fnord"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 1.5f".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    let values: Vec<_> = tokens[..4].iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0", "1.5f"]);
    assert!(tokens[..4].iter().all(|token| token.kind == TokenKind::Number));
}

#[test]
fn test_float_suffix_needs_fraction() {
    // `3f` is an integer followed by an identifier.
    assert_eq!(
        kinds("3f"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_strings_keep_escapes() {
    let source = r#""hello" "%d\n" "quote\"test" """#.to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "%d\\n");
    assert_eq!(tokens[2].value, "quote\\\"test");
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_raw_code() {
    let source = "`#define N 10` `x++`".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::RawCode);
    assert_eq!(tokens[0].value, "#define N 10");
    assert_eq!(tokens[1].kind, TokenKind::RawCode);
    assert_eq!(tokens[1].value, "x++");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == = < > ->"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ; :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // this is a comment\nlet y = 10 / 2;".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens.len(), 13);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[6].value, "y");
    assert_eq!(tokens[9].kind, TokenKind::Slash);
}

#[test]
fn test_tokenize_function_declaration() {
    assert_eq!(
        kinds("fn add(a: I32) -> I32 { return a; }"),
        vec![
            TokenKind::Fn,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_spans_are_byte_offsets() {
    let source = "let  answer = 42;".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 11);
    assert_eq!(tokens[3].span.start.0, 14);
    assert_eq!(*tokens[3].span.start.1, "test.lc");
    assert_eq!(tokens.last().unwrap().span.start.0, 17);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "let x = @;".to_string();
    let error = tokenize(source, Some("test.lc".to_string())).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().unwrap().0, 8);
}

#[test]
fn test_unrecognized_multibyte_character() {
    let error = tokenize("x = é;".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "é".to_string()
        }
    );
    assert_eq!(*error.get_position().unwrap().1, "shell");
}

#[test]
fn test_unterminated_string_is_rejected() {
    assert!(tokenize("\"open".to_string(), None).is_err());
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}
