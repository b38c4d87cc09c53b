use crate::{
    ast::expressions::{AssignmentExpr, BinaryExpr, BinaryOperator, CallExpr, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected an expression")),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => break,
        };
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Number => number_literal(&token, token.value.clone())?,
        TokenKind::Identifier => Expr::Symbol(token.value.clone()),
        TokenKind::String => Expr::String(token.value.clone()),
        TokenKind::True => Expr::Boolean(true),
        TokenKind::False => Expr::Boolean(false),
        TokenKind::RawCode => Expr::PassThrough(token.value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span.start,
            ))
        }
    };

    parser.advance();
    Ok(expr)
}

/// Classifies a numeric token: an `f` suffix makes a float, a fraction
/// makes a double, anything else is a 32-bit integer.
fn number_literal(token: &Token, text: String) -> Result<Expr, Error> {
    let parse_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: text.clone(),
            },
            token.span.start.clone(),
        )
    };

    if let Some(digits) = text.strip_suffix('f') {
        digits.parse::<f32>().map_err(|_| parse_error())?;
        Ok(Expr::Float(text.clone()))
    } else if text.contains('.') {
        text.parse::<f64>().map_err(|_| parse_error())?;
        Ok(Expr::Double(text.clone()))
    } else {
        text.parse::<i32>().map_err(|_| parse_error())?;
        Ok(Expr::Integer(text.clone()))
    }
}

/// `-` in prefix position only negates numeric literals.
pub fn parse_negative_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    if parser.current_token_kind() != TokenKind::Number {
        return Err(parser.unexpected("only numeric literals can be negated"));
    }

    let token = parser.advance().clone();
    number_literal(&token, format!("-{}", token.value))
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Plus),
        TokenKind::Dash => Some(BinaryOperator::Minus),
        TokenKind::Star => Some(BinaryOperator::Multiply),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        TokenKind::Equals => Some(BinaryOperator::Equals),
        TokenKind::Greater => Some(BinaryOperator::GreaterThan),
        TokenKind::Less => Some(BinaryOperator::LessThan),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match binary_operator(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected("expected a binary operator")),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

// Right-associative: `a = b = 1` assigns to `b` first.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let assignee = match left {
        Expr::Symbol(name) => name,
        _ => return Err(parser.unexpected("only variables can be assigned to")),
    };
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        assignee,
        value: Box::new(value),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let callee = match left {
        Expr::Symbol(name) => name,
        _ => return Err(parser.unexpected("only named functions can be called")),
    };
    parser.advance();

    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr { callee, arguments }))
}
