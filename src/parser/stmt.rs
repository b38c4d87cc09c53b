use crate::{
    ast::{
        expressions::Expr,
        statements::{ForStmt, FunctionDecl, IfStmt, Parameter, Stmt, VarDeclStmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let start = parser.get_position();
    let start_token = parser.current_token().value.clone();
    let expr = parse_expr(parser, BindingPower::Default)?;

    let stmt = match expr {
        Expr::Call(call) => Stmt::Call(call),
        Expr::Assignment(assignment) => Stmt::Assignment(assignment),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: start_token,
                    message: String::from("only calls and assignments can be used as statements"),
                },
                start,
            ))
        }
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(stmt)
}

/// `{ stmt* }`
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
    {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected("expected identifier during variable declaration"));
    }
    let identifier = parser.advance().value.clone();

    if parser.current_token_kind() != TokenKind::Assignment {
        return Err(parser.unexpected("variables need an initializer to infer their type"));
    }
    parser.advance();

    let assigned_value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        assigned_value,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            Some(vec![parse_if_stmt(parser)?])
        } else {
            Some(parse_block(parser)?)
        }
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
    }))
}

/// `for (init; condition; step) { body }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen)?;

    let initial = parse_stmt(parser)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;
    let step = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::CloseParen)?;
    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        initial: Box::new(initial),
        condition,
        step,
        body,
    }))
}

/// `fn name(param: Type, ...) [-> Type]` followed by a body, or by `;` for a
/// prototype.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected("expected function name"));
    }
    let name = parser.advance().value.clone();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let param_name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let param_type = parse_type(parser)?;
        parameters.push(Parameter::new(param_name, param_type));

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        parse_type(parser)?
    } else {
        Type::Void
    };

    let body = if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        None
    } else {
        Some(parse_block(parser)?)
    };

    Ok(Stmt::Function(FunctionDecl {
        name,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(value))
}

/// A backtick fragment in statement position; a trailing `;` is optional.
pub fn parse_raw_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let raw = parser.advance().value.clone();

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::PassThrough(raw))
}
