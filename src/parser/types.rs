//! Type annotations.
//!
//! Only the primitive type names are accepted; anything else is reported
//! at the position of the name.

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected("expected a type name"));
    }

    let token = parser.advance().clone();
    Type::from_name(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType {
                type_: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}
