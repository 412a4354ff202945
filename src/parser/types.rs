use crate::{
    ast::types::Type,
    builder::actions::int_type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `type := 'int'`
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        TokenKind::Int => {
            parser.advance();
            Ok(int_type())
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnknownType {
                    type_: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}
