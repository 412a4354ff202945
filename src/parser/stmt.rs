use crate::{
    ast::{
        ast::GlobalDeclaration,
        statements::{Declaration, DeclarationList, DefineParameterList, Parameter, ParameterList},
    },
    builder::actions::{
        append_declaration, append_define_parameter, append_parameter, assignment_declaration,
        define_call_declaration, define_declaration, define_global_declaration, define_parameter,
        function_declaration, function_global_declaration, parameter, return_declaration,
        single_declaration, single_define_parameter, single_parameter,
        typed_assignment_declaration, variable_declaration,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_define_call, parse_expr},
    lookups::BindingPower,
    parser::Parser,
    types::parse_type,
};

// GLOBALS

pub fn parse_global_declaration(parser: &mut Parser) -> Result<GlobalDeclaration, Error> {
    match parser
        .get_global_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a function or define declaration")),
    }
}

/// `type ID '(' params? ')' body`
pub fn parse_function_declaration(parser: &mut Parser) -> Result<GlobalDeclaration, Error> {
    let return_type = parse_type(parser)?;

    let error = parser.unexpected("expected identifier after the return type");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        Some(parse_parameter_list(parser)?)
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_declaration_list(parser)?;

    Ok(function_global_declaration(function_declaration(
        return_type,
        identifier,
        parameters,
        body,
    )))
}

pub fn parse_parameter_list(parser: &mut Parser) -> Result<ParameterList, Error> {
    let first = parse_parameter(parser)?;
    let mut parameters = single_parameter(first);

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        let next = parse_parameter(parser)?;
        parameters = append_parameter(parameters, next);
    }

    Ok(parameters)
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let parameter_type = parse_type(parser)?;

    let error = parser.unexpected("expected parameter name");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    Ok(parameter(parameter_type, identifier))
}

/// `'define' ID '(' define_params? ')' body`
pub fn parse_define_declaration(parser: &mut Parser) -> Result<GlobalDeclaration, Error> {
    parser.expect(TokenKind::Define)?;

    let error = parser.unexpected("expected identifier after `define`");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        Some(parse_define_parameter_list(parser)?)
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_declaration_list(parser)?;

    Ok(define_global_declaration(define_declaration(
        identifier, parameters, body,
    )))
}

pub fn parse_define_parameter_list(parser: &mut Parser) -> Result<DefineParameterList, Error> {
    let first = define_parameter(parser.expect(TokenKind::Identifier)?.value);
    let mut define_parameters = single_define_parameter(first);

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        let next = define_parameter(parser.expect(TokenKind::Identifier)?.value);
        define_parameters = append_define_parameter(define_parameters, next);
    }

    Ok(define_parameters)
}

// DECLARATIONS

/// `'{' decl+ '}'`
pub fn parse_declaration_list(parser: &mut Parser) -> Result<DeclarationList, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let first = parse_declaration(parser)?;
    let mut declarations = single_declaration(first);

    while parser.current_token_kind() != TokenKind::CloseCurly {
        let next = parse_declaration(parser)?;
        declarations = append_declaration(declarations, next);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(declarations)
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    match parser
        .get_declaration_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a declaration")),
    }
}

/// `type ID ';'` or `type ID '=' expr ';'`
pub fn parse_typed_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    let declared_type = parse_type(parser)?;

    let error = parser.unexpected("expected identifier during variable declaration");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        let expression = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Semicolon)?;

        return Ok(typed_assignment_declaration(
            declared_type,
            identifier,
            expression,
        ));
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(variable_declaration(declared_type, identifier))
}

/// `'return' expr ';'`
pub fn parse_return_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::Return)?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(return_declaration(expression))
}

/// `ID '=' expr ';'` or `call ';'`
pub fn parse_identifier_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    if parser.peek_token_kind() == TokenKind::OpenParen {
        let call = parse_define_call(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        return Ok(define_call_declaration(call));
    }

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let error = parser.unexpected("expected `=` or a define call");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(assignment_declaration(identifier, expression))
}
