use crate::{
    ast::expressions::{ArithmeticOperator, DefineCall, Expression},
    builder::actions::{
        append_argument, argument, arithmetic_expression, constant_factor, define_call,
        define_call_expression, expression_factor, factor_expression, identifier_factor,
        integer_constant, single_argument,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expected an expression"));
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep folding into lhs
    loop {
        let token_kind = parser.current_token_kind();
        let current_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if current_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("expected an operator"));
        };
        left = led(parser, left, current_bp)?;
    }

    Ok(left)
}

/// `INT` reduces through constant, factor and factor-expression.
pub fn parse_constant_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance().clone();
    let value = token.value.parse::<i32>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })?;

    Ok(factor_expression(constant_factor(integer_constant(value))))
}

/// `ID` is an identifier factor unless it opens a define call.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    if parser.peek_token_kind() == TokenKind::OpenParen {
        let call = parse_define_call(parser)?;
        return Ok(define_call_expression(call));
    }

    let identifier = parser.expect(TokenKind::Identifier)?.value;
    Ok(factor_expression(identifier_factor(identifier)))
}

/// `'(' expr ')'` reduces to a parenthesized factor, which the
/// factor-expression action collapses back into the inner expression.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    let error = parser.unexpected("expected `)` to close the group");
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(factor_expression(expression_factor(expr)))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator = match parser.current_token_kind() {
        TokenKind::Plus => ArithmeticOperator::Addition,
        TokenKind::Dash => ArithmeticOperator::Subtraction,
        TokenKind::Star => ArithmeticOperator::Multiplication,
        TokenKind::Slash => ArithmeticOperator::Division,
        _ => return Err(parser.unexpected("expected an arithmetic operator")),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(arithmetic_expression(left, right, operator))
}

/// `ID '(' (expr (',' expr)*)? ')'`
pub fn parse_define_call(parser: &mut Parser) -> Result<DefineCall, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::OpenParen)?;

    let arguments = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        let first = argument(parse_expr(parser, BindingPower::Default)?);
        let mut arguments = single_argument(first);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            let next = argument(parse_expr(parser, BindingPower::Default)?);
            arguments = append_argument(arguments, next);
        }

        Some(arguments)
    };

    let error = parser.unexpected("expected `,` or `)` in define call");
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(define_call(identifier, arguments))
}
