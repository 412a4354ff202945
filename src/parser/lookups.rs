use std::collections::HashMap;

use crate::{
    ast::{ast::GlobalDeclaration, expressions::Expression, statements::Declaration},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

pub type GlobalHandler = fn(&mut Parser) -> Result<GlobalDeclaration, Error>;
pub type DeclarationHandler = fn(&mut Parser) -> Result<Declaration, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Factors and calls
    parser.nud(TokenKind::Number, parse_constant_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Declarations
    parser.declaration(TokenKind::Int, parse_typed_declaration);
    parser.declaration(TokenKind::Return, parse_return_declaration);
    parser.declaration(TokenKind::Identifier, parse_identifier_declaration);

    // Globals
    parser.global(TokenKind::Int, parse_function_declaration);
    parser.global(TokenKind::Define, parse_define_declaration);
}

// Lookup tables inside parser struct, so it's easier
pub type GlobalLookup = HashMap<TokenKind, GlobalHandler>;
pub type DeclarationLookup = HashMap<TokenKind, DeclarationHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
