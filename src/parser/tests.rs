//! Unit tests for the parser module.
//!
//! This module contains tests for driving reductions over:
//! - Function and define declarations
//! - Declarations of every kind
//! - Expressions, precedence and grouping
//! - Define calls in statement and expression position
//! - Error reporting

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{GlobalDeclaration, GlobalDeclarationKind, Program},
        expressions::{ArithmeticOperator, Constant, Expression, ExpressionKind, Factor},
        statements::{Declaration, DeclarationKind},
    },
    builder::state::CompilerState,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

fn parse_str(source: &str) -> Result<CompilerState, Error> {
    let tokens = tokenize(source.to_string(), Some("test.def".to_string())).unwrap();
    parse(tokens, Rc::new("test.def".to_string()))
}

fn parse_ok(source: &str) -> Program {
    let mut state = parse_str(source).unwrap();
    state.take_root().unwrap()
}

fn first_function_body(program: &Program) -> Vec<&Declaration> {
    match program.global_declarations.head() {
        GlobalDeclaration::Function(function) => function.body.iter().collect(),
        GlobalDeclaration::Define(define) => define.body.iter().collect(),
    }
}

fn returned_expression(source: &str) -> Expression {
    let program = parse_ok(&format!("int main() {{ return {}; }}", source));
    match first_function_body(&program)[0] {
        Declaration::Return { expression } => expression.clone(),
        other => panic!("Expected return, got {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_ok("int add(int a, int b) { return a + b; }");

    let GlobalDeclaration::Function(function) = program.global_declarations.head() else {
        panic!("Expected a function");
    };
    assert_eq!(function.identifier, "add");
    let parameters = function.parameters.as_ref().unwrap();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters.head().identifier, "a");
    assert_eq!(parameters.last().identifier, "b");
    assert_eq!(function.body.len(), 1);
}

#[test]
fn test_parse_function_without_parameters() {
    let program = parse_ok("int main() { return 0; }");

    let GlobalDeclaration::Function(function) = program.global_declarations.head() else {
        panic!("Expected a function");
    };
    assert!(function.parameters.is_none());
}

#[test]
fn test_parse_define_declaration() {
    let program = parse_ok("define twice(a, b) { a = a + a; b = b + b; }");

    let GlobalDeclaration::Define(define) = program.global_declarations.head() else {
        panic!("Expected a define");
    };
    assert_eq!(define.identifier, "twice");
    let names: Vec<&str> = define
        .parameters
        .as_ref()
        .unwrap()
        .iter()
        .map(|parameter| parameter.identifier.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(define.body.len(), 2);
}

#[test]
fn test_parse_multiple_globals_in_order() {
    let program = parse_ok(
        "define reset() { x = 0; } int main() { reset(); return 0; } int other(int n) { return n; }",
    );

    let kinds: Vec<GlobalDeclarationKind> = program
        .global_declarations
        .iter()
        .map(|global| global.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            GlobalDeclarationKind::Define,
            GlobalDeclarationKind::Function,
            GlobalDeclarationKind::Function,
        ]
    );
    let names: Vec<&str> = program
        .global_declarations
        .iter()
        .map(|global| global.identifier())
        .collect();
    assert_eq!(names, vec!["reset", "main", "other"]);
}

#[test]
fn test_parse_declaration_kinds() {
    let program = parse_ok("int main() { int x; int y = 2; x = y; f(x); return x; }");

    let kinds: Vec<DeclarationKind> = first_function_body(&program)
        .iter()
        .map(|declaration| declaration.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            DeclarationKind::Variable,
            DeclarationKind::Assignment,
            DeclarationKind::Assignment,
            DeclarationKind::DefineCall,
            DeclarationKind::Return,
        ]
    );

    let body = first_function_body(&program);
    assert!(matches!(
        body[1],
        Declaration::Assignment { declared_type: Some(_), .. }
    ));
    assert!(matches!(
        body[2],
        Declaration::Assignment { declared_type: None, .. }
    ));
}

#[test]
fn test_parse_precedence() {
    let expression = returned_expression("1 + 2 * 3");

    let Expression::Arithmetic { operator, left, right } = expression else {
        panic!("Expected arithmetic");
    };
    assert_eq!(operator, ArithmeticOperator::Addition);
    assert_eq!(left.kind(), ExpressionKind::Factor);
    assert_eq!(right.kind(), ExpressionKind::Multiplication);
}

#[test]
fn test_parse_left_associativity() {
    let expression = returned_expression("8 - 4 - 2");

    let Expression::Arithmetic { operator, left, right } = expression else {
        panic!("Expected arithmetic");
    };
    assert_eq!(operator, ArithmeticOperator::Subtraction);
    assert_eq!(left.kind(), ExpressionKind::Subtraction);
    assert_eq!(*right, Expression::Factor(Factor::Constant(Constant { value: 2 })));
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let expression = returned_expression("(1 + 2) * 3");

    let Expression::Arithmetic { operator, left, .. } = expression else {
        panic!("Expected arithmetic");
    };
    assert_eq!(operator, ArithmeticOperator::Multiplication);
    // The group collapses straight into the addition, no parenthesized factor survives
    assert_eq!(left.kind(), ExpressionKind::Addition);
}

#[test]
fn test_parse_define_call_in_expression() {
    let expression = returned_expression("1 + square(x)");

    let Expression::Arithmetic { right, .. } = expression else {
        panic!("Expected arithmetic");
    };
    let Expression::DefineCall(call) = *right else {
        panic!("Expected define call");
    };
    assert_eq!(call.identifier, "square");
    assert_eq!(call.arguments.unwrap().len(), 1);
}

#[test]
fn test_parse_define_call_without_arguments() {
    let program = parse_ok("int main() { tick(); return 0; }");

    let body = first_function_body(&program);
    let Declaration::DefineCall(call) = body[0] else {
        panic!("Expected define call statement");
    };
    assert_eq!(call.identifier, "tick");
    assert!(call.arguments.is_none());
}

#[test]
fn test_parse_empty_source_fails() {
    let error = parse_str("").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_empty_body_fails() {
    let error = parse_str("int main() { }").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "expected a declaration".to_string(),
        }
    );
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_str("int main() { return 1 }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 22);
}

#[test]
fn test_parse_unclosed_group() {
    let error = parse_str("int main() { return (1 + 2; }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_unknown_type() {
    let error = parse_str("int main(float x) { return x; }").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnknownType {
            type_: "float".to_string()
        }
    );
}

#[test]
fn test_parse_number_out_of_range() {
    let error = parse_str("int main() { return 99999999999; }").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_unterminated_body() {
    let error = parse_str("int main() { return 1;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "EOF".to_string(),
            message: "expected a declaration".to_string(),
        }
    );
}

#[test]
fn test_parse_without_trailing_eof_token() {
    let mut tokens = tokenize("int main() { return 1; }".to_string(), None).unwrap();
    tokens.pop();

    let state = parse(tokens, Rc::new("shell".to_string())).unwrap();
    assert!(state.root().is_some());
}

#[test]
fn test_parse_define_call_argument_nesting_a_define_call() {
    let mut state = parse_str("int main() { return f(g(1), 2); }").unwrap();

    let expression = match first_function_body(state.expect_root().unwrap())[0] {
        Declaration::Return { expression } => expression.clone(),
        other => panic!("Expected return, got {:?}", other),
    };
    let Expression::DefineCall(outer) = expression else {
        panic!("Expected define call");
    };
    assert_eq!(outer.identifier, "f");
    let arguments = outer.arguments.as_ref().unwrap();
    assert_eq!(arguments.len(), 2);

    let Expression::DefineCall(inner) = &arguments.head().expression else {
        panic!("Expected nested define call");
    };
    assert_eq!(inner.identifier, "g");
    assert_eq!(
        inner.arguments.as_ref().unwrap().head().expression,
        Expression::Factor(Factor::Constant(Constant { value: 1 }))
    );
    assert_eq!(
        arguments.last().expression,
        Expression::Factor(Factor::Constant(Constant { value: 2 }))
    );

    state.teardown();
    assert!(state.root().is_none());
}
