//! Semantic actions invoked by the grammar driver.
//!
//! Each action is a plain allocation plus field assignment over the children
//! it is handed; none of them reaches outside its arguments. The only side
//! effect in the module is [`program`], which publishes the finished tree.

use tracing::trace;

use crate::{
    ast::{
        ast::{
            DefineDeclaration, FunctionDeclaration, GlobalDeclaration, GlobalDeclarationList,
            Program,
        },
        expressions::{
            Argument, ArgumentList, ArithmeticOperator, Constant, DefineCall, Expression, Factor,
        },
        list::NonEmptyList,
        statements::{
            Declaration, DeclarationList, DefineParameter, DefineParameterList, Parameter,
            ParameterList,
        },
        types::Type,
    },
    errors::errors::Error,
};

use super::state::CompilerState;

fn log_action(action: &'static str) {
    trace!(action, "syntactic analyzer action");
}

// EXPRESSIONS

pub fn integer_constant(value: i32) -> Constant {
    log_action("integer_constant");
    Constant { value }
}

pub fn constant_factor(constant: Constant) -> Factor {
    log_action("constant_factor");
    Factor::Constant(constant)
}

pub fn identifier_factor(identifier: String) -> Factor {
    log_action("identifier_factor");
    Factor::Identifier(identifier)
}

pub fn expression_factor(expression: Expression) -> Factor {
    log_action("expression_factor");
    Factor::Parenthesized(Box::new(expression))
}

pub fn arithmetic_expression(
    left: Expression,
    right: Expression,
    operator: ArithmeticOperator,
) -> Expression {
    log_action("arithmetic_expression");
    Expression::Arithmetic {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Wraps a factor used as an expression.
///
/// A parenthesized factor is not wrapped: its inner expression is moved out
/// and returned, and the emptied factor shell is dropped here. Redundant
/// parentheses therefore never accumulate wrapper nodes.
pub fn factor_expression(factor: Factor) -> Expression {
    log_action("factor_expression");
    match factor {
        Factor::Parenthesized(inner) => *inner,
        factor => Expression::Factor(factor),
    }
}

pub fn define_call_expression(define_call: DefineCall) -> Expression {
    log_action("define_call_expression");
    Expression::DefineCall(define_call)
}

// DEFINE CALLS

pub fn define_call(identifier: String, arguments: Option<ArgumentList>) -> DefineCall {
    log_action("define_call");
    DefineCall {
        identifier,
        arguments,
    }
}

pub fn argument(expression: Expression) -> Argument {
    log_action("argument");
    Argument { expression }
}

pub fn single_argument(argument: Argument) -> ArgumentList {
    log_action("single_argument");
    NonEmptyList::singleton(argument)
}

pub fn append_argument(arguments: ArgumentList, argument: Argument) -> ArgumentList {
    log_action("append_argument");
    arguments.append(argument)
}

// TYPES AND PARAMETERS

pub fn int_type() -> Type {
    log_action("int_type");
    Type::int()
}

pub fn parameter(parameter_type: Type, identifier: String) -> Parameter {
    log_action("parameter");
    Parameter {
        identifier,
        parameter_type,
    }
}

pub fn single_parameter(parameter: Parameter) -> ParameterList {
    log_action("single_parameter");
    NonEmptyList::singleton(parameter)
}

pub fn append_parameter(parameters: ParameterList, parameter: Parameter) -> ParameterList {
    log_action("append_parameter");
    parameters.append(parameter)
}

pub fn define_parameter(identifier: String) -> DefineParameter {
    log_action("define_parameter");
    DefineParameter { identifier }
}

pub fn single_define_parameter(define_parameter: DefineParameter) -> DefineParameterList {
    log_action("single_define_parameter");
    NonEmptyList::singleton(define_parameter)
}

pub fn append_define_parameter(
    define_parameters: DefineParameterList,
    define_parameter: DefineParameter,
) -> DefineParameterList {
    log_action("append_define_parameter");
    define_parameters.append(define_parameter)
}

// DECLARATIONS

pub fn variable_declaration(declared_type: Type, identifier: String) -> Declaration {
    log_action("variable_declaration");
    Declaration::Variable {
        declared_type,
        identifier,
    }
}

pub fn typed_assignment_declaration(
    declared_type: Type,
    identifier: String,
    expression: Expression,
) -> Declaration {
    log_action("typed_assignment_declaration");
    Declaration::Assignment {
        declared_type: Some(declared_type),
        identifier,
        expression,
    }
}

pub fn assignment_declaration(identifier: String, expression: Expression) -> Declaration {
    log_action("assignment_declaration");
    Declaration::Assignment {
        declared_type: None,
        identifier,
        expression,
    }
}

pub fn return_declaration(expression: Expression) -> Declaration {
    log_action("return_declaration");
    Declaration::Return { expression }
}

pub fn define_call_declaration(define_call: DefineCall) -> Declaration {
    log_action("define_call_declaration");
    Declaration::DefineCall(define_call)
}

pub fn single_declaration(declaration: Declaration) -> DeclarationList {
    log_action("single_declaration");
    NonEmptyList::singleton(declaration)
}

pub fn append_declaration(
    declarations: DeclarationList,
    declaration: Declaration,
) -> DeclarationList {
    log_action("append_declaration");
    declarations.append(declaration)
}

// GLOBALS

pub fn function_declaration(
    return_type: Type,
    identifier: String,
    parameters: Option<ParameterList>,
    body: DeclarationList,
) -> FunctionDeclaration {
    log_action("function_declaration");
    FunctionDeclaration {
        identifier,
        return_type,
        parameters,
        body,
    }
}

pub fn define_declaration(
    identifier: String,
    parameters: Option<DefineParameterList>,
    body: DeclarationList,
) -> DefineDeclaration {
    log_action("define_declaration");
    DefineDeclaration {
        identifier,
        parameters,
        body,
    }
}

pub fn function_global_declaration(function_declaration: FunctionDeclaration) -> GlobalDeclaration {
    log_action("function_global_declaration");
    GlobalDeclaration::Function(function_declaration)
}

pub fn define_global_declaration(define_declaration: DefineDeclaration) -> GlobalDeclaration {
    log_action("define_global_declaration");
    GlobalDeclaration::Define(define_declaration)
}

pub fn single_global_declaration(global_declaration: GlobalDeclaration) -> GlobalDeclarationList {
    log_action("single_global_declaration");
    NonEmptyList::singleton(global_declaration)
}

pub fn append_global_declaration(
    global_declarations: GlobalDeclarationList,
    global_declaration: GlobalDeclaration,
) -> GlobalDeclarationList {
    log_action("append_global_declaration");
    global_declarations.append(global_declaration)
}

/// Top-level reduction: wraps the global declarations into the program root
/// and publishes it into `state`.
pub fn program<'a>(
    state: &'a mut CompilerState,
    global_declarations: GlobalDeclarationList,
) -> Result<&'a Program, Error> {
    log_action("program");
    state.publish_root(Program {
        global_declarations,
    })
}
