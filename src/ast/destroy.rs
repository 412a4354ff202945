//! Tree teardown, one operation per node kind.
//!
//! Each destructor takes its node by value, so a node can only be destroyed
//! by its owner and only once. Passing `None` is a no-op. Lists are consumed
//! front to back in a loop; expressions, factors and declarations are torn
//! down depth-first, children before the node that held them.

use tracing::trace;

use super::{
    ast::{
        DefineDeclaration, FunctionDeclaration, GlobalDeclaration, GlobalDeclarationList, Program,
    },
    expressions::{Argument, ArgumentList, Constant, DefineCall, Expression, Factor},
    statements::{
        Declaration, DeclarationList, DefineParameter, DefineParameterList, Parameter,
        ParameterList,
    },
    types::Type,
};

fn log_destructor(destructor: &'static str) {
    trace!(destructor, "executing destructor");
}

pub fn destroy_program(program: Option<Program>) {
    log_destructor("destroy_program");
    if let Some(Program {
        global_declarations,
    }) = program
    {
        destroy_global_declaration_list(Some(global_declarations));
    }
}

pub fn destroy_global_declaration_list(list: Option<GlobalDeclarationList>) {
    log_destructor("destroy_global_declaration_list");
    for global_declaration in list.into_iter().flatten() {
        destroy_global_declaration(Some(global_declaration));
    }
}

pub fn destroy_global_declaration(global_declaration: Option<GlobalDeclaration>) {
    log_destructor("destroy_global_declaration");
    match global_declaration {
        Some(GlobalDeclaration::Function(function)) => {
            destroy_function_declaration(Some(function))
        }
        Some(GlobalDeclaration::Define(define)) => destroy_define_declaration(Some(define)),
        None => {}
    }
}

pub fn destroy_function_declaration(function_declaration: Option<FunctionDeclaration>) {
    log_destructor("destroy_function_declaration");
    if let Some(FunctionDeclaration {
        identifier,
        return_type,
        parameters,
        body,
    }) = function_declaration
    {
        drop(identifier);
        destroy_type(Some(return_type));
        destroy_parameter_list(parameters);
        destroy_declaration_list(Some(body));
    }
}

pub fn destroy_define_declaration(define_declaration: Option<DefineDeclaration>) {
    log_destructor("destroy_define_declaration");
    if let Some(DefineDeclaration {
        identifier,
        parameters,
        body,
    }) = define_declaration
    {
        drop(identifier);
        destroy_define_parameter_list(parameters);
        destroy_declaration_list(Some(body));
    }
}

pub fn destroy_type(declared_type: Option<Type>) {
    log_destructor("destroy_type");
    drop(declared_type);
}

pub fn destroy_parameter_list(list: Option<ParameterList>) {
    log_destructor("destroy_parameter_list");
    for parameter in list.into_iter().flatten() {
        destroy_parameter(Some(parameter));
    }
}

pub fn destroy_parameter(parameter: Option<Parameter>) {
    log_destructor("destroy_parameter");
    if let Some(Parameter {
        identifier,
        parameter_type,
    }) = parameter
    {
        drop(identifier);
        destroy_type(Some(parameter_type));
    }
}

pub fn destroy_define_parameter_list(list: Option<DefineParameterList>) {
    log_destructor("destroy_define_parameter_list");
    for define_parameter in list.into_iter().flatten() {
        destroy_define_parameter(Some(define_parameter));
    }
}

pub fn destroy_define_parameter(define_parameter: Option<DefineParameter>) {
    log_destructor("destroy_define_parameter");
    if let Some(DefineParameter { identifier }) = define_parameter {
        drop(identifier);
    }
}

pub fn destroy_declaration_list(list: Option<DeclarationList>) {
    log_destructor("destroy_declaration_list");
    for declaration in list.into_iter().flatten() {
        destroy_declaration(Some(declaration));
    }
}

pub fn destroy_declaration(declaration: Option<Declaration>) {
    log_destructor("destroy_declaration");
    match declaration {
        Some(Declaration::Variable {
            declared_type,
            identifier,
        }) => {
            drop(identifier);
            destroy_type(Some(declared_type));
        }
        Some(Declaration::Assignment {
            declared_type,
            identifier,
            expression,
        }) => {
            drop(identifier);
            destroy_type(declared_type);
            destroy_expression(Some(expression));
        }
        Some(Declaration::Return { expression }) => destroy_expression(Some(expression)),
        Some(Declaration::DefineCall(call)) => destroy_define_call(Some(call)),
        None => {}
    }
}

pub fn destroy_expression(expression: Option<Expression>) {
    log_destructor("destroy_expression");
    match expression {
        Some(Expression::Arithmetic { left, right, .. }) => {
            destroy_expression(Some(*left));
            destroy_expression(Some(*right));
        }
        Some(Expression::Factor(factor)) => destroy_factor(Some(factor)),
        Some(Expression::DefineCall(call)) => destroy_define_call(Some(call)),
        None => {}
    }
}

pub fn destroy_factor(factor: Option<Factor>) {
    log_destructor("destroy_factor");
    match factor {
        Some(Factor::Constant(constant)) => destroy_constant(Some(constant)),
        Some(Factor::Identifier(identifier)) => drop(identifier),
        Some(Factor::Parenthesized(expression)) => destroy_expression(Some(*expression)),
        None => {}
    }
}

pub fn destroy_constant(constant: Option<Constant>) {
    log_destructor("destroy_constant");
    drop(constant);
}

pub fn destroy_define_call(define_call: Option<DefineCall>) {
    log_destructor("destroy_define_call");
    if let Some(DefineCall {
        identifier,
        arguments,
    }) = define_call
    {
        drop(identifier);
        destroy_argument_list(arguments);
    }
}

pub fn destroy_argument_list(list: Option<ArgumentList>) {
    log_destructor("destroy_argument_list");
    for argument in list.into_iter().flatten() {
        destroy_argument(Some(argument));
    }
}

pub fn destroy_argument(argument: Option<Argument>) {
    log_destructor("destroy_argument");
    if let Some(Argument { expression }) = argument {
        destroy_expression(Some(expression));
    }
}
