//! Shape serialization.
//!
//! Every node kind implements [`Display`] as an S-expression built from kind
//! tags, identifiers and literal values only, so two trees print identically
//! exactly when they have the same shape, wherever their nodes live in memory.
//!
//! ```text
//! (program (function int main (parameters (parameter int n)) (body (return (factor (identifier n))))))
//! ```

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{DefineDeclaration, FunctionDeclaration, GlobalDeclaration, Program},
    expressions::{Argument, ArithmeticOperator, Constant, DefineCall, Expression, Factor},
    list::NonEmptyList,
    statements::{Declaration, DefineParameter, Parameter},
    types::Type,
};

fn write_list<T: Display>(f: &mut Formatter<'_>, label: &str, list: &NonEmptyList<T>) -> Result {
    write!(f, "({}", label)?;
    for element in list {
        write!(f, " {}", element)?;
    }
    write!(f, ")")
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_list(f, "program", &self.global_declarations)
    }
}

impl Display for GlobalDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            GlobalDeclaration::Function(function) => write!(f, "{}", function),
            GlobalDeclaration::Define(define) => write!(f, "{}", define),
        }
    }
}

impl Display for FunctionDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(function {} {} ", self.return_type, self.identifier)?;
        if let Some(parameters) = &self.parameters {
            write_list(f, "parameters", parameters)?;
            write!(f, " ")?;
        }
        write_list(f, "body", &self.body)?;
        write!(f, ")")
    }
}

impl Display for DefineDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(define {} ", self.identifier)?;
        if let Some(parameters) = &self.parameters {
            write_list(f, "parameters", parameters)?;
            write!(f, " ")?;
        }
        write_list(f, "body", &self.body)?;
        write!(f, ")")
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(parameter {} {})", self.parameter_type, self.identifier)
    }
}

impl Display for DefineParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(define-parameter {})", self.identifier)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.kind.name())
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Declaration::Variable {
                declared_type,
                identifier,
            } => write!(f, "(variable {} {})", declared_type, identifier),
            Declaration::Assignment {
                declared_type: Some(declared_type),
                identifier,
                expression,
            } => write!(f, "(assignment {} {} {})", declared_type, identifier, expression),
            Declaration::Assignment {
                declared_type: None,
                identifier,
                expression,
            } => write!(f, "(assignment {} {})", identifier, expression),
            Declaration::Return { expression } => write!(f, "(return {})", expression),
            Declaration::DefineCall(call) => write!(f, "(call-statement {})", call),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Arithmetic {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator_name(operator), left, right),
            Expression::Factor(factor) => write!(f, "(factor {})", factor),
            Expression::DefineCall(call) => write!(f, "{}", call),
        }
    }
}

fn operator_name(operator: &ArithmeticOperator) -> &'static str {
    match operator {
        ArithmeticOperator::Addition => "add",
        ArithmeticOperator::Subtraction => "sub",
        ArithmeticOperator::Multiplication => "mul",
        ArithmeticOperator::Division => "div",
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Factor::Constant(constant) => write!(f, "{}", constant),
            Factor::Identifier(identifier) => write!(f, "(identifier {})", identifier),
            Factor::Parenthesized(expression) => write!(f, "(parenthesized {})", expression),
        }
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(constant {})", self.value)
    }
}

impl Display for DefineCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(define-call {}", self.identifier)?;
        if let Some(arguments) = &self.arguments {
            write!(f, " ")?;
            write_list(f, "arguments", arguments)?;
        }
        write!(f, ")")
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(argument {})", self.expression)
    }
}
