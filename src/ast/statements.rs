use super::{
    expressions::{DefineCall, Expression},
    list::NonEmptyList,
    types::Type,
};

/// Declaration Kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Variable,
    Assignment,
    Return,
    DefineCall,
}

/// A statement inside a function or define body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `int x;`
    Variable {
        declared_type: Type,
        identifier: String,
    },
    /// `int x = e;` or `x = e;`
    Assignment {
        declared_type: Option<Type>,
        identifier: String,
        expression: Expression,
    },
    /// `return e;`
    Return { expression: Expression },
    /// `f(a, b);`
    DefineCall(DefineCall),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Variable { .. } => DeclarationKind::Variable,
            Declaration::Assignment { .. } => DeclarationKind::Assignment,
            Declaration::Return { .. } => DeclarationKind::Return,
            Declaration::DefineCall(_) => DeclarationKind::DefineCall,
        }
    }

    /// The identifier the declaration introduces or assigns, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Declaration::Variable { identifier, .. } => Some(identifier),
            Declaration::Assignment { identifier, .. } => Some(identifier),
            Declaration::Return { .. } => None,
            Declaration::DefineCall(call) => Some(&call.identifier),
        }
    }
}

pub type DeclarationList = NonEmptyList<Declaration>;

/// Typed formal argument of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub identifier: String,
    pub parameter_type: Type,
}

pub type ParameterList = NonEmptyList<Parameter>;

/// Untyped formal argument of a define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineParameter {
    pub identifier: String,
}

pub type DefineParameterList = NonEmptyList<DefineParameter>;
