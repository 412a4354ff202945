use super::{
    list::NonEmptyList,
    statements::{DeclarationList, DefineParameterList, ParameterList},
    types::Type,
};

/// Whole parsed unit, the root of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub global_declarations: GlobalDeclarationList,
}

/// Global Declaration Kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalDeclarationKind {
    Function,
    Define,
}

/// Top-level item of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalDeclaration {
    Function(FunctionDeclaration),
    Define(DefineDeclaration),
}

impl GlobalDeclaration {
    pub fn kind(&self) -> GlobalDeclarationKind {
        match self {
            GlobalDeclaration::Function(_) => GlobalDeclarationKind::Function,
            GlobalDeclaration::Define(_) => GlobalDeclarationKind::Define,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            GlobalDeclaration::Function(function) => &function.identifier,
            GlobalDeclaration::Define(define) => &define.identifier,
        }
    }
}

pub type GlobalDeclarationList = NonEmptyList<GlobalDeclaration>;

/// `int name(int a, int b) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub identifier: String,
    pub return_type: Type,
    /// `None` for `int name()`
    pub parameters: Option<ParameterList>,
    pub body: DeclarationList,
}

/// `define name(a, b) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineDeclaration {
    pub identifier: String,
    /// `None` for `define name()`
    pub parameters: Option<DefineParameterList>,
    pub body: DeclarationList,
}
