//! Type annotations for the AST.
//!
//! The language currently declares a single type, `int`. The tag is kept as
//! an enum so that further types extend the match arms instead of the node
//! shapes.

/// Represents the builtin types a declaration may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int,
}

impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Int => "int",
        }
    }
}

/// A declared type, owned by the parameter, declaration or function that names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
}

impl Type {
    pub fn int() -> Self {
        Type { kind: TypeKind::Int }
    }
}
