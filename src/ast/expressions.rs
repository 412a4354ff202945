use super::list::NonEmptyList;

/// Arithmetic operators an [`Expression::Arithmetic`] node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Expression Kinds
///
/// The tag of an [`Expression`], one per arithmetic operator plus the two leaf shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Factor,
    DefineCall,
}

/// Value-producing node.
///
/// Arithmetic operands are boxed so that each operand is owned by exactly one
/// parent and can be moved out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Arithmetic {
        operator: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Factor(Factor),
    DefineCall(DefineCall),
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Arithmetic { operator, .. } => match operator {
                ArithmeticOperator::Addition => ExpressionKind::Addition,
                ArithmeticOperator::Subtraction => ExpressionKind::Subtraction,
                ArithmeticOperator::Multiplication => ExpressionKind::Multiplication,
                ArithmeticOperator::Division => ExpressionKind::Division,
            },
            Expression::Factor(_) => ExpressionKind::Factor,
            Expression::DefineCall(_) => ExpressionKind::DefineCall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Constant,
    Identifier,
    Parenthesized,
}

/// Expression leaf: a literal, an identifier, or a parenthesized sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    Constant(Constant),
    Identifier(String),
    Parenthesized(Box<Expression>),
}

impl Factor {
    pub fn kind(&self) -> FactorKind {
        match self {
            Factor::Constant(_) => FactorKind::Constant,
            Factor::Identifier(_) => FactorKind::Identifier,
            Factor::Parenthesized(_) => FactorKind::Parenthesized,
        }
    }
}

/// Integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub value: i32,
}

/// Invocation of a `define` by name.
///
/// Shared by the statement form and the expression form of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineCall {
    pub identifier: String,
    /// `None` for `f()`
    pub arguments: Option<ArgumentList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub expression: Expression,
}

pub type ArgumentList = NonEmptyList<Argument>;
