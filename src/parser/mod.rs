//! Grammar driver that builds the Abstract Syntax Tree (AST).
//!
//! This module walks a stream of tokens and fires one tree-building action
//! per reduction, in bottom-up order. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Global declarations (functions and defines)
//! - Declarations (variables, assignments, returns, define calls)
//! - Expression parsing (arithmetic, grouping, define calls, literals)
//! - Type parsing for type annotations
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
