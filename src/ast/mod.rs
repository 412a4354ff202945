/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root and global declarations
/// - expressions: Expressions, factors, constants and define calls
/// - statements: Declarations and formal parameters
/// - types: Declared types
/// - list: The non-empty list every grammar list is built on
/// - destroy: One teardown operation per node kind
/// - printer: Address-free shape serialization of a tree
pub mod ast;
pub mod destroy;
pub mod expressions;
pub mod list;
pub mod printer;
pub mod statements;
pub mod types;
