/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Statement and literal nodes, including the root
/// - types: Type expressions attached to definitions
pub mod ast;
pub mod types;
