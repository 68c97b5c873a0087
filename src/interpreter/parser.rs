/// Program and statement parsing.
///
/// Entry point of the parser: splits the token stream on `;`, dispatches
/// each statement and rejects leftover tokens.
pub mod core;

/// Function definitions.
///
/// Parses `def name(params) = body` statements.
pub mod definition;

/// The precedence engine.
///
/// Builds expression trees by inserting each operator into the tree built so
/// far, without an explicit operator stack.
pub mod expression;

/// Operands: numbers, variables, calls, parenthesised groups and prefix
/// operators.
pub mod operand;

/// Shared helpers for comma-separated lists and token expectations.
pub mod utils;
