/// Binary operator evaluation logic.
///
/// Handles arithmetic under the promotion rule, division and modulo by zero,
/// exponentiation and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity and arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and its
/// configuration.
pub mod core;

/// Variable and function binding tables.
pub mod scope;

/// Function evaluation.
///
/// Handles user-defined and builtin function calls, argument checking, and
/// return value computation.
pub mod function;
