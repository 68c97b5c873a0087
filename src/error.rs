/// Lexing errors.
///
/// Raised when the source contains a character that starts no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all structural errors detected while turning tokens into a tree:
/// mismatched parentheses, missing operands, malformed definitions and
/// builtin calls with the wrong number of arguments.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, domain errors, unknown names and arity mismatches.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// Every error aborts the whole program it was raised in; the caller decides
/// whether to keep going with further, independent inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
