use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// The first error aborts the parse of the whole program; there is no
/// recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that cannot appear at this point.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while a statement was incomplete.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A `(` was never closed.
    #[error("Mismatched parenthesis: expected ')' at position {position}.")]
    MismatchedParenthesis {
        /// Byte offset where the closing parenthesis was expected.
        position: usize,
    },
    /// An operator is not followed by an operand.
    #[error("Missing operand at position {position}.")]
    MissingOperand {
        /// Byte offset where the operand was expected.
        position: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Leftover tokens starting with '{token}' at position {position}.")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A builtin was called with the wrong number of arguments.
    #[error("Builtin '{name}' expects {expected} argument(s) but got {found}.")]
    BuiltinArity {
        /// The builtin name.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The left side of `=` is not a plain variable name.
    #[error("Cannot assign a value to anything but a variable name.")]
    InvalidAssignmentTarget,
    /// The `def` syntax was malformed.
    #[error("Invalid function definition at position {position}: {details}. Example: def f(x) = x * x")]
    InvalidFunctionDefinition {
        /// What was wrong.
        details:  String,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// Tried to define a function that shadows a builtin.
    #[error("'{name}' is a builtin function and cannot be redefined.")]
    ReservedName {
        /// The reserved name.
        name: String,
    },
    /// A parameter name appears twice in one definition.
    #[error("Parameter '{name}' is declared more than once.")]
    DuplicateParameter {
        /// The repeated name.
        name: String,
    },
    /// An expression is nested, or chains operators, beyond the supported
    /// depth.
    #[error("Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum depth.
        limit: usize,
    },
    /// A literal does not fit its numeric type.
    #[error("Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal: String,
    },
}
