use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Division or modulo by a zero divisor, integer or float.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A builtin or operator was applied outside its domain.
    #[error("Domain error: {details}.")]
    DomainError {
        /// Which operation failed and why.
        details: String,
    },
    /// Tried to read a variable that is not bound in the current scope.
    #[error("Undeclared variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither builtin nor defined.
    #[error("Unknown function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A user function was called with the wrong number of arguments.
    #[error("Invalid number of arguments for function '{name}': expected {expected} but got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// User function calls nested deeper than the configured limit.
    #[error("Recursion limit of {limit} nested calls exceeded.")]
    RecursionLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}

impl RuntimeError {
    pub(crate) fn domain(details: impl Into<String>) -> Self {
        Self::DomainError { details: details.into() }
    }
}
