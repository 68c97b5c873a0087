//! # calcite
//!
//! calcite is an arithmetic expression interpreter written in Rust.
//! It tokenizes, parses and evaluates programs made of `;`-separated
//! statements with integer and float arithmetic, variables, user-defined
//! functions and a small builtin math library.
//!
//! ```
//! assert_eq!(calcite::evaluate("def sq(x) = x * x; sq(4)").unwrap(), calcite::Number::Int(16));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum, the operator enums and the
/// precedence table. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Classifies operator nodes and reports their precedence and arity.
/// - Renders trees for debugging.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase and an umbrella [`Error`].
/// - Carries source positions for lexing and parsing failures.
pub mod error;
/// Graphviz export of syntax trees.
pub mod graph;
/// Case-file runner shared by the `--check` command and the test suite.
///
/// A case file holds one `input ~ expected` pair per line.
pub mod harness;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the numeric
/// result type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Convert integers to floats for promotion.
/// - Provide the gamma function, checked factorial and Fibonacci, primality
///   and gcd used by the builtins.
pub mod util;

pub use error::Error;
pub use interpreter::{
    evaluator::core::{Config, Context, ScopePolicy},
    value::Number,
};

use crate::{
    ast::Node,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};

/// Tokenizes and parses a program.
///
/// # Example
/// ```
/// use calcite::{ast::Node, parse};
///
/// let Node::Program { statements } = parse("x = 2; x ^ 2").unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(statements.len(), 2);
/// assert!(parse("1 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Evaluates a program in a fresh [`Interpreter`] and returns the value of
/// its last statement.
///
/// # Examples
/// ```
/// use calcite::{Number, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Int(14));
/// assert_eq!(evaluate("x = 5; x + 1").unwrap(), Number::Int(6));
///
/// // 'y' is not defined
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Number, Error> {
    Interpreter::new().eval(source)
}

/// An interpreter session.
///
/// The session owns one [`Context`], so variables and functions defined by
/// one call to [`Interpreter::eval`] stay visible to the next. A failed
/// program leaves the bindings made before the failing statement in place.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { context: Context::with_config(config) }
    }

    /// Parses and evaluates a program.
    ///
    /// # Example
    /// ```
    /// use calcite::{Interpreter, Number};
    ///
    /// let mut session = Interpreter::new();
    /// session.eval("def double(x) = 2x").unwrap_err();
    /// session.eval("def double(x) = 2 * x").unwrap();
    /// assert_eq!(session.eval("double(21)").unwrap(), Number::Int(42));
    /// ```
    pub fn eval(&mut self, source: &str) -> Result<Number, Error> {
        let tree = parse(source)?;
        self.eval_tree(&tree)
    }

    /// Evaluates an already parsed tree in the global scope.
    pub fn eval_tree(&mut self, tree: &Node) -> Result<Number, Error> {
        Ok(self.context.evaluate(tree)?)
    }

    /// Returns the session's evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }
}
