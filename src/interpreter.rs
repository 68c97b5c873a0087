/// The evaluator module walks the AST and computes results.
///
/// # Responsibilities
/// - Evaluates every node kind under the numeric promotion rules.
/// - Manages the global scope and the scope owned by each user function.
/// - Dispatches builtin calls and reports runtime errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens:
/// numbers, names, the `def` keyword, operators and punctuation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Splits the token stream into `;`-separated statements.
/// - Orders operators by precedence with the insertion rule.
/// - Validates function definitions and builtin call arity.
pub mod parser;
/// The value module defines the numeric result type of an evaluation.
pub mod value;
