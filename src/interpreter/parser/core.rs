use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{definition::parse_function_def, expression::parse_expression},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of groups, calls and prefix operators, and at the same
/// time the maximum height of an expression tree. Keeps both the parser and
/// the evaluator well inside the stack.
pub const MAX_DEPTH: usize = 512;

/// Parses a whole program.
///
/// Grammar: `program := statement (";" statement)*`
///
/// Every token must be consumed; anything left after the last statement is
/// an error for the entire program.
///
/// # Example
/// ```
/// use calcite::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("x = 1; x").unwrap();
/// let Node::Program { statements } = parse_program(&tokens).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let mut statements = vec![parse_statement(&mut iter)?];

    while let Some(token) = iter.next() {
        if token.kind != TokenKind::Semicolon {
            return Err(ParseError::UnexpectedTrailingTokens { token:    token.text.clone(),
                                                              position: token.position, });
        }
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Node::Program { statements })
}

/// Parses one statement.
///
/// Grammar: `statement := funcdef | expr`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::Def => parse_function_def(tokens),
        Some(_) => parse_expression(tokens, 0),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
