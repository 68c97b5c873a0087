use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::{
        evaluator::function::core::is_builtin,
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, expression::parse_expression, utils::expect_in_definition},
    },
};

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     def <name> ( [<param> (, <param>)*] ) = <expr>
/// ```
///
/// # Errors
/// - `InvalidFunctionDefinition` if any part of the header is malformed.
/// - `ReservedName` if the name belongs to a builtin.
/// - `DuplicateParameter` if a parameter is listed twice.
/// - `UnexpectedEndOfInput` if the body is missing.
pub fn parse_function_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    expect_in_definition(tokens, TokenKind::Def, "'def'")?;
    let name = expect_in_definition(tokens, TokenKind::Symbol, "a function name")?.text
                                                                                   .clone();
    if is_builtin(&name) {
        return Err(ParseError::ReservedName { name });
    }

    expect_in_definition(tokens, TokenKind::LParen, "'('")?;
    let params = parse_params(tokens)?;
    expect_in_definition(tokens, TokenKind::Equals, "'='")?;

    let body = parse_expression(tokens, 0)?;

    Ok(Node::FunctionDef(FunctionDef { name,
                                       params,
                                       body: Box::new(body) }))
}

/// Parses the parameter names up to and including `)`.
fn parse_params<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Token>
{
    let mut params: Vec<String> = Vec::new();

    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::RParen
    {
        tokens.next();
        return Ok(params);
    }

    loop {
        let param = expect_in_definition(tokens, TokenKind::Symbol, "a parameter name")?;
        if params.contains(&param.text) {
            return Err(ParseError::DuplicateParameter { name: param.text.clone() });
        }
        params.push(param.text.clone());

        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == TokenKind::RParen => return Ok(params),
            Some(token) => {
                return Err(ParseError::InvalidFunctionDefinition { details:  format!("expected ',' or ')' but found '{}'",
                                                                                     token.text),
                                                                   position: token.position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
}
