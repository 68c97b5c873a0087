use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items up to and including `)`.
///
/// The opening parenthesis must already be consumed; `open` is its position
/// and is reported if the list is never closed. An immediate `)` produces an
/// empty list.
///
/// Grammar (simplified): `list := [item ("," item)*] ")"`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing parenthesis.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::RParen
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == TokenKind::RParen => break,
            Some(token) => {
                return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                         position: token.position, });
            },
            None => return Err(ParseError::MismatchedParenthesis { position: open }),
        }
    }
    Ok(items)
}

/// Consumes the `)` matching the `(` at `open`.
///
/// # Errors
/// `MismatchedParenthesis` if the next token is anything else or the input
/// ends.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  open: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::RParen => {
            tokens.next();
            Ok(())
        },
        Some(token) => Err(ParseError::MismatchedParenthesis { position: token.position }),
        None => Err(ParseError::MismatchedParenthesis { position: open }),
    }
}

/// Consumes a token of the given kind, or fails with
/// `InvalidFunctionDefinition` describing what was `expected`.
pub(in crate::interpreter::parser) fn expect_in_definition<'a, I>(tokens: &mut Peekable<I>,
                                                                  kind: TokenKind,
                                                                  expected: &str)
                                                                  -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(ParseError::InvalidFunctionDefinition { details:  format!("expected {expected} but found '{}'",
                                                                                     token.text),
                                                                   position: token.position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
