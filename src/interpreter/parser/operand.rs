use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::builtin_arity,
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_DEPTH, ParseResult},
            expression::parse_expression,
            utils::{expect_closing_paren, parse_comma_separated},
        },
    },
};

/// Returns `true` if the token can begin an operand.
#[must_use]
pub const fn starts_operand(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Int
             | TokenKind::Float
             | TokenKind::Symbol
             | TokenKind::LParen
             | TokenKind::Plus
             | TokenKind::Minus)
}

/// Parses an operand, with an optional prefix operator.
///
/// Grammar:
/// ```text
/// operand := ("+" | "-") operand
///          | number
///          | symbol
///          | symbol "(" [expr ("," expr)*] ")"
///          | "(" expr ")"
/// ```
///
/// Each group, call and prefix operator parses its contents one level deeper
/// than `depth`.
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an operand.
/// - `UnexpectedEndOfInput` if there is no next token.
/// - `NestingTooDeep` if `depth` exceeds [`MAX_DEPTH`].
pub fn parse_operand<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }

    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match token.kind {
        TokenKind::Plus | TokenKind::Minus => {
            tokens.next();
            let op = if token.kind == TokenKind::Plus {
                UnaryOperator::Plus
            } else {
                UnaryOperator::Minus
            };
            let operand = parse_operand_after(tokens, token.position, depth + 1)?;
            Ok(Node::unary(op, operand))
        },
        TokenKind::Int => {
            tokens.next();
            token.text
                 .parse()
                 .map(Node::Int)
                 .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.clone() })
        },
        TokenKind::Float => {
            tokens.next();
            token.text
                 .parse()
                 .map(Node::Float)
                 .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.clone() })
        },
        TokenKind::Symbol => {
            tokens.next();
            match tokens.peek() {
                Some(next) if next.kind == TokenKind::LParen => parse_call(tokens, &token.text, depth),
                _ => Ok(Node::Symbol(token.text.clone())),
            }
        },
        TokenKind::LParen => parse_group(tokens, depth),
        _ => Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                               position: token.position, }),
    }
}

/// Parses the operand that must follow an operator at `position`.
///
/// # Errors
/// `MissingOperand` if the input ends or the next token cannot start an
/// operand.
pub fn parse_operand_after<'a, I>(tokens: &mut Peekable<I>,
                                  position: usize,
                                  depth: usize)
                                  -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if starts_operand(token.kind) => parse_operand(tokens, depth),
        _ => Err(ParseError::MissingOperand { position }),
    }
}

/// Parses `"(" expr ")"` and returns the inner expression.
pub fn parse_group<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let open = match tokens.next() {
        Some(token) if token.kind == TokenKind::LParen => token.position,
        Some(token) => {
            return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                     position: token.position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let inner = parse_expression(tokens, depth + 1)?;
    expect_closing_paren(tokens, open)?;
    Ok(inner)
}

/// Parses the argument list of a call to `name`.
///
/// Builtins have a fixed arity which is checked here, before evaluation.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, name: &str, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let open = tokens.next().map_or(0, |token| token.position);
    let args = parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth + 1), open)?;

    if let Some(expected) = builtin_arity(name)
       && expected != args.len()
    {
        return Err(ParseError::BuiltinArity { name: name.to_string(),
                                              expected,
                                              found: args.len() });
    }

    Ok(Node::FunctionCall { name: name.to_string(),
                            args })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn operand(source: &str) -> ParseResult<Node> {
        let tokens = tokenize(source).unwrap();
        parse_operand(&mut tokens.iter().peekable(), 0)
    }

    #[test]
    fn calls_collect_arguments_in_order() {
        assert_eq!(operand("gcd(12, x)").unwrap(),
                   Node::FunctionCall { name: "gcd".to_string(),
                                        args: vec![Node::Int(12), Node::Symbol("x".to_string())], });
    }

    #[test]
    fn user_calls_may_have_no_arguments() {
        assert_eq!(operand("f()").unwrap(),
                   Node::FunctionCall { name: "f".to_string(),
                                        args: vec![] });
    }

    #[test]
    fn builtin_arity_is_checked_while_parsing() {
        assert_eq!(operand("sqrt(1, 2)"),
                   Err(ParseError::BuiltinArity { name:     "sqrt".to_string(),
                                                  expected: 1,
                                                  found:    2, }));
        assert!(matches!(operand("min(1)"), Err(ParseError::BuiltinArity { .. })));
    }

    #[test]
    fn prefix_operators_nest() {
        assert_eq!(operand("-+3").unwrap(),
                   Node::unary(UnaryOperator::Minus, Node::unary(UnaryOperator::Plus, Node::Int(3))));
    }

    #[test]
    fn oversized_integer_literal() {
        assert!(matches!(operand("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { .. })));
    }

    #[test]
    fn prefix_chains_are_bounded() {
        let deep = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert_eq!(operand(&deep), Err(ParseError::NestingTooDeep { limit: MAX_DEPTH }));

        let shallow = format!("{}1", "-".repeat(MAX_DEPTH - 1));
        assert!(operand(&shallow).is_ok());
    }

    #[test]
    fn unclosed_call() {
        assert!(matches!(operand("max(1, 2"), Err(ParseError::MismatchedParenthesis { .. })));
    }
}
