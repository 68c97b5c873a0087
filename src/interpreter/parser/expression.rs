use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node, precedence},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_DEPTH, ParseResult},
            operand::{parse_group, parse_operand, parse_operand_after},
        },
    },
};

/// An infix operator as seen by the insertion rule.
///
/// Assignment takes part in precedence ordering like any other operator and
/// is only turned into [`Node::Assignment`] once the expression is complete.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Infix {
    /// An operator that stays a [`Node::BinaryOp`].
    Binary(BinaryOperator),
    /// `=`
    Assign,
}

impl Infix {
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Binary(op) => op.precedence(),
            Self::Assign => precedence::ASSIGN,
        }
    }
}

/// Maps a token kind to its infix operator.
///
/// # Example
/// ```
/// use calcite::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::TokenKind,
///         parser::expression::{Infix, token_to_infix},
///     },
/// };
///
/// assert_eq!(token_to_infix(TokenKind::Caret), Some(Infix::Binary(BinaryOperator::Pow)));
/// assert_eq!(token_to_infix(TokenKind::Equals), Some(Infix::Assign));
/// assert_eq!(token_to_infix(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix(kind: TokenKind) -> Option<Infix> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::Caret => BinaryOperator::Pow,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::Equals => return Some(Infix::Assign),
        _ => return None,
    };
    Some(Infix::Binary(op))
}

/// The tree under construction.
///
/// Operands are sealed: parenthesised groups, calls and prefix operators are
/// never reopened by a later operator. Only operator nodes created while
/// parsing the current expression can receive a tighter operator on their
/// right side.
#[derive(Debug)]
enum Subtree {
    Sealed {
        node:   Node,
        height: usize,
    },
    Operator {
        op:     Infix,
        left:   Box<Self>,
        right:  Box<Self>,
        height: usize,
    },
}

impl Subtree {
    fn sealed(node: Node) -> Self {
        let height = node.height();
        Self::Sealed { node, height }
    }

    fn operator(op: Infix, left: Self, right: Self) -> Self {
        let height = 1 + left.height().max(right.height());
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         height }
    }

    const fn height(&self) -> usize {
        match self {
            Self::Sealed { height, .. } | Self::Operator { height, .. } => *height,
        }
    }

    /// Inserts `op` with `operand` as its right child.
    ///
    /// If the root binds looser than `op`, the new operator takes the root's
    /// right child as its left child and replaces it; this continues down the
    /// right spine. Otherwise `op` becomes the new root with the whole tree on
    /// its left, which makes equal precedence associate to the left.
    ///
    /// The descent only continues through strictly increasing precedence, so
    /// its depth is bounded by the number of precedence levels.
    fn insert(self, op: Infix, operand: Self) -> Self {
        match self {
            Self::Operator { op: root,
                             left,
                             right,
                             .. }
                if root.precedence() < op.precedence() =>
            {
                Self::operator(root, *left, right.insert(op, operand))
            },
            tree => Self::operator(op, tree, operand),
        }
    }

    fn into_node(self) -> ParseResult<Node> {
        match self {
            Self::Sealed { node, .. } => Ok(node),
            Self::Operator { op: Infix::Binary(op),
                             left,
                             right,
                             .. } => Ok(Node::binary(op, left.into_node()?, right.into_node()?)),
            Self::Operator { op: Infix::Assign,
                             left,
                             right,
                             .. } => match *left {
                Self::Sealed { node: Node::Symbol(target),
                               .. } => {
                    Ok(Node::Assignment { target,
                                          value: Box::new(right.into_node()?) })
                },
                _ => Err(ParseError::InvalidAssignmentTarget),
            },
        }
    }
}

/// Parses an expression.
///
/// Grammar: `expr := operand (operator operand | "(" expr ")")*`
///
/// Each operator read after the tree built so far is placed with
/// [`Subtree::insert`]. A parenthesised group directly following an operand
/// is an implicit multiplication, so `4(2 + 1)(1)` reads as
/// `4 * (2 + 1) * (1)`.
///
/// `depth` counts the groups, calls and prefix operators enclosing the
/// expression; top-level statements start at `0`.
///
/// # Errors
/// `NestingTooDeep` once `depth` plus the height of the tree exceeds
/// [`MAX_DEPTH`], along with the errors of [`parse_operand`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token>
{
    let mut tree = Subtree::sealed(parse_operand(tokens, depth)?);

    while let Some(token) = tokens.peek() {
        if token.kind == TokenKind::LParen {
            let group = parse_group(tokens, depth)?;
            tree = tree.insert(Infix::Binary(BinaryOperator::Mul), Subtree::sealed(group));
        } else {
            let Some(op) = token_to_infix(token.kind) else {
                break;
            };
            let position = token.position;
            tokens.next();

            let operand = parse_operand_after(tokens, position, depth)?;
            tree = tree.insert(op, Subtree::sealed(operand));
        }

        if depth + tree.height() > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
        }
    }

    tree.into_node()
}
