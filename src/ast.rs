/// Binding strength of every operator, as used by the parser's insertion
/// rule. Higher binds tighter.
pub mod precedence {
    /// `=`
    pub const ASSIGN: u8 = 2;
    /// `==`
    pub const EQUALITY: u8 = 8;
    /// `+` and `-`
    pub const ADDITIVE: u8 = 11;
    /// `*`, `/` and `%`
    pub const MULTIPLICATIVE: u8 = 12;
    /// `^`
    pub const EXPONENT: u8 = 13;
    /// Prefix `+` and `-`.
    pub const UNARY: u8 = 14;
}

/// An abstract syntax tree node.
///
/// Every node owns its children exclusively; trees are built once by the
/// parser, walked once by the evaluator and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer literal such as `42`.
    Int(i64),
    /// A floating-point literal such as `2.5`.
    Float(f64),
    /// A prefix operator applied to one operand.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix arithmetic or equality operator.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A variable reference.
    Symbol(String),
    /// `target = value`
    Assignment {
        /// Name of the variable being bound.
        target: String,
        /// The expression whose value is bound.
        value:  Box<Self>,
    },
    /// A call to a builtin or user-defined function.
    FunctionCall {
        /// Name of the callee.
        name: String,
        /// Argument expressions in call order.
        args: Vec<Self>,
    },
    /// `def name(params) = body`
    FunctionDef(FunctionDef),
    /// A `;`-separated sequence of statements.
    Program {
        /// Statements in source order.
        statements: Vec<Self>,
    },
}

/// A user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The function name.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   Box<Node>,
}

/// Infix operators that survive into the final tree.
///
/// Assignment is not listed here: it is parsed as an operator but stored as
/// [`Node::Assignment`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equality (`==`)
    Equal,
}

/// Prefix operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// # Example
    /// ```
    /// use calcite::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Mod.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Equal => precedence::EQUALITY,
            Self::Add | Self::Sub => precedence::ADDITIVE,
            Self::Mul | Self::Div | Self::Mod => precedence::MULTIPLICATIVE,
            Self::Pow => precedence::EXPONENT,
        }
    }
}

impl UnaryOperator {
    /// Unary operators bind tighter than every binary operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        precedence::UNARY
    }
}

impl Node {
    /// Builds a binary node from its parts.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a unary node from its parts.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Returns the number of direct children of the node.
    ///
    /// A function definition counts its body only; parameters are names, not
    /// nodes.
    ///
    /// # Example
    /// ```
    /// use calcite::ast::{BinaryOperator, Node};
    ///
    /// let sum = Node::binary(BinaryOperator::Add, Node::Int(1), Node::Int(2));
    /// assert_eq!(sum.child_count(), 2);
    /// assert_eq!(Node::Int(1).child_count(), 0);
    /// ```
    #[must_use]
    pub fn child_count(&self) -> usize {
        match self {
            Self::Int(_) | Self::Float(_) | Self::Symbol(_) => 0,
            Self::UnaryOp { .. } | Self::Assignment { .. } | Self::FunctionDef(_) => 1,
            Self::BinaryOp { .. } => 2,
            Self::FunctionCall { args, .. } => args.len(),
            Self::Program { statements } => statements.len(),
        }
    }

    /// Returns `true` for nodes produced by an operator token: unary,
    /// binary and assignment nodes.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }

    /// Returns the precedence of an operator node, `None` for operands.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::UnaryOp { op, .. } => Some(op.precedence()),
            Self::BinaryOp { op, .. } => Some(op.precedence()),
            Self::Assignment { .. } => Some(precedence::ASSIGN),
            _ => None,
        }
    }

    /// Returns the number of levels in the tree rooted at this node; a leaf
    /// has height `1`.
    ///
    /// # Example
    /// ```
    /// use calcite::ast::{BinaryOperator, Node};
    ///
    /// let nested = Node::binary(BinaryOperator::Add,
    ///                           Node::Int(1),
    ///                           Node::binary(BinaryOperator::Mul, Node::Int(2), Node::Int(3)));
    /// assert_eq!(nested.height(), 3);
    /// assert_eq!(Node::Int(1).height(), 1);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.children()
                .into_iter()
                .map(Self::height)
                .max()
                .unwrap_or(0)
    }

    /// Short label of the node kind, used by the tree dump and the graph
    /// export.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Int(v) => format!("Int({v})"),
            Self::Float(v) => format!("Float({v})"),
            Self::UnaryOp { op, .. } => format!("Unary({op})"),
            Self::BinaryOp { op, .. } => format!("Binary({op})"),
            Self::Symbol(name) => format!("Symbol({name})"),
            Self::Assignment { target, .. } => format!("Assign({target})"),
            Self::FunctionCall { name, .. } => format!("Call({name})"),
            Self::FunctionDef(def) => format!("Def({}({}))", def.name, def.params.join(", ")),
            Self::Program { .. } => "Program".to_string(),
        }
    }

    /// Returns references to the direct children, in evaluation order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Int(_) | Self::Float(_) | Self::Symbol(_) => Vec::new(),
            Self::UnaryOp { operand, .. } => vec![&**operand],
            Self::BinaryOp { left, right, .. } => vec![&**left, &**right],
            Self::Assignment { value, .. } => vec![&**value],
            Self::FunctionCall { args, .. } => args.iter().collect(),
            Self::FunctionDef(def) => vec![&*def.body],
            Self::Program { statements } => statements.iter().collect(),
        }
    }
}

/// Renders the tree as `Label -> {child, child}`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())?;
        if self.child_count() == 0 {
            return Ok(());
        }

        write!(f, " -> {{")?;
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
