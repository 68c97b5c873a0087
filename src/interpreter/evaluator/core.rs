use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::{Function, Scope, ScopeId},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default maximum number of nested user function calls.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// How user-defined functions bind their parameters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ScopePolicy {
    /// Every function owns one scope for its whole lifetime. All calls share
    /// it, so a recursive call overwrites the parameters of the calls still
    /// running, and bindings made by one call remain visible to the next.
    #[default]
    Persistent,
    /// Every call gets a fresh, empty scope that is dropped on return.
    PerCall,
}

/// Evaluation settings of a [`Context`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested user function calls before evaluation fails
    /// with `RecursionLimitExceeded`.
    pub recursion_limit: usize,
    /// Parameter binding strategy for user function calls.
    pub scope_policy:    ScopePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self { recursion_limit: DEFAULT_RECURSION_LIMIT,
               scope_policy:    ScopePolicy::default(), }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global scope, one persistent
/// scope per user-defined function, the call frames of a running evaluation
/// and the configuration.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating programs. Variables
/// and function definitions made by one call to [`Context::evaluate`] are
/// visible to the next, which is how the REPL keeps state between lines.
#[derive(Debug, Clone)]
pub struct Context {
    /// The global scope followed by the persistent function scopes.
    scopes: Vec<Scope>,
    /// Scopes of the calls currently running under [`ScopePolicy::PerCall`].
    frames: Vec<Scope>,
    /// Number of user function calls currently running.
    depth:  usize,
    config: Config,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with an empty global scope and the
    /// default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new evaluation context with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { scopes: vec![Scope::default()],
               frames: Vec::new(),
               depth: 0,
               config }
    }

    /// Returns the configuration of this context.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the global scope.
    #[must_use]
    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// Returns the persistent scope of the user function `name`.
    ///
    /// Under [`ScopePolicy::Persistent`] this holds the parameter bindings of
    /// the most recent call.
    #[must_use]
    pub fn function_scope(&self, name: &str) -> Option<&Scope> {
        self.global()
            .get_function(name)
            .map(|function| &self.scopes[function.scope])
    }

    /// Returns the scope identified by `id`.
    #[must_use]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        match id {
            ScopeId::Global => &self.scopes[0],
            ScopeId::Function(index) => &self.scopes[index],
            ScopeId::Frame(index) => &self.frames[index],
        }
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        match id {
            ScopeId::Global => &mut self.scopes[0],
            ScopeId::Function(index) => &mut self.scopes[index],
            ScopeId::Frame(index) => &mut self.frames[index],
        }
    }

    /// Evaluates a tree in the global scope.
    ///
    /// This is the main entry point for evaluation.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, ast::{BinaryOperator, Node}, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// let tree = Node::binary(BinaryOperator::Add, Node::Int(2), Node::Float(0.5));
    ///
    /// assert_eq!(context.evaluate(&tree).unwrap(), Number::Float(2.5));
    /// ```
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Number> {
        self.eval(node, ScopeId::Global)
    }

    /// Evaluates a node in the given scope.
    ///
    /// The evaluator dispatches based on node variant: literals, variables,
    /// unary and binary operations, assignments, calls, definitions and
    /// programs.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `scope`: Scope in which variables are read and assigned.
    ///
    /// # Returns
    /// The value of the node. A function definition evaluates to `Int(0)`.
    pub fn eval(&mut self, node: &Node, scope: ScopeId) -> EvalResult<Number> {
        match node {
            Node::Int(v) => Ok(Number::Int(*v)),
            Node::Float(v) => Ok(Number::Float(*v)),
            Node::UnaryOp { op, operand } => {
                let value = self.eval(operand, scope)?;
                Self::eval_unary(*op, value)
            },
            Node::BinaryOp { op, left, right } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                Self::eval_binary(*op, left, right)
            },
            Node::Symbol(name) => self.scope(scope)
                                      .get_variable(name)
                                      .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() }),
            Node::Assignment { target, value } => {
                let value = self.eval(value, scope)?;
                self.scope_mut(scope).set_variable(target, value);
                Ok(value)
            },
            Node::FunctionCall { name, args } => self.eval_function_call(name, args, scope),
            Node::FunctionDef(def) => {
                self.define_function(def);
                Ok(Number::Int(0))
            },
            Node::Program { statements } => self.eval_program(statements, scope),
        }
    }

    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// Side effects of every statement persist for the ones after it. An
    /// empty program evaluates to `Int(0)`.
    fn eval_program(&mut self, statements: &[Node], scope: ScopeId) -> EvalResult<Number> {
        let mut last = Number::Int(0);
        for statement in statements {
            last = self.eval(statement, scope)?;
        }
        Ok(last)
    }

    /// Registers a user-defined function in the global function table.
    ///
    /// A new function gets a fresh persistent scope. Redefining an existing
    /// function replaces its body and clears its scope in place, so no
    /// binding from earlier calls survives.
    fn define_function(&mut self, def: &FunctionDef) {
        let def = Rc::new(def.clone());

        let index = match self.global().get_function(&def.name).map(|f| f.scope) {
            Some(index) => {
                self.scopes[index] = Scope::default();
                index
            },
            None => {
                self.scopes.push(Scope::default());
                self.scopes.len() - 1
            },
        };

        let name = def.name.clone();
        self.scopes[0].set_function(&name, Function { def,
                                                      scope: index });
    }

    /// Runs `body` with the call depth raised by one.
    ///
    /// Fails with `RecursionLimitExceeded` instead of running `body` if the
    /// limit is already reached. The depth is restored whether `body`
    /// succeeds or not.
    pub(crate) fn nested<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        if self.depth >= self.config.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded { limit: self.config.recursion_limit });
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Pushes a fresh call frame and returns its id.
    pub(crate) fn push_frame(&mut self) -> ScopeId {
        self.frames.push(Scope::default());
        ScopeId::Frame(self.frames.len() - 1)
    }

    /// Drops the most recently pushed call frame.
    pub(crate) fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Binds a parameter in the callee's scope.
    pub(crate) fn bind(&mut self, scope: ScopeId, name: &str, value: Number) {
        self.scope_mut(scope).set_variable(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn def(name: &str, params: &[&str], body: Node) -> Node {
        Node::FunctionDef(FunctionDef { name:   name.to_string(),
                                        params: params.iter().map(ToString::to_string).collect(),
                                        body:   Box::new(body), })
    }

    #[test]
    fn assignment_evaluates_to_the_assigned_value() {
        let mut context = Context::new();
        let assign = Node::Assignment { target: "x".to_string(),
                                        value:  Box::new(Node::Float(1.5)), };

        assert_eq!(context.evaluate(&assign).unwrap(), Number::Float(1.5));
        assert_eq!(context.global().get_variable("x"), Some(Number::Float(1.5)));
    }

    #[test]
    fn definition_evaluates_to_zero_and_creates_a_scope() {
        let mut context = Context::new();
        let node = def("f", &["x"], Node::Symbol("x".to_string()));

        assert_eq!(context.evaluate(&node).unwrap(), Number::Int(0));
        assert!(context.function_scope("f").unwrap().is_empty());
        assert!(context.function_scope("g").is_none());
    }

    #[test]
    fn redefinition_reuses_the_scope_slot() {
        let mut context = Context::new();
        context.evaluate(&def("f", &[], Node::Int(1))).unwrap();
        context.evaluate(&def("f", &[], Node::Int(2))).unwrap();

        assert_eq!(context.scopes.len(), 2);
    }

    #[test]
    fn empty_program_is_zero() {
        let mut context = Context::new();
        let program = Node::Program { statements: vec![] };
        assert_eq!(context.evaluate(&program).unwrap(), Number::Int(0));
    }

    #[test]
    fn left_operand_is_evaluated_first() {
        let mut context = Context::new();
        let left = Node::Assignment { target: "a".to_string(),
                                      value:  Box::new(Node::Int(3)), };
        let tree = Node::binary(BinaryOperator::Mul, left, Node::Symbol("a".to_string()));

        assert_eq!(context.evaluate(&tree).unwrap(), Number::Int(9));
    }

    #[test]
    fn depth_is_restored_after_failure() {
        let mut context = Context::with_config(Config { recursion_limit: 1,
                                                        ..Config::default() });
        let failed: EvalResult<()> = context.nested(|_| Err(RuntimeError::DivisionByZero));
        assert_eq!(failed, Err(RuntimeError::DivisionByZero));
        assert_eq!(context.depth, 0);

        let nested = context.nested(|inner| inner.nested(|_| Ok(())));
        assert_eq!(nested, Err(RuntimeError::RecursionLimitExceeded { limit: 1 }));
        assert_eq!(context.depth, 0);
    }
}
