use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, ScopePolicy},
            function::builtin,
            scope::ScopeId,
        },
        value::Number,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against its arity.
type BuiltinFn = fn(&[Number]) -> EvalResult<Number>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"    => { arity: 1, func: builtin::sqrt },
    "facto"   => { arity: 1, func: builtin::facto },
    "fibo"    => { arity: 1, func: builtin::fibo },
    "min"     => { arity: 2, func: builtin::min },
    "max"     => { arity: 2, func: builtin::max },
    "isprime" => { arity: 1, func: builtin::isprime },
    "gcd"     => { arity: 2, func: builtin::gcd },
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns `true` if `name` is a builtin function.
///
/// # Example
/// ```
/// use calcite::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("gcd"));
/// assert!(!is_builtin("square"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

/// Returns the number of arguments the builtin `name` takes, or `None` if
/// there is no such builtin.
#[must_use]
pub fn builtin_arity(name: &str) -> Option<usize> {
    lookup(name).map(|b| b.arity)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin. If so,
    /// it evaluates the arguments, verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Argument expressions.
    /// - `scope`: The caller's scope, in which the arguments are evaluated.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or evaluation fails.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              args: &[Node],
                              scope: ScopeId)
                              -> EvalResult<Number> {
        if let Some(builtin) = lookup(name) {
            if args.len() != builtin.arity {
                return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                         expected: builtin.arity,
                                                         found:    args.len(), });
            }
            let values = self.eval_arguments(args, scope)?;
            return (builtin.func)(&values);
        }

        self.call_user_defined_function(name, args, scope)
    }

    fn eval_arguments(&mut self, args: &[Node], scope: ScopeId) -> EvalResult<Vec<Number>> {
        args.iter().map(|arg| self.eval(arg, scope)).collect()
    }

    /// Executes a user-defined function.
    ///
    /// The function is resolved in the global function table, so it can be
    /// called from any scope including its own body. The arguments are
    /// evaluated left to right in the caller's scope, then bound to the
    /// parameters in the callee's scope: the function's persistent scope, or
    /// a fresh frame under [`ScopePolicy::PerCall`]. The body is evaluated in
    /// that scope.
    ///
    /// # Errors
    /// - `UndefinedFunction` for an unknown name.
    /// - `ArityMismatch` for a wrong number of arguments.
    /// - `RecursionLimitExceeded` if the call would nest too deeply.
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  args: &[Node],
                                  scope: ScopeId)
                                  -> EvalResult<Number> {
        let function = self.global()
                           .get_function(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;

        if args.len() != function.def.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: function.def.params.len(),
                                                     found:    args.len(), });
        }

        let values = self.eval_arguments(args, scope)?;

        self.nested(|context| {
                let (callee, frame) = match context.config().scope_policy {
                    ScopePolicy::Persistent => (ScopeId::Function(function.scope), false),
                    ScopePolicy::PerCall => (context.push_frame(), true),
                };

                for (param, value) in function.def.params.iter().zip(values) {
                    context.bind(callee, param, value);
                }
                let result = context.eval(&function.def.body, callee);

                if frame {
                    context.pop_frame();
                }
                result
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table() {
        assert_eq!(BUILTIN_FUNCTIONS,
                   &["sqrt", "facto", "fibo", "min", "max", "isprime", "gcd"]);
        assert_eq!(builtin_arity("min"), Some(2));
        assert_eq!(builtin_arity("facto"), Some(1));
        assert_eq!(builtin_arity("nope"), None);
    }

    #[test]
    fn builtin_arity_is_checked_at_runtime_too() {
        let mut context = Context::new();
        let call = Node::FunctionCall { name: "sqrt".to_string(),
                                        args: vec![] };
        assert_eq!(context.evaluate(&call),
                   Err(RuntimeError::ArityMismatch { name:     "sqrt".to_string(),
                                                     expected: 1,
                                                     found:    0, }));
    }

    #[test]
    fn unknown_function() {
        let mut context = Context::new();
        let call = Node::FunctionCall { name: "nope".to_string(),
                                        args: vec![Node::Int(1)], };
        assert_eq!(context.evaluate(&call),
                   Err(RuntimeError::UndefinedFunction { name: "nope".to_string() }));
    }
}
