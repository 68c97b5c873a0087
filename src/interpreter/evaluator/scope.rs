use std::rc::Rc;

use crate::{ast::FunctionDef, interpreter::value::Number};

/// Identifies the scope a node is evaluated in.
///
/// Scopes never chain: a lookup only consults the scope it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScopeId {
    /// The top-level scope of the context.
    Global,
    /// The persistent scope owned by a user-defined function.
    Function(usize),
    /// A scope created for a single call and dropped when it returns.
    Frame(usize),
}

/// A user-defined function as stored in the function table.
#[derive(Debug, Clone)]
pub struct Function {
    /// The parsed declaration.
    pub def:   Rc<FunctionDef>,
    /// Index of the function's persistent scope.
    pub scope: usize,
}

/// A pair of name-keyed binding tables.
///
/// Lookup is a linear scan; names are unique within a table and a second
/// write to the same name replaces the first.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    variables: Vec<(String, Number)>,
    functions: Vec<(String, Function)>,
}

impl Scope {
    /// Looks up a variable in this scope only.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, interpreter::evaluator::scope::Scope};
    ///
    /// let mut scope = Scope::default();
    /// scope.set_variable("x", Number::Int(1));
    /// scope.set_variable("x", Number::Float(2.5));
    ///
    /// assert_eq!(scope.get_variable("x"), Some(Number::Float(2.5)));
    /// assert_eq!(scope.get_variable("y"), None);
    /// assert_eq!(scope.variables().count(), 1);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Number> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Binds `name` to `value`, overwriting any existing binding.
    pub fn set_variable(&mut self, name: &str, value: Number) {
        match self.variables.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.variables.push((name.to_string(), value)),
        }
    }

    /// Iterates over the variable bindings in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, Number)> {
        self.variables.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Looks up a function in this scope's function table.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// Registers `function` under `name`, replacing a previous definition.
    pub fn set_function(&mut self, name: &str, function: Function) {
        match self.functions.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = function,
            None => self.functions.push((name.to_string(), function)),
        }
    }

    /// Returns `true` if the scope holds no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    #[test]
    fn functions_are_replaced_by_name() {
        let def = |body: i64| {
            Rc::new(FunctionDef { name:   "f".to_string(),
                                  params: vec![],
                                  body:   Box::new(Node::Int(body)), })
        };

        let mut scope = Scope::default();
        scope.set_function("f", Function { def:   def(1),
                                           scope: 1, });
        scope.set_function("f", Function { def:   def(2),
                                           scope: 1, });

        let function = scope.get_function("f").unwrap();
        assert_eq!(*function.def.body, Node::Int(2));
        assert_eq!(scope.functions.len(), 1);
    }

    #[test]
    fn empty_scope() {
        let mut scope = Scope::default();
        assert!(scope.is_empty());
        scope.set_variable("a", Number::Int(0));
        assert!(!scope.is_empty());
    }
}
