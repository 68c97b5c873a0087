use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Evaluates a prefix operator.
    ///
    /// `+` returns its operand unchanged. `-` negates it; integer negation is
    /// checked, so `-(-9223372036854775807 - 1)` fails with `Overflow`.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Minus, Number::Int(5)).unwrap();
    /// assert_eq!(v, Number::Int(-5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Number) -> EvalResult<Number> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Minus => match value {
                Number::Int(v) => v.checked_neg()
                                   .map(Number::Int)
                                   .ok_or(RuntimeError::Overflow),
                Number::Float(v) => Ok(Number::Float(-v).demote_zero()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Number::Float(2.5)),
                   Ok(Number::Float(-2.5)));
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Number::Int(i64::MIN)),
                   Err(RuntimeError::Overflow));
    }

    #[test]
    fn identity() {
        assert_eq!(Context::eval_unary(UnaryOperator::Plus, Number::Int(-3)), Ok(Number::Int(-3)));
    }
}
