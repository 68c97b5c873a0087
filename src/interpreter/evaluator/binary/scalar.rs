use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Applies an arithmetic operator under the promotion rule.
    ///
    /// Two integers are combined with the checked `int_op`; `None` from it is
    /// reported as `Overflow`. If either operand is a float, both are promoted
    /// and combined with `float_op`, and the result goes through
    /// [`Number::demote_zero`].
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `int_op`: Checked integer implementation.
    /// - `float_op`: Float implementation.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, interpreter::evaluator::core::Context};
    ///
    /// let diff = Context::eval_arithmetic(Number::Float(2.5), Number::Float(2.5), i64::checked_sub, |l, r| l - r);
    /// assert_eq!(diff.unwrap(), Number::Int(0));
    /// ```
    pub fn eval_arithmetic(left: Number,
                           right: Number,
                           int_op: impl Fn(i64, i64) -> Option<i64>,
                           float_op: impl Fn(f64, f64) -> f64)
                           -> EvalResult<Number> {
        match (left, right) {
            (Number::Int(l), Number::Int(r)) => int_op(l, r).map(Number::Int)
                                                            .ok_or(RuntimeError::Overflow),
            _ => Ok(Number::Float(float_op(left.as_f64(), right.as_f64())).demote_zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(left: Number, right: Number) -> EvalResult<Number> {
        Context::eval_arithmetic(left, right, i64::checked_add, |l, r| l + r)
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(add(Number::Int(1), Number::Float(0.5)), Ok(Number::Float(1.5)));
        assert_eq!(add(Number::Float(0.5), Number::Int(1)), Ok(Number::Float(1.5)));
    }

    #[test]
    fn float_zero_result_is_demoted() {
        assert_eq!(add(Number::Float(-0.5), Number::Float(0.5)), Ok(Number::Int(0)));
        assert_eq!(add(Number::Int(-2), Number::Float(2.0)), Ok(Number::Int(0)));
    }

    #[test]
    fn integers_stay_integers() {
        assert_eq!(add(Number::Int(2), Number::Int(-5)), Ok(Number::Int(-3)));
    }
}
