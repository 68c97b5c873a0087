use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go through [`Context::eval_arithmetic`], which
    /// applies the promotion and zero-demotion rules. Division and modulo
    /// check the divisor first and fail with `DivisionByZero` for an integer
    /// or float zero. Power calls [`Context::eval_pow`]. Equality yields
    /// `Int(1)` or `Int(0)`.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, Number::Int(3), Number::Int(4));
    /// assert_eq!(sum.unwrap(), Number::Int(7));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Mul, Number::Int(3), Number::Float(0.5));
    /// assert_eq!(mixed.unwrap(), Number::Float(1.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Equal, Mod, Mul, Pow, Sub};

        match op {
            Add => Self::eval_arithmetic(left, right, i64::checked_add, |l, r| l + r),
            Sub => Self::eval_arithmetic(left, right, i64::checked_sub, |l, r| l - r),
            Mul => Self::eval_arithmetic(left, right, i64::checked_mul, |l, r| l * r),
            Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Self::eval_arithmetic(left, right, i64::checked_div, |l, r| l / r)
            },
            Mod => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Self::eval_arithmetic(left, right, i64::checked_rem, |l, r| l % r)
            },
            Pow => Self::eval_pow(left, right),
            Equal => Ok(Self::eval_equal(left, right)),
        }
    }

    /// Compares two values numerically.
    ///
    /// Two integers compare exactly; any other pair is compared after
    /// promotion to float.
    #[must_use]
    pub fn eval_equal(left: Number, right: Number) -> Number {
        let equal = match (left, right) {
            (Number::Int(l), Number::Int(r)) => l == r,
            _ => left.as_f64() == right.as_f64(),
        };
        Number::from(equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_either_zero_fails() {
        for op in [BinaryOperator::Div, BinaryOperator::Mod] {
            for zero in [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)] {
                assert_eq!(Context::eval_binary(op, Number::Float(1.5), zero),
                           Err(RuntimeError::DivisionByZero));
                assert_eq!(Context::eval_binary(op, Number::Int(3), zero),
                           Err(RuntimeError::DivisionByZero));
            }
        }
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, Number::Int(-7), Number::Int(2)),
                   Ok(Number::Int(-3)));
        assert_eq!(Context::eval_binary(BinaryOperator::Mod, Number::Int(-7), Number::Int(2)),
                   Ok(Number::Int(-1)));
    }

    #[test]
    fn float_modulo() {
        assert_eq!(Context::eval_binary(BinaryOperator::Mod, Number::Float(7.5), Number::Int(2)),
                   Ok(Number::Float(1.5)));
    }

    #[test]
    fn equality_across_variants() {
        assert_eq!(Context::eval_equal(Number::Int(2), Number::Float(2.0)), Number::Int(1));
        assert_eq!(Context::eval_equal(Number::Int(2), Number::Int(3)), Number::Int(0));
        assert_eq!(Context::eval_equal(Number::Float(0.1), Number::Float(0.1)), Number::Int(1));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add, Number::Int(i64::MAX), Number::Int(1)),
                   Err(RuntimeError::Overflow));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, Number::Int(i64::MIN), Number::Int(-1)),
                   Err(RuntimeError::Overflow));
    }
}
