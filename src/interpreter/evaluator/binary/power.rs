use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// The power is always computed in floating point. If both operands are
    /// integers the result is truncated back to an integer (saturating at the
    /// `i64` bounds), so `2 ^ -1` is `0`. Otherwise the float result goes
    /// through [`Number::demote_zero`].
    ///
    /// # Errors
    /// `DomainError` if the base is zero and the exponent is negative.
    ///
    /// # Example
    /// ```
    /// use calcite::{Number, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_pow(Number::Int(2), Number::Int(10)).unwrap(), Number::Int(1024));
    /// assert_eq!(Context::eval_pow(Number::Int(4), Number::Float(0.5)).unwrap(), Number::Float(2.0));
    /// assert!(Context::eval_pow(Number::Int(0), Number::Int(-1)).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
        if base.is_zero() && exponent.as_f64() < 0.0 {
            return Err(RuntimeError::domain("zero raised to a negative power"));
        }

        let value = base.as_f64().powf(exponent.as_f64());
        match (base, exponent) {
            (Number::Int(_), Number::Int(_)) => Ok(Number::Int(value as i64)),
            _ => Ok(Number::Float(value).demote_zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_integer_exponent_truncates() {
        assert_eq!(Context::eval_pow(Number::Int(2), Number::Int(-1)), Ok(Number::Int(0)));
        assert_eq!(Context::eval_pow(Number::Int(1), Number::Int(-3)), Ok(Number::Int(1)));
    }

    #[test]
    fn float_zero_base_with_negative_exponent() {
        assert!(matches!(Context::eval_pow(Number::Float(0.0), Number::Float(-0.5)),
                         Err(RuntimeError::DomainError { .. })));
    }

    #[test]
    fn zero_to_the_zero() {
        assert_eq!(Context::eval_pow(Number::Int(0), Number::Int(0)), Ok(Number::Int(1)));
    }

    #[test]
    fn huge_powers_saturate() {
        assert_eq!(Context::eval_pow(Number::Int(10), Number::Int(30)), Ok(Number::Int(i64::MAX)));
    }

    #[test]
    fn mixed_power_is_float() {
        assert_eq!(Context::eval_pow(Number::Float(1.5), Number::Int(2)), Ok(Number::Float(2.25)));
    }
}
