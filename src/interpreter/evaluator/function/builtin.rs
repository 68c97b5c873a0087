use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::{checked_factorial, checked_fibonacci, euler_gamma, gcd as euclid, is_prime},
};

/// Square root. Always returns a float.
///
/// # Errors
/// `DomainError` for a negative argument.
///
/// # Example
/// ```
/// use calcite::{Number, interpreter::evaluator::function::builtin::sqrt};
///
/// assert_eq!(sqrt(&[Number::Int(9)]).unwrap(), Number::Float(3.0));
/// assert_eq!(sqrt(&[Number::Int(0)]).unwrap(), Number::Float(0.0));
/// ```
pub fn sqrt(args: &[Number]) -> EvalResult<Number> {
    let x = args[0].as_f64();
    if x < 0.0 {
        return Err(RuntimeError::domain("sqrt(x) where x < 0"));
    }
    Ok(Number::Float(x.sqrt()))
}

/// Factorial.
///
/// Integers use the exact product; floats use `Γ(x + 1)`, so `facto(0.5)` is
/// `√π / 2`.
///
/// # Errors
/// - `DomainError` for a negative integer, a float below `-1`, or a float
///   landing on a pole of the gamma function.
/// - `Overflow` if the result does not fit: past `20!` for integers, past
///   `Γ(171.6)` for floats.
pub fn facto(args: &[Number]) -> EvalResult<Number> {
    match args[0] {
        Number::Int(n) => {
            if n < 0 {
                return Err(RuntimeError::domain("facto(x) where x < 0"));
            }
            checked_factorial(n).map(Number::Int)
                                .ok_or(RuntimeError::Overflow)
        },
        Number::Float(x) => {
            if x < -1.0 {
                return Err(RuntimeError::domain("facto(x) where x < -1"));
            }
            let value = euler_gamma(x + 1.0);
            if value.is_finite() {
                Ok(Number::Float(value).demote_zero())
            } else if value.is_nan() || x + 1.0 <= 0.0 {
                Err(RuntimeError::domain(format!("facto({x}) is undefined")))
            } else {
                Err(RuntimeError::Overflow)
            }
        },
    }
}

/// Fibonacci number; a float argument is truncated first.
///
/// # Errors
/// - `DomainError` for a negative argument.
/// - `Overflow` past `fibo(92)`.
pub fn fibo(args: &[Number]) -> EvalResult<Number> {
    let n = args[0].truncate();
    if n < 0 {
        return Err(RuntimeError::domain("fibo(n) where n < 0"));
    }
    checked_fibonacci(n).map(Number::Int)
                        .ok_or(RuntimeError::Overflow)
}

/// Smaller of two values, promoted like any binary operation.
///
/// # Example
/// ```
/// use calcite::{Number, interpreter::evaluator::function::builtin::min};
///
/// assert_eq!(min(&[Number::Int(3), Number::Int(-2)]).unwrap(), Number::Int(-2));
/// assert_eq!(min(&[Number::Int(1), Number::Float(2.5)]).unwrap(), Number::Float(1.0));
/// ```
pub fn min(args: &[Number]) -> EvalResult<Number> {
    Ok(pick(args[0], args[1], std::cmp::min, f64::min))
}

/// Larger of two values, promoted like any binary operation.
pub fn max(args: &[Number]) -> EvalResult<Number> {
    Ok(pick(args[0], args[1], std::cmp::max, f64::max))
}

fn pick(left: Number,
        right: Number,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64)
        -> Number {
    match (left, right) {
        (Number::Int(l), Number::Int(r)) => Number::Int(int_op(l, r)),
        _ => Number::Float(float_op(left.as_f64(), right.as_f64())).demote_zero(),
    }
}

/// Primality test on the truncated argument. Returns `Int(1)` or `Int(0)`.
pub fn isprime(args: &[Number]) -> EvalResult<Number> {
    Ok(Number::from(is_prime(args[0].truncate())))
}

/// Greatest common divisor of the truncated arguments.
///
/// Computed on absolute values; the result is negated when both arguments
/// are negative. `gcd(0, 0)` is `0`.
///
/// # Errors
/// `Overflow` if the result does not fit in an `i64`, which only happens for
/// `gcd(i64::MIN, i64::MIN)` and `gcd(i64::MIN, 0)`.
///
/// # Example
/// ```
/// use calcite::{Number, interpreter::evaluator::function::builtin::gcd};
///
/// assert_eq!(gcd(&[Number::Int(-12), Number::Int(18)]).unwrap(), Number::Int(6));
/// assert_eq!(gcd(&[Number::Int(-12), Number::Int(-18)]).unwrap(), Number::Int(-6));
/// ```
pub fn gcd(args: &[Number]) -> EvalResult<Number> {
    let (a, b) = (args[0].truncate(), args[1].truncate());
    let magnitude = i64::try_from(euclid(a.unsigned_abs(), b.unsigned_abs())).map_err(|_| RuntimeError::Overflow)?;

    if a < 0 && b < 0 {
        Ok(Number::Int(-magnitude))
    } else {
        Ok(Number::Int(magnitude))
    }
}
