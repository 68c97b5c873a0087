use crate::util::num::i64_to_f64;

/// The result of evaluating an expression.
///
/// Any binary arithmetic with a `Float` operand yields a `Float`; see
/// [`Number::demote_zero`] for the one exception.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Number {
    fn from(v: bool) -> Self {
        Self::Int(i64::from(v))
    }
}

impl Number {
    /// Returns the numeric value as a float.
    ///
    /// # Example
    /// ```
    /// use calcite::Number;
    ///
    /// assert_eq!(Number::Int(3).as_f64(), 3.0);
    /// assert_eq!(Number::Float(2.5).as_f64(), 2.5);
    /// ```
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => i64_to_f64(v),
            Self::Float(v) => v,
        }
    }

    /// Returns the value as an integer, truncating floats toward zero.
    ///
    /// Out of range floats saturate at the `i64` bounds and NaN becomes 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn truncate(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::Float(v) => v as i64,
        }
    }

    /// Returns `true` when the numeric value is zero, for either variant.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// Applies the float-zero demotion rule: a `Float` whose value is exactly
    /// `0.0` is reported as `Int(0)`. Every arithmetic operator passes its
    /// result through here.
    ///
    /// # Example
    /// ```
    /// use calcite::Number;
    ///
    /// assert_eq!(Number::Float(0.0).demote_zero(), Number::Int(0));
    /// assert_eq!(Number::Float(-0.0).demote_zero(), Number::Int(0));
    /// assert_eq!(Number::Float(0.5).demote_zero(), Number::Float(0.5));
    /// ```
    #[must_use]
    pub fn demote_zero(self) -> Self {
        match self {
            Self::Float(v) if v == 0.0 => Self::Int(0),
            other => other,
        }
    }
}

/// Integers print as-is, floats with ten decimals.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.10}"),
        }
    }
}
