/// Numeric helpers shared by the evaluator and the builtin library.
///
/// Holds the lossy `i64` to `f64` conversion used by float promotion, the
/// Lanczos gamma function behind `facto` on floats, and the checked integer
/// sequences (factorial, Fibonacci) together with primality and gcd.
pub mod num;
