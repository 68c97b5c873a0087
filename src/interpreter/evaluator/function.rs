/// Implementations of the builtin math library.
///
/// `sqrt`, `facto`, `fibo`, `min`, `max`, `isprime` and `gcd`.
pub mod builtin;

/// Builtin lookup table and call dispatch for builtin and user-defined
/// functions.
pub mod core;
