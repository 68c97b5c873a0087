/// Dispatch from operator to implementation.
pub mod core;
/// `+ - * / %` under the promotion rule.
pub mod scalar;
/// Exponentiation.
pub mod power;
