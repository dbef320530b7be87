/// The calculator entry point and its settings.
///
/// Owns the variable table that persists across evaluations, drives a
/// transient parse per expression and records the last answer.
pub mod core;

/// Two-operand operators.
///
/// Arithmetic, power, modulo and the two-argument functions `log` and `rt`.
pub mod binary;

/// One-operand operators.
///
/// Negation, factorial and the single-argument functions.
pub mod unary;
