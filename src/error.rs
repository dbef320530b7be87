/// Evaluation errors.
///
/// Defines every failure an expression can produce, from empty input and
/// syntax mistakes to arithmetic domain violations. Each error carries the
/// character offset into the normalized expression where it was detected.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
