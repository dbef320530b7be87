use crate::interpreter::classifier::Operator;

/// Applies a two-operand operator.
///
/// `left` is the operand pushed first. Returns `None` when `op` does not take
/// two operands.
///
/// Division by zero and out-of-domain arguments follow IEEE 754 and yield
/// infinities or `NaN` rather than failing.
///
/// # Parameters
/// - `op`: The operator being reduced.
/// - `left`: Left-hand operand (the base of `log`, the index of `rt`).
/// - `right`: Right-hand operand.
///
/// # Returns
/// The unrounded result, or `None` for an operator of another arity.
///
/// # Example
/// ```
/// use reckon::interpreter::{classifier::Operator, evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(Operator::Sub, 7.0, 2.0), Some(5.0));
/// assert_eq!(apply_binary(Operator::Log, 2.0, 8.0), Some(3.0));
/// assert_eq!(apply_binary(Operator::Root, 3.0, 27.0), Some(3.0));
/// assert_eq!(apply_binary(Operator::Sqrt, 1.0, 4.0), None);
/// ```
#[must_use]
pub fn apply_binary(op: Operator, left: f64, right: f64) -> Option<f64> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => left / right,
        Operator::Mod => left % right,
        Operator::Pow => left.powf(right),
        Operator::Log => log(left, right),
        Operator::Root => root(left, right),
        _ => return None,
    };
    Some(value)
}

/// `log(base, x)`, exact for integral powers of two and ten.
#[allow(clippy::float_cmp)]
fn log(base: f64, x: f64) -> f64 {
    if base == 2.0 {
        x.log2()
    } else if base == 10.0 {
        x.log10()
    } else {
        x.ln() / base.ln()
    }
}

/// `rt(index, radicand)`
#[allow(clippy::float_cmp)]
fn root(index: f64, radicand: f64) -> f64 {
    if index == 2.0 {
        radicand.sqrt()
    } else if index == 3.0 {
        radicand.cbrt()
    } else {
        radicand.powf(index.recip())
    }
}
