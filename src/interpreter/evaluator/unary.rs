use crate::interpreter::classifier::Operator;

/// Beyond this operand the factorial overflows `f64`.
pub const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

/// Applies a one-operand operator.
///
/// Trigonometric functions work in radians. Returns `None` when `op` does
/// not take exactly one operand.
///
/// # Parameters
/// - `op`: Prefix, postfix or single-argument function operator.
/// - `x`: The operand.
///
/// # Returns
/// The unrounded result, or `None` for an operator of another arity.
///
/// # Example
/// ```
/// use reckon::interpreter::{classifier::Operator, evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(Operator::Negate, 3.0), Some(-3.0));
/// assert_eq!(apply_unary(Operator::Sqrt, 16.0), Some(4.0));
/// assert_eq!(apply_unary(Operator::Factorial, 5.0), Some(120.0));
/// assert_eq!(apply_unary(Operator::Add, 1.0), None);
/// ```
#[must_use]
pub fn apply_unary(op: Operator, x: f64) -> Option<f64> {
    let value = match op {
        Operator::Negate => -x,
        Operator::Factorial => factorial(x),
        Operator::Sin => x.sin(),
        Operator::Cos => x.cos(),
        Operator::Tan => x.tan(),
        Operator::Asin => x.asin(),
        Operator::Acos => x.acos(),
        Operator::Atan => x.atan(),
        Operator::Log10 => x.log10(),
        Operator::Ln => x.ln(),
        Operator::Exp => x.exp(),
        Operator::Abs => x.abs(),
        Operator::Sqrt => x.sqrt(),
        _ => return None,
    };
    Some(value)
}

/// Iterative factorial over the integer part of `x`.
///
/// The product runs from `2` up to `trunc(x)`, so negative, fractional parts
/// and `NaN` simply fall through to `1` for operands below two.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(4.0), 24.0);
/// assert_eq!(factorial(4.9), 24.0);
/// assert_eq!(factorial(-3.0), 1.0);
/// assert_eq!(factorial(171.0), f64::INFINITY);
/// ```
#[must_use]
pub fn factorial(x: f64) -> f64 {
    if x > MAX_FACTORIAL_ARGUMENT {
        return f64::INFINITY;
    }
    let limit = x.trunc();
    let mut product = 1.0;
    let mut k = 2.0;
    while k <= limit {
        product *= k;
        k += 1.0;
    }
    product
}

/// Whether [`factorial`] is mathematically defined for `x`.
#[must_use]
pub fn is_factorial_domain(x: f64) -> bool {
    x >= 0.0 && x.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(3.0), 6.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
    }

    #[test]
    fn factorial_falls_through_outside_domain() {
        assert_eq!(factorial(-5.5), 1.0);
        assert_eq!(factorial(f64::NAN), 1.0);
        assert!(!is_factorial_domain(-1.0));
        assert!(!is_factorial_domain(2.5));
        assert!(is_factorial_domain(0.0));
    }

    #[test]
    fn factorial_upper_bound_is_finite() {
        assert!(factorial(MAX_FACTORIAL_ARGUMENT).is_finite());
    }

    #[test]
    fn inverse_trigonometry_outside_domain_is_nan() {
        assert!(apply_unary(Operator::Asin, 2.0).unwrap().is_nan());
        assert_eq!(apply_unary(Operator::Atan, 0.0), Some(0.0));
    }

    #[test]
    fn logarithms() {
        assert_eq!(apply_unary(Operator::Log10, 1000.0), Some(3.0));
        assert_eq!(apply_unary(Operator::Ln, 1.0), Some(0.0));
        assert_eq!(apply_unary(Operator::Ln, 0.0), Some(f64::NEG_INFINITY));
    }
}
