//! # reckon
//!
//! reckon is a single-expression calculator language written in Rust.
//! It scans, parses and evaluates arithmetic expressions with operator
//! precedence, implicit multiplication, factorials, trigonometric and
//! logarithmic functions, and a table of variables that persists between
//! evaluations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type shared by every evaluation phase.
///
/// This module defines all errors an expression can produce while being
/// normalized, parsed or reduced. Each error carries a category, a message
/// and the character offset into the normalized expression where it was
/// detected.
///
/// # Responsibilities
/// - Defines the error enum and its category tags.
/// - Attaches positions for user feedback.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the classifier, scanner, parser, evaluator and
/// variable store, and exposes the [`Calculator`] that callers drive.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for evaluating expressions.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// Interactive read-evaluate-print session.
///
/// Keeps one [`Calculator`] alive across lines so variables and the last
/// answer carry over, and understands a few `:` commands.
pub mod repl;
/// Rounding and formatting helpers.
///
/// # Responsibilities
/// - Round computed values to a fixed number of decimal places.
/// - Render values as decimal text.
pub mod util;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::core::{Calculator, EvalResult, Settings};

/// Evaluates one expression with a fresh calculator and returns the
/// formatted result.
///
/// Variables assigned here are discarded afterwards; use a [`Calculator`]
/// to keep them.
///
/// # Errors
/// Returns an error if the expression is empty, malformed or fails to
/// reduce.
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// assert_eq!(get_result("2^3^2").unwrap(), "512");
/// assert_eq!(get_result("3!2").unwrap(), "12");
///
/// // Missing operand after '+'.
/// let err = get_result("2+").unwrap_err();
/// assert_eq!(err.position(), 2);
/// ```
pub fn get_result(source: &str) -> EvalResult<String> {
    Calculator::new().evaluate_formatted(source)
}
