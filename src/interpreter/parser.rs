/// Parse state shared by every parsing routine.
///
/// Holds the scanner, the operand and operator stacks and the reduction
/// machinery. A fresh context is built for each expression.
pub mod core;

/// Binary operator chains.
///
/// Parses `primary (op primary)*`, deferring or triggering reductions by
/// operator precedence.
pub mod binary;

/// Primary expressions.
///
/// Numbers, names, function calls, assignments, prefix minus, groups and the
/// implicit multiplication and postfix factorial that may follow them.
pub mod primary;
