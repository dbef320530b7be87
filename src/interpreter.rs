/// Token classification and operator tables.
///
/// Answers which category a character or lexeme belongs to (binary, prefix,
/// postfix, function, structural) and how tightly each operator binds.
///
/// # Responsibilities
/// - Recognizes operator symbols and function names.
/// - Defines precedence, arity and the repeated-power associativity rule.
/// - Provides the character predicates for number and name runs.
pub mod classifier;
/// The evaluator applies operators and owns the calculator state.
///
/// Operators are applied to `f64` operands as the parser reduces them. The
/// [`Calculator`](evaluator::core::Calculator) ties a persistent variable
/// table to a fresh parse for every expression.
///
/// # Responsibilities
/// - Computes arithmetic, power, root, logarithm, trigonometric and
///   factorial results.
/// - Records each successful result as the last answer.
pub mod evaluator;
/// The parser drives the scanner and reduces operators by precedence.
///
/// Two explicit stacks, operands and operators, hold pending work. Operators
/// are reduced as soon as a weaker one arrives, and groups fence off their
/// own part of the operator stack with a sentinel.
///
/// # Responsibilities
/// - Parses numbers, names, functions, assignments and groups.
/// - Inserts implicit multiplication between adjacent primaries.
/// - Reports syntax errors with the position of the offending token.
pub mod parser;
/// The scanner walks a normalized expression one character at a time.
///
/// # Responsibilities
/// - Normalizes whitespace and case, and appends the terminator.
/// - Exposes the current character and its position.
/// - Collects multi-character runs for the parser.
pub mod scanner;
/// Named values that persist between evaluations.
pub mod variables;
