use thiserror::Error;

/// Coarse classification of an [`EvalError`].
///
/// Callers that only care about the failure category can match on this tag
/// instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing to evaluate after normalization.
    EmptyExpression,
    /// A token matched no valid production.
    Syntax,
    /// A required structural token was missing.
    ExpectedToken,
    /// A variable was read before being assigned (strict mode only).
    UnknownVariable,
    /// An arithmetic operation failed or left its domain.
    Arithmetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
///
/// `position` is always a zero-based character offset into the normalized
/// (whitespace-stripped, lower-cased) expression.
pub enum EvalError {
    /// The expression was empty after normalization.
    #[error("Error at position {position}: Expression is empty.")]
    EmptyExpression {
        /// Always `0`.
        position: usize,
    },
    /// Found a token that cannot start or continue an expression.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending lexeme.
        token:    String,
        /// Where the lexeme starts.
        position: usize,
    },
    /// Reached the terminator while an operand was still required.
    #[error("Error at position {position}: Unexpected end of expression.")]
    UnexpectedEnd {
        /// Offset of the terminator.
        position: usize,
    },
    /// A structural token such as `)` or `,` was required but not found.
    #[error("Error at position {position}: {expected} expected.")]
    ExpectedToken {
        /// Human readable description of what was required.
        expected: String,
        /// Offset of the token found instead.
        position: usize,
    },
    /// Read an unbound variable while strict lookups are enabled.
    #[error("Error at position {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The variable name.
        name:     String,
        /// Where the name starts.
        position: usize,
    },
    /// An operator could not produce a valid result.
    #[error("Error at position {position}: {details}.")]
    Arithmetic {
        /// Description of the failure.
        details:  String,
        /// Scanner position when the reduction ran.
        position: usize,
    },
}

impl EvalError {
    /// Returns the category tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression { .. } => ErrorKind::EmptyExpression,
            Self::UnexpectedToken { .. } | Self::UnexpectedEnd { .. } => ErrorKind::Syntax,
            Self::ExpectedToken { .. } => ErrorKind::ExpectedToken,
            Self::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
        }
    }

    /// Returns the offset into the normalized expression where the error was
    /// detected.
    ///
    /// # Example
    /// ```
    /// use reckon::{Calculator, error::ErrorKind};
    ///
    /// let err = Calculator::new().evaluate("2+").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEnd { position }
            | Self::ExpectedToken { position, .. }
            | Self::UnknownVariable { position, .. }
            | Self::Arithmetic { position, .. } => *position,
        }
    }
}
