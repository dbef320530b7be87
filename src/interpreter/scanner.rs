use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Appended to every normalized expression; the scanner never moves past it.
pub const TERMINATOR: char = ';';
/// Tabs inside an expression are replaced by this placeholder.
pub const BLANK: char = ' ';

/// Normalizes a raw expression for scanning.
///
/// Surrounding whitespace and trailing terminators are trimmed, spaces are
/// removed, tabs become [`BLANK`], everything is lower-cased and a single
/// [`TERMINATOR`] is appended.
///
/// # Errors
/// Returns [`EvalError::EmptyExpression`] if nothing but the terminator
/// remains.
///
/// # Example
/// ```
/// use reckon::interpreter::scanner::normalize;
///
/// assert_eq!(normalize("  2 * PI ").unwrap(), "2*pi;");
/// assert!(normalize(" \t ").is_err());
/// ```
pub fn normalize(expression: &str) -> EvalResult<String> {
    let trimmed = expression.trim().trim_end_matches(TERMINATOR);
    let mut normalized: String = trimmed.chars()
                                        .filter(|&c| c != ' ')
                                        .map(|c| if c == '\t' { BLANK } else { c })
                                        .collect::<String>()
                                        .to_lowercase();
    normalized.push(TERMINATOR);

    if normalized.chars().count() < 2 {
        return Err(EvalError::EmptyExpression { position: 0 });
    }
    Ok(normalized)
}

/// Single-character lookahead cursor over a normalized expression.
///
/// The current character is the whole lexical state; multi-character lexemes
/// are assembled by the parser through [`Scanner::collect`].
#[derive(Debug, Clone)]
pub struct Scanner {
    chars:  Vec<char>,
    cursor: usize,
}

impl Scanner {
    /// Normalizes `expression` and positions the cursor on its first
    /// character.
    ///
    /// # Errors
    /// Propagates [`EvalError::EmptyExpression`] from [`normalize`].
    pub fn new(expression: &str) -> EvalResult<Self> {
        let normalized = normalize(expression)?;
        Ok(Self { chars:  normalized.chars().collect(),
                  cursor: 0, })
    }

    /// The current token.
    #[must_use]
    pub fn current(&self) -> char {
        self.chars.get(self.cursor).copied().unwrap_or(TERMINATOR)
    }

    /// Zero-based offset of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Moves to the next character. A no-op once the terminator is current.
    pub fn advance(&mut self) {
        if self.current() != TERMINATOR && self.cursor + 1 < self.chars.len() {
            self.cursor += 1;
        }
    }

    /// Accumulates characters while `predicate` holds and returns them.
    ///
    /// The cursor is left on the first character that fails the predicate.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::scanner::Scanner;
    ///
    /// let mut scanner = Scanner::new("12.5+x").unwrap();
    /// let number = scanner.collect(|c| c.is_ascii_digit() || c == '.');
    /// assert_eq!(number, "12.5");
    /// assert_eq!(scanner.current(), '+');
    /// assert_eq!(scanner.position(), 4);
    /// ```
    pub fn collect(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut lexeme = String::new();
        while self.current() != TERMINATOR && predicate(self.current()) {
            lexeme.push(self.current());
            self.advance();
        }
        lexeme
    }

    /// Whether the cursor sits on the final terminator.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.chars.len()
    }

    /// The normalized expression being scanned.
    #[must_use]
    pub fn source(&self) -> String {
        self.chars.iter().collect()
    }
}
