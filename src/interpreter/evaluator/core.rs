use log::debug;

use crate::{
    error::EvalError,
    interpreter::{
        parser::{binary::parse_binary, core::ParseContext},
        scanner::Scanner,
        variables::VariableStore,
    },
    util::num::{DEFAULT_PRECISION, format_number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure and where it happened.
pub type EvalResult<T> = Result<T, EvalError>;

/// Tunable behavior of a [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Decimal places every computed result is rounded to.
    pub precision: i32,
    /// Turns silent fallbacks into errors: unknown variables, factorials of
    /// negative or fractional operands and non-finite results.
    pub strict:    bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION,
               strict:    false, }
    }
}

/// Evaluates single expressions against a persistent variable table.
///
/// ## Usage
///
/// A `Calculator` is created once per session and reused. Every call to
/// [`Calculator::evaluate`] parses and reduces one expression from scratch;
/// only the variables survive between calls, including the last answer `r`.
///
/// A calculator is not meant to be shared between threads mid-evaluation;
/// give each session its own instance.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variables: VariableStore,
    settings:  Settings,
}

impl Calculator {
    /// Creates a calculator with seeded variables and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with seeded variables and the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { variables: VariableStore::new(),
               settings }
    }

    /// Evaluates an expression and stores the result as the last answer.
    ///
    /// Assignments (`x=5`) update the variable table as a side effect and
    /// evaluate to the assigned value.
    ///
    /// # Errors
    /// Returns an [`EvalError`] tagged with the offending position in the
    /// normalized expression. A failed evaluation leaves the last answer
    /// untouched, though assignments that completed before the failure
    /// persist.
    ///
    /// # Example
    /// ```
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// assert_eq!(calc.evaluate("2+3*4").unwrap(), 14.0);
    /// assert_eq!(calc.evaluate("r/2").unwrap(), 7.0);
    /// assert_eq!(calc.evaluate("x = 2pi").unwrap(), 6.2831853072);
    /// assert!(calc.evaluate("(1").is_err());
    /// ```
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let scanner = Scanner::new(expression)?;
        let source = scanner.source();

        let mut context = ParseContext::new(scanner, &mut self.variables, self.settings);
        parse_binary(&mut context)?;
        context.expect_end()?;
        let result = context.finish()?;

        self.variables.set_last_answer(result);
        debug!("evaluated {source:?} = {result}");
        Ok(result)
    }

    /// Evaluates an expression and formats the result as decimal text.
    ///
    /// # Errors
    /// Same as [`Calculator::evaluate`].
    pub fn evaluate_formatted(&mut self, expression: &str) -> EvalResult<String> {
        self.evaluate(expression).map(format_number)
    }

    /// Evaluates an expression and returns either the formatted result or
    /// the error message, ready to relay to whoever asked.
    ///
    /// # Example
    /// ```
    /// use reckon::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// assert_eq!(calc.respond("0.1 + 0.2"), "0.3");
    /// assert_eq!(calc.respond(""), "Error at position 0: Expression is empty.");
    /// ```
    pub fn respond(&mut self, expression: &str) -> String {
        match self.evaluate_formatted(expression) {
            Ok(text) => text,
            Err(e) => e.to_string(),
        }
    }

    /// The variable table.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Mutable access to the variable table, for seeding or restoring
    /// persisted bindings.
    pub fn variables_mut(&mut self) -> &mut VariableStore {
        &mut self.variables
    }

    /// The active settings.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the settings; affects subsequent evaluations only.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}
