use log::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        classifier::{Operator, Symbol, should_reduce},
        evaluator::{
            binary::apply_binary,
            core::Settings,
            unary::{apply_unary, is_factorial_domain},
        },
        scanner::{Scanner, TERMINATOR},
        variables::VariableStore,
    },
    util::num::{format_number, round_to},
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Transient state of one evaluation.
///
/// The operator stack always holds at least the sentinel pushed by
/// [`ParseContext::new`]; every group pushes its own sentinel so its
/// reductions cannot reach the operators pending outside it.
pub struct ParseContext<'a> {
    pub scanner:   Scanner,
    pub operands:  Vec<f64>,
    pub operators: Vec<Operator>,
    variables:     &'a mut VariableStore,
    settings:      Settings,
}

impl<'a> ParseContext<'a> {
    /// Creates the state for one evaluation.
    ///
    /// # Parameters
    /// - `scanner`: Cursor over the normalized expression.
    /// - `variables`: Variable table read by names and written by
    ///   assignments.
    /// - `settings`: Rounding precision and strictness for this evaluation.
    ///
    /// # Returns
    /// A context with an empty operand stack and the base sentinel on the
    /// operator stack.
    #[must_use]
    pub fn new(scanner: Scanner, variables: &'a mut VariableStore, settings: Settings) -> Self {
        Self { scanner,
               operands: Vec::new(),
               operators: vec![Operator::Sentinel],
               variables,
               settings }
    }

    /// Pushes `op` after reducing every stacked operator that binds at least
    /// as tightly, stopping at the group's sentinel.
    ///
    /// # Parameters
    /// - `op`: The incoming infix, postfix or function operator.
    ///
    /// # Errors
    /// Propagates failures from the reductions it triggers.
    pub fn push_operator(&mut self, op: Operator) -> ParseResult<()> {
        while let Some(&top) = self.operators.last()
              && top != Operator::Sentinel
              && should_reduce(top, op)
        {
            self.reduce()?;
        }
        self.operators.push(op);
        Ok(())
    }

    /// Pushes `op` without reducing anything first.
    ///
    /// Used for prefix minus, which must bind to the primary that follows it
    /// whatever is already stacked.
    pub fn push_unreduced(&mut self, op: Operator) {
        self.operators.push(op);
    }

    /// Opens a reduction scope.
    pub fn push_sentinel(&mut self) {
        self.operators.push(Operator::Sentinel);
    }

    /// Closes the innermost reduction scope. Its operators must already be
    /// reduced.
    pub fn pop_sentinel(&mut self) -> ParseResult<()> {
        match self.operators.pop() {
            Some(Operator::Sentinel) => Ok(()),
            Some(op) => Err(EvalError::Arithmetic { details:  format!("operator '{}' left unreduced",
                                                                      op.symbol()),
                                                    position: self.scanner.position(), }),
            None => Err(EvalError::Arithmetic { details:  "operator stack underflow".to_string(),
                                                position: self.scanner.position(), }),
        }
    }

    /// Reduces until the innermost sentinel is on top.
    pub fn reduce_to_sentinel(&mut self) -> ParseResult<()> {
        while let Some(&top) = self.operators.last()
              && top != Operator::Sentinel
        {
            self.reduce()?;
        }
        Ok(())
    }

    /// Pops one operator with its operands and pushes the rounded result.
    ///
    /// The operand popped first is the right-hand side.
    ///
    /// # Returns
    /// `Ok(())` with the result rounded to the configured precision on top of
    /// the operand stack.
    ///
    /// # Errors
    /// - `Arithmetic` if an operand is missing, the operator cannot be
    ///   applied, or (in strict mode) the operand is outside the factorial
    ///   domain or the result is not finite.
    pub fn reduce(&mut self) -> ParseResult<()> {
        let position = self.scanner.position();
        let op = self.operators
                     .pop()
                     .ok_or_else(|| EvalError::Arithmetic { details:  "nothing to reduce".to_string(),
                                                            position })?;

        let value = match op.arity() {
            2 => {
                let right = self.pop_operand(op)?;
                let left = self.pop_operand(op)?;
                apply_binary(op, left, right)
            },
            1 => {
                let operand = self.pop_operand(op)?;
                if self.settings.strict && op == Operator::Factorial && !is_factorial_domain(operand) {
                    return Err(EvalError::Arithmetic { details: format!("factorial is not defined for {}",
                                                                        format_number(operand)),
                                                       position });
                }
                apply_unary(op, operand)
            },
            _ => None,
        };
        let value = value.ok_or_else(|| EvalError::Arithmetic { details:  format!("'{}' cannot be applied",
                                                                                  op.symbol()),
                                                                position })?;

        let value = round_to(value, self.settings.precision);
        if self.settings.strict && !value.is_finite() {
            return Err(EvalError::Arithmetic { details: format!("'{}' produced {}",
                                                                op.symbol(),
                                                                format_number(value)),
                                               position });
        }

        trace!("reduce '{}' -> {value}", op.symbol());
        self.operands.push(value);
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator) -> ParseResult<f64> {
        self.operands
            .pop()
            .ok_or_else(|| EvalError::Arithmetic { details:  format!("missing operand for '{}'",
                                                                     op.symbol()),
                                                   position: self.scanner.position(), })
    }

    /// Advances past the current token if it is `symbol`.
    ///
    /// # Parameters
    /// - `symbol`: The token required at the cursor.
    /// - `expected`: How the token is named in the error message.
    ///
    /// # Errors
    /// `ExpectedToken` naming `expected`, at the current position.
    pub fn expect(&mut self, symbol: Symbol, expected: &str) -> ParseResult<()> {
        if Symbol::of_char(self.scanner.current()) == Some(symbol) {
            self.scanner.advance();
            return Ok(());
        }
        Err(EvalError::ExpectedToken { expected: expected.to_string(),
                                       position: self.scanner.position(), })
    }

    /// Requires the scanner to sit on the final terminator.
    pub fn expect_end(&self) -> ParseResult<()> {
        if self.scanner.current() == TERMINATOR && self.scanner.is_at_end() {
            return Ok(());
        }
        Err(EvalError::ExpectedToken { expected: "end of expression".to_string(),
                                       position: self.scanner.position(), })
    }

    /// Resolves a variable reference starting at `position`.
    ///
    /// Unbound names read as `0` unless strict lookups are enabled.
    ///
    /// # Parameters
    /// - `name`: The collected, lowercase variable name.
    /// - `position`: Where the name starts, for error reporting.
    ///
    /// # Returns
    /// The bound value, or `0` for an unbound name in lenient mode.
    ///
    /// # Errors
    /// `UnknownVariable` for an unbound name in strict mode.
    pub fn lookup(&self, name: &str, position: usize) -> ParseResult<f64> {
        match self.variables.get(name) {
            Some(value) => Ok(value),
            None if self.settings.strict => Err(EvalError::UnknownVariable { name: name.to_string(),
                                                                              position }),
            None => Ok(0.0),
        }
    }

    /// Binds `name` to `value`.
    pub fn assign(&mut self, name: &str, value: f64) {
        debug!("assign {name} = {value}");
        self.variables.set(name, value);
    }

    /// Consumes the context and returns the single remaining operand.
    ///
    /// # Returns
    /// The value of the whole expression, after reducing whatever is still
    /// pending above the base sentinel.
    ///
    /// # Errors
    /// `Arithmetic` if a reduction fails or more than one operand is left.
    pub fn finish(mut self) -> ParseResult<f64> {
        let position = self.scanner.position();
        self.reduce_to_sentinel()?;
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => Err(EvalError::Arithmetic { details: "expression did not reduce to a single value".to_string(),
                                             position }),
        }
    }
}
