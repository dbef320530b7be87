use crate::{
    error::EvalError,
    interpreter::{
        classifier::{Operator, Symbol, is_name_char, is_name_start, is_number_char},
        parser::{
            binary::parse_binary,
            core::{ParseContext, ParseResult},
        },
        scanner::TERMINATOR,
    },
};

/// Parses one primary and pushes its value (or pending operators) onto the
/// context's stacks.
///
/// The loop handles productions that re-enter primary parsing without
/// consuming a binary operator: prefix operators and stray commas. Prefix
/// operators are pushed without reducing, so `2^-1` negates the `1` before
/// the power is applied.
///
/// Grammar:
/// ```text
///     primary := number
///              | name                      -- variable, function call or assignment
///              | prefix_op primary
///              | "(" expression ")"
/// ```
///
/// # Parameters
/// - `context`: Parse state positioned on the first token of the primary.
///
/// # Returns
/// `Ok(())` once the primary and anything trailing it (factorials, implied
/// products) has been pushed.
///
/// # Errors
/// - `UnexpectedEnd` if the expression ends where a primary is required.
/// - `UnexpectedToken` for any other token that cannot start a primary,
///   including a `;` before the end of the expression.
/// - Propagates failures from nested groups, calls and reductions.
pub fn parse_primary(context: &mut ParseContext) -> ParseResult<()> {
    loop {
        let current = context.scanner.current();

        if is_number_char(current) {
            parse_number(context)?;
            return parse_trailing(context);
        }
        if is_name_start(current) {
            return parse_name(context);
        }

        let symbol = Symbol::of_char(current);
        if let Some(op) = symbol.and_then(Symbol::prefix) {
            context.push_unreduced(op);
            context.scanner.advance();
            continue;
        }

        match symbol {
            Some(Symbol::LParen) => {
                parse_group(context, 1)?;
                return parse_trailing(context);
            },
            Some(Symbol::Comma) => context.scanner.advance(),
            _ if current == TERMINATOR && context.scanner.is_at_end() => {
                return Err(EvalError::UnexpectedEnd { position: context.scanner.position() });
            },
            _ => {
                return Err(EvalError::UnexpectedToken { token:    current.to_string(),
                                                        position: context.scanner.position(), });
            },
        }
    }
}

/// Handles what may follow a complete value: postfix factorials and
/// implicit multiplication.
///
/// `3!2` reads as `3! * 2`, `2pi` as `2 * pi` and `3(4+5)` as `3 * (4+5)`.
/// Binary operators and structural tokens other than `(` end the primary.
fn parse_trailing(context: &mut ParseContext) -> ParseResult<()> {
    loop {
        let symbol = Symbol::of_char(context.scanner.current());
        if let Some(op) = symbol.and_then(Symbol::postfix) {
            context.push_operator(op)?;
            context.scanner.advance();
            continue;
        }

        match symbol {
            Some(symbol)
                if symbol != Symbol::LParen && (symbol.is_binary() || symbol.is_structural()) =>
            {
                return Ok(());
            },
            _ => {
                context.push_operator(Operator::Mul)?;
                return parse_primary(context);
            },
        }
    }
}

/// Parses a number literal starting at the current token.
fn parse_number(context: &mut ParseContext) -> ParseResult<()> {
    let position = context.scanner.position();
    let lexeme = context.scanner.collect(is_number_char);
    let value = lexeme.parse::<f64>()
                      .map_err(|_| EvalError::UnexpectedToken { token: lexeme.clone(),
                                                                position })?;
    context.operands.push(value);
    Ok(())
}

/// Parses a name: a function call, an assignment or a variable reference.
///
/// Function names take precedence over variables, so they cannot be
/// assigned. An assignment parses its right-hand side in its own reduction
/// scope and leaves the assigned value on the operand stack.
fn parse_name(context: &mut ParseContext) -> ParseResult<()> {
    let position = context.scanner.position();
    let name = context.scanner.collect(is_name_char);

    if let Some(function) = Operator::function(&name) {
        context.push_operator(function)?;
        return parse_arguments(context, function);
    }

    if Symbol::of_char(context.scanner.current()) == Some(Symbol::Equals) {
        context.scanner.advance();
        context.push_sentinel();
        parse_binary(context)?;
        context.pop_sentinel()?;
        let value = context.operands
                           .last()
                           .copied()
                           .ok_or(EvalError::UnexpectedEnd { position: context.scanner.position() })?;
        context.assign(&name, value);
        return Ok(());
    }

    let value = context.lookup(&name, position)?;
    context.operands.push(value);
    parse_trailing(context)
}

/// Parses the argument of a function already pushed onto the operator stack.
///
/// Single-argument functions take any primary (`sin(x)`, `sqrt-4`); `log`
/// and `rt` need a parenthesized pair.
fn parse_arguments(context: &mut ParseContext, function: Operator) -> ParseResult<()> {
    if function.arity() == 1 {
        return parse_primary(context);
    }
    if Symbol::of_char(context.scanner.current()) != Some(Symbol::LParen) {
        return Err(EvalError::ExpectedToken { expected: format!("'(' after '{}'",
                                                                function.symbol()),
                                              position: context.scanner.position(), });
    }
    parse_group(context, function.arity())?;
    parse_trailing(context)
}

/// Parses `"(" expression ("," expression)* ")"` with exactly `arguments`
/// expressions, each left on the operand stack.
///
/// The group gets its own sentinel, so reductions inside it never touch the
/// operators pending outside. A comma count that does not match `arguments`
/// is rejected: `(1,2)` is not a value.
///
/// # Parameters
/// - `context`: Parse state positioned on the opening `(`.
/// - `arguments`: Number of comma-separated expressions the group must hold.
///
/// # Errors
/// - `ExpectedToken` for a missing `,` or `)`.
/// - Propagates failures from the argument expressions.
fn parse_group(context: &mut ParseContext, arguments: usize) -> ParseResult<()> {
    context.scanner.advance();
    context.push_sentinel();

    parse_binary(context)?;
    for _ in 1..arguments {
        context.expect(Symbol::Comma, "','")?;
        parse_binary(context)?;
    }
    context.expect(Symbol::RParen, "')'")?;

    context.pop_sentinel()
}
