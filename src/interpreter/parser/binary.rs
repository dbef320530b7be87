use crate::interpreter::{
    classifier::Operator,
    parser::{
        core::{ParseContext, ParseResult},
        primary::parse_primary,
    },
};

/// Parses a chain of primaries joined by binary operators.
///
/// Each operator is pushed through [`ParseContext::push_operator`], which
/// reduces whatever already binds at least as tightly. When the chain ends,
/// every operator above the current sentinel is reduced, leaving the chain's
/// value on top of the operand stack.
///
/// Grammar: `expression := primary (binary_op primary)*`
///
/// # Parameters
/// - `context`: Parse state positioned on the first token of the expression.
///
/// # Returns
/// `Ok(())` with the expression's value on top of the operand stack and the
/// cursor on the first token that is not a binary operator.
///
/// # Errors
/// Propagates failures from primary parsing and from reductions.
pub fn parse_binary(context: &mut ParseContext) -> ParseResult<()> {
    parse_primary(context)?;
    while let Some(op) = Operator::binary(context.scanner.current()) {
        context.push_operator(op)?;
        context.scanner.advance();
        parse_primary(context)?;
    }
    context.reduce_to_sentinel()
}
