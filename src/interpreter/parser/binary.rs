use std::iter::Peekable;

use crate::{
    ast::{AddOperator, Expression, Factor, MulOperator, Position, Term},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_signed_atom},
    },
};

/// Parses addition and subtraction chains.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An [`Expression`] holding the leading term and every `(operator, term)`
/// pair, in source order.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let first = parse_multiplicative(tokens)?;
    let mut rest = Vec::new();
    while let Some((token, _)) = tokens.peek() {
        let op = match token {
            Token::Plus => AddOperator::Add,
            Token::Minus => AddOperator::Sub,
            _ => break,
        };
        tokens.next();
        rest.push((op, parse_multiplicative(tokens)?));
    }
    Ok(Expression { position: first.position,
                    first,
                    rest })
}

/// Parses multiplication and division chains.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Term>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let first = parse_exponent(tokens)?;
    let mut rest = Vec::new();
    while let Some((token, _)) = tokens.peek() {
        let op = match token {
            Token::Star => MulOperator::Mul,
            Token::Slash => MulOperator::Div,
            _ => break,
        };
        tokens.next();
        rest.push((op, parse_exponent(tokens)?));
    }
    Ok(Term { position: first.position,
              first,
              rest })
}

/// Parses exponentiation chains.
///
/// Operands are collected in order; the evaluator folds them from the left,
/// so `a ^ b ^ c` means `(a ^ b) ^ c`.
///
/// The rule is: `factor := satom ("^" satom)*`
pub(crate) fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Factor>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let first = parse_signed_atom(tokens)?;
    let mut rest = Vec::new();
    while let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        rest.push(parse_signed_atom(tokens)?);
    }
    Ok(Factor { position: first.position,
                first,
                rest })
}
