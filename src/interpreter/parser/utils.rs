use std::iter::Peekable;

use crate::{
    ast::{Expression, Position, Variable},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Builds the error for `token` found where `expected` was required.
///
/// [`Token::Eof`] becomes [`ParseError::UnexpectedEndOfInput`].
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: &'static str,
                                                 position: Position)
                                                 -> ParseError {
    match token {
        Token::Eof => ParseError::UnexpectedEndOfInput { expected, position },
        tok => ParseError::UnexpectedToken { token: tok.to_string(),
                                             expected,
                                             position },
    }
}

/// Parses the argument list of a function call.
///
/// The opening `(` must already be consumed. An empty list `()` and a trailing
/// comma before `)` are both accepted here; the evaluator reports them.
///
/// Grammar: `arguments := (expression ("," expression)* ","?)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
///
/// # Returns
/// The argument expressions and whether the list ended with a comma.
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the list is not
/// closed.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<(Vec<Expression>,
                                                                 bool)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok((arguments, false));
    }
    loop {
        arguments.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {
                if let Some((Token::RParen, _)) = tokens.peek() {
                    tokens.next();
                    return Ok((arguments, true));
                }
            },
            Some((Token::RParen, _)) => return Ok((arguments, false)),
            Some((tok, position)) => return Err(unexpected(tok, "',' or ')'", *position)),
            None => unreachable!("token streams end with Eof"),
        }
    }
}

/// Parses a plain identifier into a [`Variable`].
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_variable<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<Variable>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok(Variable { name:     name.clone(),
                                                                   position: *position, }),
        Some((tok, position)) => Err(unexpected(tok, "a variable name", *position)),
        None => unreachable!("token streams end with Eof"),
    }
}
