use std::iter::Peekable;

use crate::{
    ast::{Position, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_variable,
        },
    },
};

/// Parses a single statement.
///
/// A statement is a variable name, optionally followed by `=` and an
/// expression. Both `x;` and `x = ;` leave the expression out, which assigns
/// `0` at evaluation time.
///
/// Grammar: `statement := IDENT ("=" expression?)?`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node positioned at its variable name.
pub(crate) fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let variable = parse_variable(tokens)?;

    let expression = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        match tokens.peek() {
            Some((Token::Semicolon | Token::Eof, _)) | None => None,
            Some(_) => Some(parse_expression(tokens)?),
        }
    } else {
        None
    };

    Ok(Statement { position: variable.position,
                   variable,
                   expression })
}
