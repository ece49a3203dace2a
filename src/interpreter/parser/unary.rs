use std::iter::Peekable;

use crate::{
    ast::{Atom, FunctionCall, Position, Sign, SignedAtom, Variable},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_arguments, unexpected},
        },
    },
};

/// Parses an atom with an optional prefix sign.
///
/// Only one sign is allowed; `-(-x)` needs the parentheses.
///
/// Grammar: `satom := ("+" | "-")? atom`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A [`SignedAtom`] positioned at its sign, or at the atom when unsigned.
pub(crate) fn parse_signed_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SignedAtom>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let sign = match tokens.peek() {
        Some((Token::Plus, position)) => Some((Sign::Plus, *position)),
        Some((Token::Minus, position)) => Some((Sign::Minus, *position)),
        _ => None,
    };
    if sign.is_some() {
        tokens.next();
    }

    let atom = parse_atom(tokens)?;
    let position = sign.map_or_else(|| atom.position(), |(_, position)| position);

    Ok(SignedAtom { sign: sign.map(|(sign, _)| sign),
                    atom,
                    position })
}

/// Parses an atom.
///
/// Grammar:
/// ```text
///     atom := "(" expression ")"
///           | NUMBER
///           | IDENT "(" arguments
///           | IDENT
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed [`Atom`] or a `ParseError` on failure.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Atom>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::LParen, position)) => parse_grouping(tokens, *position),
        Some((Token::Number(text), position)) => Ok(Atom::Number { text:     text.clone(),
                                                                   position: *position, }),
        Some((Token::Identifier(name), position)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let (arguments, trailing_comma) = parse_arguments(tokens)?;
                Ok(Atom::Call(FunctionCall { name: name.clone(),
                                             arguments,
                                             trailing_comma,
                                             position: *position }))
            } else {
                Ok(Atom::Variable(Variable { name:     name.clone(),
                                             position: *position, }))
            }
        },
        Some((tok, position)) => Err(unexpected(tok, "an expression", *position)),
        None => unreachable!("token streams end with Eof"),
    }
}

/// Parses the rest of a parenthesized expression after `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Atom>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let expression = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Atom::Group { expression: Box::new(expression),
                                                     position }),
        Some((tok, position)) => Err(unexpected(tok, "')'", *position)),
        None => unreachable!("token streams end with Eof"),
    }
}
