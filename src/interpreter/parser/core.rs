use std::iter::Peekable;

use crate::{
    ast::{Expression, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_additive, statement::parse_statement, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program from source text.
///
/// Statements are separated by `;`. Empty statements are skipped and the
/// final `;` is optional.
///
/// Grammar: `program := (statement? ";")* statement?`
///
/// # Errors
/// Returns the first lexical or syntax error. Syntax errors are fatal: no
/// partial program is produced.
///
/// # Example
/// ```
/// use formulon::interpreter::parser::core::parse;
///
/// let program = parse("x = 1; y = x + 1;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("x = (1 + 2;").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}

/// Parses statements until the end of input.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs, ending in
///   [`Token::Eof`].
///
/// # Returns
/// The parsed [`Program`].
pub(crate) fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((Token::Eof, _)) | None => break,
            Some(_) => {
                statements.push(parse_statement(tokens)?);
                match tokens.next() {
                    Some((Token::Semicolon, _)) => {},
                    Some((Token::Eof, _)) | None => break,
                    Some((tok, position)) => return Err(unexpected(tok, "';'", *position)),
                }
            },
        }
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expression>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_additive(tokens)
}
