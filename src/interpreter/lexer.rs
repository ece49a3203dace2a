use logos::Logos;

use crate::{ast::Position, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    ///
    /// The literal is kept as text; the evaluator converts it.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; only advance the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by logos, appended by [`tokenize`].
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Semicolon => write!(f, ";"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
            Self::Eof => write!(f, "<EOF>"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that token
/// columns can be computed from the token span.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Advances the line counter past a `\n`.
fn newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Converts a byte offset into a [`Position`] on the lexer's current line.
fn position_at(source: &str, extras: &LexerExtras, offset: usize) -> Position {
    let column = source.get(extras.line_start..offset)
                       .map_or(0, |prefix| prefix.chars().count());
    Position::new(extras.line, column)
}

/// Splits source text into positioned tokens.
///
/// The returned vector always ends with [`Token::Eof`], positioned just past
/// the last character, so the parser can report where input ran out.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for text that matches no token.
///
/// # Example
/// ```
/// use formulon::{
///     ast::Position,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("x = 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), Position::new(1, 0)),
///                 (Token::Equals, Position::new(1, 2)),
///                 (Token::Number("2".to_string()), Position::new(1, 4)),
///                 (Token::Eof, Position::new(1, 5))]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Position)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let position = position_at(source, &lexer.extras, lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(ParseError::InvalidCharacter { text: lexer.slice().to_string(),
                                                      position });
        }
    }

    let end = position_at(source, &lexer.extras, source.len());
    tokens.push((Token::Eof, end));

    Ok(tokens)
}
