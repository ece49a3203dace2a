/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, folds arithmetic chains, binds variables and
/// dispatches builtin function calls. Recoverable errors are reported to a
/// [`DiagnosticSink`](crate::error::DiagnosticSink) and replaced with NaN, so
/// a run always completes.
///
/// # Responsibilities
/// - Evaluates expressions, statements and function calls.
/// - Owns the [`Environment`](environment::Environment) for one run.
/// - Reports positioned diagnostics for semantic errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for text that matches no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`Program`](crate::ast::Program) nodes following the
///   expression/term/factor/signed-atom grammar.
/// - Rejects malformed syntax with a positioned
///   [`ParseError`](crate::error::ParseError).
pub mod parser;
/// The variable store of a single run.
pub mod environment;
