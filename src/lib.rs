//! # formulon
//!
//! formulon is a small formula interpreter written in Rust.
//! It evaluates programs made of variable assignments over floating-point
//! arithmetic and a fixed set of builtin math functions, keeping one variable
//! environment across all statements of a run.
//!
//! Semantic mistakes (undefined variables, unknown functions, wrong argument
//! counts) never stop a run: they are reported as positioned diagnostics and
//! the affected value becomes NaN.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use crate::{
    error::{DiagnosticSink, ParseError},
    interpreter::{environment::Environment, evaluator::core::Evaluator, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the node types that represent a program as a tree:
/// statements, the expression/term/factor chains, signed atoms, atoms and
/// function calls. The AST is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one type per grammar level.
/// - Attaches source positions to every node for diagnostics.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines the fatal errors raised while lexing or parsing, the
/// recoverable errors raised while evaluating, and the diagnostics and sinks
/// used to report the latter.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column positions for context.
/// - Routes recoverable errors through a single reporting sink.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the variable environment and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities.
///
/// Currently the output formatting shared by the binary and the tests.
pub mod util;

static TRACING_INIT: Once = Once::new();

/// Parses and evaluates `source`, returning the final environment.
///
/// Diagnostics for recoverable errors are sent to `sink` as they occur; they
/// never stop the run.
///
/// # Errors
/// Returns a [`ParseError`] if the source is not syntactically valid. In that
/// case nothing is evaluated.
///
/// # Examples
/// ```
/// use formulon::{error::Diagnostic, interpret};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// let env = interpret("x = 2 ^ 3 ^ 2; y = pow(2);", &mut diagnostics).unwrap();
/// assert_eq!(env.get("x"), Some(64.0));
/// assert!(env.get("y").is_some_and(f64::is_nan));
/// assert_eq!(diagnostics.len(), 1);
///
/// // Syntax errors are fatal.
/// assert!(interpret("x = 2 +", &mut diagnostics).is_err());
/// ```
pub fn interpret<S: DiagnosticSink>(source: &str, sink: S) -> Result<Environment, ParseError> {
    let program = parse(source)?;
    Ok(Evaluator::new(sink).run(&program))
}

/// Initializes tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=formulon=debug` or `RUST_LOG=formulon=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
