use crate::{ast::Position, error::EvalError};

/// A recoverable error together with the place it was found.
///
/// Displays as `line L:C message`, e.g. `line 1:4 Undefined variable: z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position of the node that produced the error.
    pub position: Position,
    /// What went wrong.
    pub error:    EvalError,
}

impl Diagnostic {
    /// Creates a diagnostic for `error` at `position`.
    #[must_use]
    pub const fn new(position: Position, error: EvalError) -> Self {
        Self { position, error }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.error)
    }
}

/// Receives the diagnostics produced during evaluation.
///
/// Reporting is a side channel: it never changes the value the evaluator
/// computes. Tests collect into a `Vec<Diagnostic>`, the command line writes to
/// standard error through [`StderrSink`].
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Writes each diagnostic to standard error as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}
