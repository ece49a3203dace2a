use crate::{
    ast::{AddOperator, Expression, Factor, MulOperator, Term},
    error::DiagnosticSink,
    interpreter::evaluator::core::Evaluator,
};

impl<S: DiagnosticSink> Evaluator<S> {
    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for expression evaluation. Terms are
    /// folded from the left, so `a - b - c` is `(a - b) - c`. Arithmetic
    /// follows IEEE-754: dividing by zero yields an infinity or NaN and is not
    /// reported.
    ///
    /// # Example
    /// ```
    /// use formulon::{
    ///     error::Diagnostic,
    ///     interpreter::{evaluator::core::Evaluator, parser::core::parse},
    /// };
    ///
    /// let program = parse("x = 10 - 4 - 3").unwrap();
    /// let expression = program.statements[0].expression.as_ref().unwrap();
    ///
    /// let mut evaluator = Evaluator::new(Vec::<Diagnostic>::new());
    /// assert_eq!(evaluator.evaluate(expression), 3.0);
    /// ```
    pub fn evaluate(&mut self, expression: &Expression) -> f64 {
        let mut value = self.eval_term(&expression.first);
        for (op, term) in &expression.rest {
            let next = self.eval_term(term);
            value = apply_additive(*op, value, next);
        }
        value
    }

    /// Folds a chain of `*` and `/` from the left.
    pub(crate) fn eval_term(&mut self, term: &Term) -> f64 {
        let mut value = self.eval_factor(&term.first);
        for (op, factor) in &term.rest {
            let next = self.eval_factor(factor);
            value = apply_multiplicative(*op, value, next);
        }
        value
    }

    /// Folds a chain of `^` from the left with `powf`.
    ///
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`, not `2 ^ 9`.
    pub(crate) fn eval_factor(&mut self, factor: &Factor) -> f64 {
        let mut value = self.eval_signed_atom(&factor.first);
        for exponent in &factor.rest {
            value = value.powf(self.eval_signed_atom(exponent));
        }
        value
    }
}

/// Applies `+` or `-`.
#[must_use]
pub fn apply_additive(op: AddOperator, left: f64, right: f64) -> f64 {
    match op {
        AddOperator::Add => left + right,
        AddOperator::Sub => left - right,
    }
}

/// Applies `*` or `/`.
#[must_use]
pub fn apply_multiplicative(op: MulOperator, left: f64, right: f64) -> f64 {
    match op {
        MulOperator::Mul => left * right,
        MulOperator::Div => left / right,
    }
}
