use crate::{
    ast::{Atom, Position, Sign, SignedAtom, Variable},
    error::{DiagnosticSink, EvalError},
    interpreter::evaluator::core::Evaluator,
};

impl<S: DiagnosticSink> Evaluator<S> {
    /// Evaluates an atom and applies its sign.
    ///
    /// `-` negates the atom's value; `+` and a missing sign leave it unchanged.
    pub(crate) fn eval_signed_atom(&mut self, signed: &SignedAtom) -> f64 {
        let value = self.eval_atom(&signed.atom);
        match signed.sign {
            Some(Sign::Minus) => -value,
            Some(Sign::Plus) | None => value,
        }
    }

    /// Evaluates an atom.
    ///
    /// Groups recurse into their expression, literals are converted from their
    /// text, variables are looked up and calls go to the builtin dispatcher.
    pub(crate) fn eval_atom(&mut self, atom: &Atom) -> f64 {
        match atom {
            Atom::Group { expression, .. } => self.evaluate(expression),
            Atom::Number { text, position } => self.eval_number(text, *position),
            Atom::Variable(variable) => self.eval_variable(variable),
            Atom::Call(call) => self.eval_function_call(call),
        }
    }

    /// Converts literal text to a value, reporting text that is not a number.
    fn eval_number(&mut self, text: &str, position: Position) -> f64 {
        text.parse().unwrap_or_else(|_| {
                         self.report(position, EvalError::InvalidNumber { text: text.to_string() });
                         f64::NAN
                     })
    }

    /// Reads a variable, reporting names that have not been assigned.
    ///
    /// A missing variable evaluates to NaN and is not added to the
    /// environment.
    fn eval_variable(&mut self, variable: &Variable) -> f64 {
        if let Some(value) = self.environment().get(&variable.name) {
            return value;
        }
        self.report(variable.position,
                    EvalError::UndefinedVariable { name: variable.name.clone() });
        f64::NAN
    }
}
