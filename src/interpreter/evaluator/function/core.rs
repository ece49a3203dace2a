use crate::{
    ast::FunctionCall,
    error::{DiagnosticSink, EvalError},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, log},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values, already checked against
/// its arity, and returns the result.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => { arity: 1, func: builtin::sin },
    "asin" => { arity: 1, func: builtin::asin },
    "cos"  => { arity: 1, func: builtin::cos },
    "acos" => { arity: 1, func: builtin::acos },
    "tan"  => { arity: 1, func: builtin::tan },
    "atan" => { arity: 1, func: builtin::atan },
    "ln"   => { arity: 1, func: builtin::ln },
    "pow"  => { arity: 2, func: builtin::pow },
    "log"  => { arity: 2, func: log::log },
}

/// Calls the builtin `name` with already evaluated arguments.
///
/// Names are matched exactly and case-sensitively.
///
/// # Errors
/// - [`EvalError::UnknownFunction`] if `name` is not a builtin.
/// - [`EvalError::ArgumentCountMismatch`] if `args` does not match its arity.
///
/// # Example
/// ```
/// use formulon::{error::EvalError, interpreter::evaluator::function::core::call_function};
///
/// assert_eq!(call_function("pow", &[2.0, 3.0]), Ok(8.0));
/// assert_eq!(call_function("pow", &[2.0]),
///            Err(EvalError::ArgumentCountMismatch { name:     "pow".to_string(),
///                                                   expected: 2,
///                                                   found:    1, }));
/// assert!(matches!(call_function("Sin", &[0.0]), Err(EvalError::UnknownFunction { .. })));
/// ```
pub fn call_function(name: &str, args: &[f64]) -> EvalResult<f64> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name == name)
                               .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;

    if args.len() != builtin.arity {
        return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                      expected: builtin.arity,
                                                      found:    args.len(), });
    }

    tracing::trace!(name, ?args, "calling builtin");
    Ok((builtin.func)(args))
}

impl<S: DiagnosticSink> Evaluator<S> {
    /// Evaluates a function call.
    ///
    /// The call is checked in this order, each failure reporting a diagnostic
    /// at the function name and yielding NaN:
    /// 1. the argument list is empty,
    /// 2. the argument list ends with a comma,
    /// 3. the name is not a builtin,
    /// 4. the argument count does not match the builtin's arity.
    ///
    /// Arguments are evaluated left to right between steps 2 and 3, so errors
    /// inside them are reported even when the call itself fails.
    pub(crate) fn eval_function_call(&mut self, call: &FunctionCall) -> f64 {
        if call.arguments.is_empty() {
            self.report(call.position,
                        EvalError::MissingArguments { name: call.name.clone() });
            return f64::NAN;
        }
        if call.trailing_comma {
            self.report(call.position,
                        EvalError::TrailingComma { name: call.name.clone() });
            return f64::NAN;
        }

        let args = call.arguments
                       .iter()
                       .map(|argument| self.evaluate(argument))
                       .collect::<Vec<_>>();

        call_function(&call.name, &args).unwrap_or_else(|error| {
                                              self.report(call.position, error);
                                              f64::NAN
                                          })
    }
}
