use formulon::{
    ast::{Atom, Expression, Factor, Position, Program, SignedAtom, Statement, Term, Variable},
    error::{Diagnostic, EvalError, ParseError},
    interpret,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::Evaluator,
            function::core::{BUILTIN_FUNCTIONS, call_function},
        },
        parser::core::parse,
    },
    util::format::{DEFAULT_PRECISION, render},
};
use pretty_assertions::assert_eq;

fn run(src: &str) -> (Environment, Vec<String>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let env = interpret(src, &mut diagnostics).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    (env, diagnostics.iter().map(ToString::to_string).collect())
}

fn value_of(src: &str, name: &str) -> f64 {
    let (env, _) = run(src);
    env.get(name)
       .unwrap_or_else(|| panic!("'{name}' was not assigned by {src:?}"))
}

fn assert_nan(env: &Environment, name: &str) {
    assert!(env.get(name).is_some_and(f64::is_nan),
            "expected {name} to be NaN, found {:?}",
            env.get(name));
}

/// Builds a one-literal expression for hand-made ASTs.
fn literal(text: &str, position: Position) -> Expression {
    let signed = SignedAtom { sign: None,
                              atom: Atom::Number { text: text.to_string(),
                                                   position },
                              position };
    let factor = Factor { first: signed,
                          rest: Vec::new(),
                          position };
    let term = Term { first: factor,
                      rest: Vec::new(),
                      position };
    Expression { first: term,
                 rest: Vec::new(),
                 position }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(value_of("x = 2+3*4;", "x"), 14.0);
    assert_eq!(value_of("x = (2+3)*4;", "x"), 20.0);
    assert_eq!(value_of("x = 10 - 4 - 3;", "x"), 3.0);
    assert_eq!(value_of("x = 8 / 4 / 2;", "x"), 1.0);
    assert_eq!(value_of("x = 1 + 6 / 4 * 2;", "x"), 4.0);
}

#[test]
fn exponentiation_folds_from_the_left() {
    assert_eq!(value_of("x = 2^3^2;", "x"), 64.0);
    assert_eq!(value_of("x = 2^3*2;", "x"), 16.0);
    assert_eq!(value_of("x = 4^0.5;", "x"), 2.0);
}

#[test]
fn sign_applies_to_the_atom_before_exponentiation() {
    assert_eq!(value_of("x = -5^2;", "x"), 25.0);
    assert_eq!(value_of("x = -(5^2);", "x"), -25.0);
    assert_eq!(value_of("x = -(-5);", "x"), 5.0);
    assert_eq!(value_of("x = +3;", "x"), 3.0);
    assert_eq!(value_of("x = 2^-1;", "x"), 0.5);
    assert_eq!(value_of("x = 3 - -2;", "x"), 5.0);
}

#[test]
fn reassignment_overwrites_in_place() {
    let (env, diagnostics) = run("x=1; x=2;");
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("x"), Some(2.0));
    assert!(diagnostics.is_empty());

    assert_eq!(value_of("x = 1; x = x + 1; x = x * 10;", "x"), 20.0);
}

#[test]
fn statement_without_expression_assigns_zero() {
    let (env, diagnostics) = run("a; b = ; c = 1");
    assert_eq!(env.get("a"), Some(0.0));
    assert_eq!(env.get("b"), Some(0.0));
    assert_eq!(env.get("c"), Some(1.0));
    assert!(diagnostics.is_empty());
}

#[test]
fn numeric_literal_forms() {
    let (env, _) = run("a = 5.; b = .5; c = 1e3; d = 2.5E-3; e = 007;");
    assert_eq!(env.get("a"), Some(5.0));
    assert_eq!(env.get("b"), Some(0.5));
    assert_eq!(env.get("c"), Some(1000.0));
    assert_eq!(env.get("d"), Some(0.0025));
    assert_eq!(env.get("e"), Some(7.0));
}

#[test]
fn undefined_variable_is_reported_and_yields_nan() {
    let (env, diagnostics) = run("y = z + 1;");
    assert_nan(&env, "y");
    assert!(!env.contains("z"));
    assert_eq!(diagnostics, vec!["line 1:4 Undefined variable: z"]);
}

#[test]
fn errors_do_not_stop_or_roll_back_the_run() {
    let (env, diagnostics) = run("a = 1; b = missing; c = a + 1;");
    assert_eq!(env.get("a"), Some(1.0));
    assert_nan(&env, "b");
    assert_eq!(env.get("c"), Some(2.0));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn diagnostics_carry_line_and_column() {
    let (_, diagnostics) = run("a = 1;\nb = a +\n    c;");
    assert_eq!(diagnostics, vec!["line 3:4 Undefined variable: c"]);
}

#[test]
fn builtin_functions() {
    let (env, diagnostics) = run("s = sin(0); c = cos(0); t = tan(0); a = atan(1) * 4;
                                  as = asin(1); ac = acos(1); n = ln(1); p = pow(2, 10);
                                  l = log(8, 2);");
    assert!(diagnostics.is_empty());
    assert_eq!(env.get("s"), Some(0.0));
    assert_eq!(env.get("c"), Some(1.0));
    assert_eq!(env.get("t"), Some(0.0));
    assert_eq!(env.get("a"), Some(std::f64::consts::PI));
    assert_eq!(env.get("as"), Some(std::f64::consts::FRAC_PI_2));
    assert_eq!(env.get("ac"), Some(0.0));
    assert_eq!(env.get("n"), Some(0.0));
    assert_eq!(env.get("p"), Some(1024.0));
    assert!(env.get("l").is_some_and(|l| (l - 3.0).abs() < 1e-12));
}

#[test]
fn builtin_catalog_is_fixed() {
    assert_eq!(BUILTIN_FUNCTIONS,
               &["sin", "asin", "cos", "acos", "tan", "atan", "ln", "pow", "log"]);
    for name in BUILTIN_FUNCTIONS {
        assert!(matches!(call_function(name, &[]),
                         Err(EvalError::ArgumentCountMismatch { found: 0, .. })),
                "{name} accepted zero arguments");
    }
}

#[test]
fn function_arguments_are_full_expressions() {
    assert_eq!(value_of("b = 3; x = pow(b - 1, b + 1);", "x"), 16.0);
    assert_eq!(value_of("x = pow(pow(2, 2), 3) + 1;", "x"), 65.0);
}

#[test]
fn wrong_arity_is_reported_and_yields_nan() {
    let (env, diagnostics) = run("x = pow(2); y = log(8); z = sin(1, 2);");
    assert_nan(&env, "x");
    assert_nan(&env, "y");
    assert_nan(&env, "z");
    assert_eq!(diagnostics,
               vec!["line 1:4 Invalid number of arguments for function pow: expected 2, found 1",
                    "line 1:16 Invalid number of arguments for function log: expected 2, found 1",
                    "line 1:28 Invalid number of arguments for function sin: expected 1, found 2",]);
}

#[test]
fn empty_argument_list_is_reported() {
    let (env, diagnostics) = run("x = sin();");
    assert_nan(&env, "x");
    assert_eq!(diagnostics, vec!["line 1:4 Missing arguments in call to function sin"]);
}

#[test]
fn trailing_comma_is_reported() {
    let (env, diagnostics) = run("x = pow(2, 3,);");
    assert_nan(&env, "x");
    assert_eq!(diagnostics,
               vec!["line 1:4 Trailing commas are not allowed in function calls: pow"]);
}

#[test]
fn unknown_function_is_reported_and_yields_nan() {
    let (env, diagnostics) = run("x = Sin(0); y = sqrt(q);");
    assert_nan(&env, "x");
    assert_nan(&env, "y");
    assert_eq!(diagnostics,
               vec!["line 1:4 Unknown function: Sin",
                    "line 1:21 Undefined variable: q",
                    "line 1:16 Unknown function: sqrt",]);
}

#[test]
fn numeric_faults_are_silent() {
    let (env, diagnostics) = run("a = 1/0; b = -1/0; c = 0/0; d = asin(2); e = ln(0); f = log(8, 1);");
    assert!(diagnostics.is_empty());
    assert_eq!(env.get("a"), Some(f64::INFINITY));
    assert_eq!(env.get("b"), Some(f64::NEG_INFINITY));
    assert_nan(&env, "c");
    assert_nan(&env, "d");
    assert_eq!(env.get("e"), Some(f64::NEG_INFINITY));
    assert!(env.get("f").is_some_and(f64::is_infinite));
}

#[test]
fn nan_propagates_through_later_statements() {
    let (env, diagnostics) = run("a = nope; b = a * 0; c = pow(a, 0);");
    assert_nan(&env, "a");
    assert_nan(&env, "b");
    // powf(NaN, 0) is 1 under IEEE-754.
    assert_eq!(env.get("c"), Some(1.0));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn comments_and_blank_statements_are_ignored() {
    let (env, _) = run("// setup\n;; a = 1; // first\n\n;b = a + 1;;");
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("b"), Some(2.0));
}

#[test]
fn invalid_variable_name_stores_nan() {
    let position = Position::new(1, 0);
    let program = Program { statements: vec![Statement { variable: Variable { name: "9lives".to_string(),
                                                                              position },
                                                         expression: Some(literal("1", Position::new(1, 9))),
                                                         position }], };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let env = Evaluator::new(&mut diagnostics).run(&program);

    assert_nan(&env, "9lives");
    assert_eq!(diagnostics,
               vec![Diagnostic::new(position,
                                    EvalError::InvalidVariableName { name: "9lives".to_string() })]);
    assert_eq!(diagnostics[0].to_string(),
               "line 1:0 Invalid variable name: 9lives. Variable names must start with a letter or underscore.");
}

#[test]
fn invalid_literal_text_is_reported() {
    let position = Position::new(1, 0);
    let program = Program { statements: vec![Statement { variable: Variable { name: "x".to_string(),
                                                                              position },
                                                         expression: Some(literal("1.2.3", Position::new(1, 4))),
                                                         position }], };

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let env = Evaluator::new(&mut diagnostics).run(&program);

    assert_nan(&env, "x");
    assert_eq!(diagnostics[0].to_string(), "line 1:4 Invalid numeric literal: 1.2.3");
}

#[test]
fn evaluating_the_same_program_twice_is_deterministic() {
    let program = parse("a = 1.5; b = a ^ 3 / 7; c = sin(b) - log(a, 2); d = e + 1;").unwrap();

    let first = Evaluator::new(Vec::<Diagnostic>::new()).run(&program);
    let second = Evaluator::new(Vec::<Diagnostic>::new()).run(&program);

    let bits = |env: &Environment| env.iter().map(|(n, v)| (n.to_string(), v.to_bits())).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn syntax_errors_are_fatal() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    assert_eq!(interpret("x = 2 +", &mut diagnostics),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression",
                                                      position: Position::new(1, 7), }));
    assert_eq!(interpret("x = (1 + 2;", &mut diagnostics),
               Err(ParseError::UnexpectedToken { token:    ";".to_string(),
                                                 expected: "')'",
                                                 position: Position::new(1, 10), }));
    assert_eq!(interpret("3 = x;", &mut diagnostics),
               Err(ParseError::UnexpectedToken { token:    "3".to_string(),
                                                 expected: "a variable name",
                                                 position: Position::new(1, 0), }));
    assert_eq!(interpret("x = $;", &mut diagnostics),
               Err(ParseError::InvalidCharacter { text:     "$".to_string(),
                                                  position: Position::new(1, 4), }));
    assert!(interpret("x 5;", &mut diagnostics).is_err());
    assert!(interpret("x = --5;", &mut diagnostics).is_err());
    assert!(interpret("x = pow(,2);", &mut diagnostics).is_err());

    let error = interpret("a = 1;\nb = (2 *;", &mut diagnostics).unwrap_err();
    assert_eq!(error.position(), Position::new(2, 8));

    assert!(diagnostics.is_empty(), "nothing is evaluated after a syntax error");
}

#[test]
fn unterminated_input_is_reported_at_the_end_of_the_source() {
    let cases = [("x = (1", "')'", Position::new(1, 6)),
                 ("x = pow(1, 2", "',' or ')'", Position::new(1, 12)),
                 ("x = sin(", "an expression", Position::new(1, 8)),
                 ("x = 1;\ny = 2 ^", "an expression", Position::new(2, 7))];

    for (source, expected, position) in cases {
        let error = parse(source).unwrap_err();
        assert_eq!(error,
                   ParseError::UnexpectedEndOfInput { expected, position },
                   "{source:?}");
        assert!(error.position().line >= 1);
    }
}

#[test]
fn syntax_error_display_includes_position() {
    let error = parse("a = 1;\nb = * 2;").unwrap_err();
    assert_eq!(error.to_string(),
               "line 2:4 unexpected token '*', expected an expression");
}

#[test]
fn rendered_output_is_sorted_by_name() {
    let (env, _) = run("zeta = 1/3; alpha = 2^3^2; mid = 1e20; Upper = -0.5;");
    assert_eq!(render(&env, DEFAULT_PRECISION),
               "Upper=-0.5\nalpha=64\nmid=1e+20\nzeta=0.33333333\n");
}
