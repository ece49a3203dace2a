use std::{fs, process::Command};

use pretty_assertions::assert_eq;

struct Outcome {
    code:   Option<i32>,
    stdout: String,
    stderr: String,
}

fn formulon(args: &[&str]) -> Outcome {
    let output = Command::new(env!("CARGO_BIN_EXE_formulon")).args(args)
                                                             .env_remove("RUST_LOG")
                                                             .output()
                                                             .unwrap_or_else(|e| {
                                                                 panic!("Failed to run formulon: {e}")
                                                             });
    Outcome { code:   output.status.code(),
              stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
              stderr: String::from_utf8_lossy(&output.stderr).into_owned(), }
}

#[test]
fn prints_environment_and_succeeds_despite_diagnostics() {
    let out = formulon(&["x = 2+3*4; y = z"]);

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "x=14\ny=nan\n");
    assert_eq!(out.stderr, "line 1:15 Undefined variable: z\n");
}

#[test]
fn program_arguments_are_joined_without_separator() {
    let out = formulon(&["x = 1;", "y = x", "+ 1;", "z=x", "y"]);

    // "z=x" + "y" reads as the single identifier `xy`.
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "x=1\ny=2\nz=nan\n");
    assert_eq!(out.stderr, "line 1:17 Undefined variable: xy\n");
}

#[test]
fn precision_controls_significant_digits() {
    assert_eq!(formulon(&["--precision", "3", "x = 1/3"]).stdout, "x=0.333\n");
    assert_eq!(formulon(&["x = 1/3"]).stdout, "x=0.33333333\n");
    assert_eq!(formulon(&["-p", "17", "x = 0.1"]).stdout, "x=0.10000000000000001\n");
}

#[test]
fn precision_outside_range_is_rejected() {
    for precision in ["0", "18"] {
        let out = formulon(&["--precision", precision, "x = 1"]);
        assert_ne!(out.code, Some(0), "--precision {precision}");
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn syntax_error_exits_with_one() {
    let out = formulon(&["x = 2 +"]);

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(out.stderr, "line 1:7 unexpected end of input, expected an expression\n");
}

#[test]
fn missing_program_exits_with_one() {
    let out = formulon(&[]);

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.starts_with("No program given"));
}

#[test]
fn unreadable_file_exits_with_two() {
    let out = formulon(&["-f", "/nonexistent/formulon/program.fm"]);

    assert_eq!(out.code, Some(2));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.starts_with("Failed to read the input file"));
}

#[test]
fn reads_program_from_file() {
    let expected = fs::read_to_string("tests/programs/precedence.out").unwrap_or_else(|e| {
                                                                           panic!("Failed to read expected output: {e}")
                                                                       });

    let out = formulon(&["-f", "tests/programs/precedence.fm"]);

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, expected);
    assert!(out.stderr.is_empty());
}
