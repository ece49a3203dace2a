use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use formulon::{
    error::StderrSink,
    init_tracing, interpret,
    util::format::{DEFAULT_PRECISION, render},
};

/// formulon evaluates formulas: `;`-separated variable assignments over
/// floating-point arithmetic and builtin math functions, printing every
/// variable once the program has run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the program from this file instead of the command line.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Number of significant digits used when printing values.
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=17))]
    precision: u32,

    /// Program text. Multiple arguments are joined without separators, so
    /// `formulon x = 1\; y = x + 1` works from a shell.
    program: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::from(2);
            },
        },
        None if args.program.is_empty() => {
            eprintln!("No program given. Pass the program text, or use -f <FILE>.");
            return ExitCode::from(1);
        },
        None => args.program.concat(),
    };

    match interpret(&source, StderrSink) {
        Ok(environment) => {
            let precision = usize::try_from(args.precision).unwrap_or(DEFAULT_PRECISION);
            print!("{}", render(&environment, precision));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        },
    }
}
