use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use calcite::{
    Config, Error, Interpreter, Number, ScopePolicy,
    graph::to_dot,
    harness::{format_outcome, run_cases, strip_comment},
    interpreter::{lexer::tokenize, parser::core::parse_program},
};
use clap::Parser;

/// calcite evaluates arithmetic expressions with variables, user-defined
/// functions and a small builtin math library.
///
/// Without CONTENTS, calcite starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a file and evaluate each of its lines on its own.
    #[arg(short, long, conflicts_with = "check")]
    file: bool,

    /// Treat CONTENTS as a case file or a directory of `.test` case files and
    /// compare every result with the expected one.
    #[arg(short, long)]
    check: bool,

    /// With --check, also print every passing case.
    #[arg(short, long, requires = "check")]
    verbose: bool,

    /// Print the token stream and the syntax tree before evaluating.
    #[arg(short, long)]
    debug: bool,

    /// Write the syntax tree of each evaluated program as Graphviz DOT.
    #[arg(short, long, value_name = "PATH")]
    graph: Option<PathBuf>,

    /// Maximum number of nested user function calls.
    #[arg(long, default_value_t = Config::default().recursion_limit)]
    recursion_limit: usize,

    /// Give every user function call a fresh scope instead of the function's
    /// single persistent scope.
    #[arg(long)]
    fresh_scopes: bool,

    contents: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        Config { recursion_limit: self.recursion_limit,
                 scope_policy:    if self.fresh_scopes {
                     ScopePolicy::PerCall
                 } else {
                     ScopePolicy::Persistent
                 }, }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(contents) = args.contents.as_deref() else {
        repl(&args);
        return ExitCode::SUCCESS;
    };

    let success = if args.check {
        check(&args, Path::new(contents))
    } else if args.file {
        run_file(&args, Path::new(contents))
    } else {
        run(&args, &mut Interpreter::with_config(args.config()), contents)
    };

    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Evaluates one program and prints its result or error.
fn run(args: &Args, interpreter: &mut Interpreter, source: &str) -> bool {
    let outcome = evaluate(args, interpreter, source);
    match &outcome {
        Ok(value) => println!("{value}"),
        Err(_) => eprintln!("{}", format_outcome(&outcome)),
    }
    outcome.is_ok()
}

fn evaluate(args: &Args, interpreter: &mut Interpreter, source: &str) -> Result<Number, Error> {
    if !args.debug && args.graph.is_none() {
        return interpreter.eval(source);
    }

    let tokens = tokenize(source)?;
    if args.debug {
        println!("Tokens:");
        for token in &tokens {
            println!("{token}");
        }
        println!();
    }

    let tree = parse_program(&tokens)?;
    if args.debug {
        println!("{tree}\n");
    }
    if let Some(path) = &args.graph
       && let Err(e) = fs::write(path, to_dot(&tree))
    {
        eprintln!("Could not write graph to '{}': {e}", path.display());
    }

    interpreter.eval_tree(&tree)
}

/// Evaluates every non-empty line of a file as an independent program.
fn run_file(args: &Args, path: &Path) -> bool {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return false;
        },
    };

    let mut success = true;
    for line in source.lines().map(strip_comment).filter(|line| !line.is_empty()) {
        success &= run(args, &mut Interpreter::with_config(args.config()), line);
    }
    success
}

/// Runs case files and prints a summary.
fn check(args: &Args, root: &Path) -> bool {
    let report = match run_cases(root, args.config()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return false;
        },
    };

    if args.verbose {
        for pass in &report.passes {
            println!("{pass}");
        }
    }
    for failure in &report.failures {
        eprintln!("{failure}");
    }
    println!("\nNumber of tests passed: {}", report.passes.len());
    println!("Number of tests failed: {}", report.failures.len());

    report.is_success()
}

/// Reads programs from standard input until end of input.
///
/// Definitions and variables persist across lines; an error only discards
/// the line that caused it.
fn repl(args: &Args) {
    let mut interpreter = Interpreter::with_config(args.config());
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let line = strip_comment(&line);
        if !line.is_empty() {
            run(args, &mut interpreter, line);
        }
    }
}
