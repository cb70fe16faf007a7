use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{debug, info};
use varcalc::{
    error::EvalResult,
    interpreter::{
        evaluator::core::{DEFAULT_MAX_DEPTH, EvalOptions},
        session::Session,
        store::Resolver,
    },
    util::num::format_real,
};

const GREETING: &str = "Введите выражение (например, 3 + 5 * (2 - 8) или x + y):";

/// varcalc evaluates arithmetic expressions with `+ - * /` and parentheses,
/// asking for the value of every variable the first time it is used.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. When omitted, the expression is read from
    /// standard input.
    expression: Option<String>,

    /// Evaluates every non-empty line of a file in one session.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Keeps reading expressions from standard input until it is closed.
    #[arg(short, long, conflicts_with_all = ["expression", "file"])]
    interactive: bool,

    /// Deepest parenthesis nesting accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prints every variable bound during the session before exiting.
    #[arg(long)]
    show_vars: bool,

    /// Enables debug logging on standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let options = EvalOptions { max_depth: args.max_depth };
    let mut session = Session::with_options(prompt_for_variable, options);
    debug!("parenthesis nesting limited to {}", session.options().max_depth);

    let all_ok = if let Some(expression) = &args.expression {
        report(session.evaluate(expression))
    } else if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        run_script(&mut session, &script)
    } else {
        println!("{GREETING}");
        run_console(&mut session, args.interactive)
    };

    if args.show_vars {
        for (name, value) in session.variables().sorted() {
            println!("{name} = {}", format_real(value));
        }
    }

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Evaluates each non-empty line of `script`, continuing past failures.
fn run_script<R: Resolver>(session: &mut Session<R>, script: &str) -> bool {
    let mut all_ok = true;
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        debug!("script line {}", number + 1);
        all_ok &= report(session.evaluate(line));
    }
    all_ok
}

/// Reads expressions from standard input: one, or all of them when
/// `interactive` is set.
fn run_console<R: Resolver>(session: &mut Session<R>, interactive: bool) -> bool {
    let mut all_ok = true;
    loop {
        let line = match read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                return false;
            },
        };

        if interactive && line.trim().is_empty() {
            continue;
        }
        all_ok &= report(session.evaluate(&line));

        if !interactive {
            break;
        }
    }
    info!("session ended with {} bound variable(s)", session.variables().len());
    all_ok
}

/// Prints the outcome of one evaluation and returns whether it succeeded.
fn report(result: EvalResult<f64>) -> bool {
    match result {
        Ok(value) => {
            println!("Результат: {}", format_real(value));
            true
        },
        Err(e) => {
            println!("Ошибка: {e}");
            false
        },
    }
}

/// Asks the operator for the value of `name` on the console.
fn prompt_for_variable(name: &str) -> io::Result<String> {
    print!("Введите значение для переменной '{name}': ");
    io::stdout().flush()?;
    read_line()?.ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "ввод закончился"))
}

/// Reads one line from standard input, or `None` once it is closed.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
