//! sprig: evaluate Go-style declarations from the command line or a REPL.

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::Level;

use sprig::frontends::{CharStyle, GoFrontend};
use sprig::{EvalContext, LanguageFrontend, Session};

const PROMPT: &str = ">> ";
const FAREWELL: &str = "See you later";

/// Evaluate Go variable declarations and print the value bound to each name.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print characters as their decimal code point instead of the character.
    #[arg(long)]
    code_points: bool,

    /// Maximum expression nesting depth.
    #[arg(long, default_value_t = 256)]
    max_depth: usize,

    /// Leave declarations without initializers unbound instead of giving
    /// them the zero value of their type.
    #[arg(long)]
    no_zero_values: bool,

    /// Evaluate this source and exit instead of starting the REPL.
    #[arg(short, long)]
    eval: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let char_style = if args.code_points {
        CharStyle::CodePoint
    } else {
        CharStyle::Scalar
    };
    let ctx = EvalContext::with_max_depth(args.max_depth).with_zero_values(!args.no_zero_values);
    let mut session = Session::with_frontend(GoFrontend::with_char_style(char_style), ctx);

    match args.eval {
        Some(source) => match session.evaluate_line(&source) {
            Ok(line) => {
                println!("{}", line);
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => repl(&mut session),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn repl(session: &mut Session) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    println!(
        "sprig {} ({} declarations). Type :help for commands.",
        sprig::VERSION,
        session.frontend().name()
    );

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    ":quit" | ":q" => {
                        println!("{}", FAREWELL);
                        break;
                    }
                    ":help" => print_help(),
                    ":reset" => {
                        session.reset();
                        println!("Environment cleared");
                    }
                    ":env" => print_env(session),
                    source => match session.evaluate_line(source) {
                        Ok(rendered) if rendered.is_empty() => {}
                        Ok(rendered) => println!("{}", rendered),
                        Err(e) => eprintln!("{}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", FAREWELL);
                break;
            }
            Err(e) => return Err(anyhow::Error::new(e).context("failed to read line")),
        }
    }
    Ok(())
}

fn print_env(session: &Session) {
    let env = session.env();
    let frontend = session.frontend();
    for name in env.prelude().names() {
        if let Some(value) = env.get(name) {
            println!("{} {} = {} (builtin)", name, value.kind(), frontend.format_value(value));
        }
    }
    for (name, value) in env.iter() {
        println!("{} {} = {}", name, value.kind(), frontend.format_value(value));
    }
}

fn print_help() {
    println!("Enter Go declarations, e.g. `var a, b = 5 * -5, \"go\"`.");
    println!("  :env     show builtins and user bindings");
    println!("  :reset   forget all user bindings");
    println!("  :help    show this message");
    println!("  :quit    leave the REPL");
}
