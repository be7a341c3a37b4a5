use std::{fs, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use numq::{
    config::{DEFAULT_DIGITS, Precision},
    interpreter::evaluator::core::{Engine, answer},
    session::{Outcome, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// numq evaluates arithmetic queries over real and complex numbers with
/// arbitrary precision.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of significant digits results are computed and shown with.
    #[arg(short, long, default_value_t = DEFAULT_DIGITS)]
    digits: u64,

    /// Tells numq to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Script to run. Without it numq starts an interactive session.
    contents: Option<String>,
}

const PROMPT: &str = ">>> ";

const HELP: &str = "\
Queries:
  OPCODE x          e.g. SINE 30, FACTORIAL 5, CONJUGATE 3+4i
  OPCODE x,y        e.g. ADD 2,3, ROOT 27,3, MULTIPLY 1+2i,3-1i
  set NAME = VALUE  binds a literal or the answer of a query
  get NAME          shows a bound value
Commands:
  help              shows this text
  clear             clears the screen
  flushmem          forgets every variable
  quit, exit        leaves numq";

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut session = Session::new(Engine::new(Precision::new(args.digits)));

    match args.contents {
        Some(contents) => run_script(&mut session, &contents, args.file),
        None => repl(&mut session),
    }
}

fn run_script(session: &mut Session, contents: &str, is_file: bool) -> ExitCode {
    let script = if is_file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("{}",
                          format!("Failed to read the input file '{contents}'. Perhaps this file \
                                   does not exist?").red());
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.to_string()
    };

    match session.run_script(&script) {
        Ok(answers) => {
            for line in answers {
                print!("{line}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        },
    }
}

fn repl(session: &mut Session) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}", format!("Failed to start the line editor: {e}").red());
            return ExitCode::FAILURE;
        },
    };

    println!("{} {}",
             "numq".bold(),
             format!("{} ({} digits). Type 'help' for help.",
                     env!("CARGO_PKG_VERSION"),
                     session.engine().precision().digits()).dimmed());

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", format!("readline error: {e}").red());
                return ExitCode::FAILURE;
            },
        };
        let _ = editor.add_history_entry(line.as_str());

        match line.trim() {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "clear" => {
                let _ = editor.clear_screen();
            },
            "flushmem" => session.reset(),
            _ => match session.submit(&line) {
                Ok(Outcome::Answered(answers)) => {
                    for line in &answers {
                        println!("{}", answer(line).bold());
                    }
                },
                Ok(Outcome::Assigned { .. } | Outcome::Skipped) => {},
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
        }
    }

    ExitCode::SUCCESS
}
