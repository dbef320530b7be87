use std::path::PathBuf;

use log::warn;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{interpreter::evaluator::core::Calculator, util::num::format_number};

/// What the session loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Keep reading; print the text if there is any.
    Continue(Option<String>),
    /// End the session.
    Quit,
}

/// Handles one line of input against `calculator`.
///
/// Blank lines print nothing. Lines starting with `:` are session commands:
/// `:vars` lists the variables, `:reset` restores the seeded ones and
/// `:quit` ends the session. Everything else is evaluated.
///
/// # Example
/// ```
/// use reckon::{
///     Calculator,
///     repl::{LineResult, process_line},
/// };
///
/// let mut calc = Calculator::new();
/// assert_eq!(process_line(&mut calc, "x = 4"), LineResult::Continue(Some("4".to_string())));
/// assert_eq!(process_line(&mut calc, "x!"), LineResult::Continue(Some("24".to_string())));
/// assert_eq!(process_line(&mut calc, ":quit"), LineResult::Quit);
/// ```
pub fn process_line(calculator: &mut Calculator, line: &str) -> LineResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineResult::Continue(None);
    }

    match trimmed {
        ":quit" | ":q" => LineResult::Quit,
        ":vars" => {
            let listing = calculator.variables()
                                    .iter()
                                    .map(|(name, value)| format!("{name} = {}", format_number(value)))
                                    .collect::<Vec<_>>()
                                    .join("\n");
            LineResult::Continue(Some(listing))
        },
        ":reset" => {
            calculator.variables_mut().reset();
            LineResult::Continue(Some("Variables reset.".to_string()))
        },
        command if command.starts_with(':') => {
            LineResult::Continue(Some(format!("Unknown command '{command}'. Try :vars, :reset or :quit.")))
        },
        expression => LineResult::Continue(Some(calculator.respond(expression))),
    }
}

/// Runs an interactive session until end of input or `:quit`.
pub fn run_repl(mut calculator: Calculator) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize line editor: {e}");
            std::process::exit(1);
        },
    };

    let history = history_path();
    if let Some(path) = &history
       && let Err(e) = editor.load_history(path)
    {
        warn!("could not load history from {}: {e}", path.display());
    }

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    warn!("could not record history entry: {e}");
                }
                match process_line(&mut calculator, &line) {
                    LineResult::Continue(Some(text)) => println!("{text}"),
                    LineResult::Continue(None) => {},
                    LineResult::Quit => break,
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            },
        }
    }

    if let Some(path) = &history
       && let Err(e) = editor.save_history(path)
    {
        warn!("could not save history to {}: {e}", path.display());
    }
}

fn history_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".reckon_history"))
}
