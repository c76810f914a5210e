//! Displaying the suggested message and asking the user to confirm it.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::error::ComposerError;

/// Question asked before committing.
pub const CONFIRM_PROMPT: &str = "Do you want to commit with this message?";

const SEPARATOR: &str = "---------------------------------";

/// Trait for yes/no confirmation.
///
/// This abstraction allows tests to answer without a terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    /// Ask `prompt`; a bare Enter counts as yes.
    fn confirm(&self, prompt: &str) -> Result<bool, ComposerError>;
}

/// Confirmation on standard input.
///
/// Uses a dialoguer prompt on a terminal; piped input is read line by line.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, ComposerError> {
        println!();

        if io::stdin().is_terminal() {
            return Confirm::new()
                .with_prompt(prompt)
                .default(true)
                .interact()
                .map_err(|e| ComposerError::ConfirmationFailed(e.to_string()));
        }

        read_confirmation(io::stdin().lock(), io::stdout(), prompt)
    }
}

/// Map one line of input to an answer. Empty input takes the default (yes).
///
/// Returns None for anything that is not a recognized answer.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask `prompt` on `output` and read answers from `input` until one is valid.
///
/// Running out of input without an answer is an error.
pub fn read_confirmation<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    prompt: &str,
) -> Result<bool, ComposerError> {
    let io_err = |e: io::Error| ComposerError::ConfirmationFailed(e.to_string());

    loop {
        write!(output, "{} [Y/n]: ", prompt).map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(ComposerError::ConfirmationFailed(
                "no answer on standard input".to_string(),
            ));
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Error: invalid input").map_err(io_err)?,
        }
    }
}

/// Frame a suggested commit message for display.
pub fn render_suggestion(message: &str) -> String {
    format!("\n✨ Suggested Commit Message ✨\n{SEPARATOR}\n{message}\n{SEPARATOR}")
}
