//! Gemini CLI spawning.

use std::path::Path;

use tracing::debug;

use crate::error::ComposerError;
use crate::preflight::Tool;
use crate::process::{CommandRunner, Invocation};

/// Invocation for `gemini chat <prompt>`.
///
/// `program` is the resolved executable path; failure reports still show
/// the plain `gemini` name.
pub fn gemini_invocation(program: &Path, prompt: &str) -> Invocation {
    Invocation::new(program)
        .arg("chat")
        .arg(prompt)
        .display_as(Tool::Gemini.binary())
}

/// Ask Gemini for a commit message and return it trimmed.
///
/// The output is taken as-is apart from whitespace trimming. A blank reply
/// is passed on unchanged; git rejects it at commit time.
pub async fn generate_message<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &Path,
    prompt: &str,
) -> Result<String, ComposerError> {
    let invocation = gemini_invocation(program, prompt);
    let stdout = runner
        .run(&invocation)
        .await?
        .into_stdout(&invocation, Tool::Gemini)?;

    let message = stdout.trim();
    debug!("Gemini returned {} chars", message.len());

    Ok(message.to_string())
}
