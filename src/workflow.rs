//! The commit workflow: preflight, diff, generate, confirm, commit.
//!
//! Steps run strictly one after another. Nothing is mutated before the user
//! confirms, so a failure at any step leaves the repository untouched.

use std::fmt;

use tracing::debug;

use crate::config::Config;
use crate::confirm::{CONFIRM_PROMPT, Confirmer, TerminalConfirmer, render_suggestion};
use crate::error::ComposerError;
use crate::gemini::{build_prompt, generate_message};
use crate::git;
use crate::preflight::{Tool, ToolResolver, WhichResolver, check_repository, check_tool_installed};
use crate::process::{CommandRunner, SystemRunner};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit was created; `output` is git's confirmation text.
    Committed { output: String },
    /// Nothing is staged.
    NoStagedChanges,
    /// The user declined the suggested message.
    Aborted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Committed { output } => write!(f, "\n✅ Commit successful!\n{}", output),
            Outcome::NoStagedChanges => write!(
                f,
                "No staged changes to commit. Use 'git add' to stage your changes."
            ),
            Outcome::Aborted => write!(f, "Commit aborted by user."),
        }
    }
}

/// Runs the workflow with injectable process runner, tool resolver and
/// confirmation prompt.
pub struct Composer<R, T, C> {
    runner: R,
    resolver: T,
    confirmer: C,
}

impl Composer<SystemRunner, WhichResolver, TerminalConfirmer> {
    /// Composer wired to real processes, `PATH` lookup and the terminal.
    pub fn system() -> Self {
        Self::new(SystemRunner, WhichResolver, TerminalConfirmer)
    }
}

impl<R, T, C> Composer<R, T, C>
where
    R: CommandRunner,
    T: ToolResolver,
    C: Confirmer,
{
    pub fn new(runner: R, resolver: T, confirmer: C) -> Self {
        Self {
            runner,
            resolver,
            confirmer,
        }
    }

    /// Run the workflow against `config.path`.
    ///
    /// Progress is printed to stdout as each step starts. Informational
    /// endings are returned as [`Outcome`]; everything else is an error.
    pub async fn run(&self, config: &Config) -> Result<Outcome, ComposerError> {
        let gemini = check_tool_installed(&self.resolver, Tool::Gemini)?;

        println!("Analyzing repository at: {}", config.path.display());
        check_repository(&config.path)?;

        let diff = git::staged_diff(&self.runner, &config.path).await?;
        if diff.is_empty() {
            return Ok(Outcome::NoStagedChanges);
        }

        let prompt = build_prompt(&diff);
        debug!("Prompt length: {} chars", prompt.len());

        println!("Sending staged changes to Gemini to generate a commit message...");
        let message = generate_message(&self.runner, &gemini, &prompt).await?;

        println!("{}", render_suggestion(&message));

        if !self.confirmer.confirm(CONFIRM_PROMPT)? {
            return Ok(Outcome::Aborted);
        }

        println!("Committing changes...");
        let output = git::commit(&self.runner, &config.path, &message).await?;

        Ok(Outcome::Committed { output })
    }
}
