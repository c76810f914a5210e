//! Git operations, run through the system `git` binary.
//!
//! Shelling out inherits the user's git config, hooks and signing setup.

use std::path::Path;

use tracing::debug;

use crate::error::ComposerError;
use crate::preflight::Tool;
use crate::process::{CommandRunner, Invocation};

/// Invocation for `git diff --staged` in `repo`.
pub fn staged_diff_invocation(repo: &Path) -> Invocation {
    Invocation::new(Tool::Git.binary())
        .arg("diff")
        .arg("--staged")
        .current_dir(repo)
}

/// Invocation for `git commit -m <message>` in `repo`.
///
/// The message is a single argument; it never passes through a shell.
pub fn commit_invocation(repo: &Path, message: &str) -> Invocation {
    Invocation::new(Tool::Git.binary())
        .arg("commit")
        .arg("-m")
        .arg(message)
        .current_dir(repo)
}

/// Capture the staged diff of `repo`.
///
/// An empty string means nothing is staged.
pub async fn staged_diff<R: CommandRunner + ?Sized>(
    runner: &R,
    repo: &Path,
) -> Result<String, ComposerError> {
    let invocation = staged_diff_invocation(repo);
    let diff = runner
        .run(&invocation)
        .await?
        .into_stdout(&invocation, Tool::Git)?;

    debug!("Staged diff is {} bytes", diff.len());
    Ok(diff)
}

/// Commit the staged changes of `repo` and return git's confirmation output.
pub async fn commit<R: CommandRunner + ?Sized>(
    runner: &R,
    repo: &Path,
    message: &str,
) -> Result<String, ComposerError> {
    let invocation = commit_invocation(repo, message);
    runner
        .run(&invocation)
        .await?
        .into_stdout(&invocation, Tool::Git)
}
