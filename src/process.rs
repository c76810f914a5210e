//! External process invocation.
//!
//! Every call to `git` or `gemini` goes through a [`CommandRunner`], which
//! reports a tagged [`ProcessOutcome`] instead of failing on a non-zero exit.
//! Callers decide what a failure means for their step.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::ComposerError;
use crate::preflight::Tool;

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Name shown in place of `program` when the command line is reported.
    pub display_name: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            display_name: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn display_as(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Renders the literal command line, program and arguments joined by spaces.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "{}", self.program.display())?,
        }
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running an external command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exit status zero; captured stdout.
    Success(String),
    /// Non-zero exit (or killed by a signal, in which case `code` is None).
    Failure { code: Option<i32>, stderr: String },
    /// The executable could not be found.
    NotFound,
}

impl ProcessOutcome {
    /// Convert the outcome into stdout, mapping failures onto [`ComposerError`].
    ///
    /// `tool` picks the "not installed" message when the executable is missing.
    pub fn into_stdout(self, invocation: &Invocation, tool: Tool) -> Result<String, ComposerError> {
        match self {
            ProcessOutcome::Success(stdout) => Ok(stdout),
            ProcessOutcome::Failure { code, stderr } => Err(ComposerError::CommandFailed {
                command: invocation.to_string(),
                code,
                stderr,
            }),
            ProcessOutcome::NotFound => Err(ComposerError::MissingDependency(tool)),
        }
    }
}

/// Trait for running external commands.
///
/// This abstraction allows replacing `git` and `gemini` in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion and report how it ended.
    ///
    /// Only spawn errors other than "not found" are returned as `Err`.
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome, ComposerError>;
}

/// Runner that spawns real processes with `tokio::process`.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome, ComposerError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        debug!(
            "Running {} with {} argument(s) in {:?}",
            invocation.program.display(),
            invocation.args.len(),
            invocation.cwd
        );

        let output = match command.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Executable {} not found", invocation.program.display());
                return Ok(ProcessOutcome::NotFound);
            }
            Err(source) => {
                return Err(ComposerError::SpawnFailed {
                    command: invocation.to_string(),
                    source,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code();
            debug!("{} exited with {:?}", invocation.program.display(), code);
            return Ok(ProcessOutcome::Failure { code, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        Ok(ProcessOutcome::Success(stdout))
    }
}
