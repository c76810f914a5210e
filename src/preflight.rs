//! Preflight checks run before anything touches the repository.
//!
//! Both checks are pure guards: they never spawn a process or modify state.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ComposerError;

/// External tools the workflow depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Git,
    Gemini,
}

impl Tool {
    /// Executable name looked up on `PATH`.
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Gemini => "gemini",
        }
    }

    /// Message shown when the executable cannot be found.
    pub fn not_installed_message(&self) -> &'static str {
        match self {
            Tool::Git => {
                "Error: 'git' command not found. Make sure Git is installed and in your PATH."
            }
            Tool::Gemini => {
                "Error: The 'gemini' CLI is not installed or not in your PATH.\n\
                 Please install it using: npm install -g @google/gemini-cli"
            }
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Trait for locating executables.
///
/// This abstraction allows tests to substitute a fake `gemini`.
#[cfg_attr(test, mockall::automock)]
pub trait ToolResolver: Send + Sync {
    /// Return the absolute path of `binary`, or None if it is not installed.
    fn resolve(&self, binary: &str) -> Option<PathBuf>;
}

/// Resolver backed by the `which` crate (searches `PATH`).
pub struct WhichResolver;

impl ToolResolver for WhichResolver {
    fn resolve(&self, binary: &str) -> Option<PathBuf> {
        which::which(binary).ok()
    }
}

/// Check that `tool` is installed and return its resolved path.
pub fn check_tool_installed<R: ToolResolver + ?Sized>(
    resolver: &R,
    tool: Tool,
) -> Result<PathBuf, ComposerError> {
    match resolver.resolve(tool.binary()) {
        Some(path) => {
            debug!("Found {} at {}", tool, path.display());
            Ok(path)
        }
        None => Err(ComposerError::MissingDependency(tool)),
    }
}

/// Check that `path` contains a `.git` directory.
pub fn check_repository(path: &Path) -> Result<(), ComposerError> {
    if path.join(".git").is_dir() {
        Ok(())
    } else {
        Err(ComposerError::NotARepository(path.to_path_buf()))
    }
}
