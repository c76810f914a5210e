//! Error types for gitcomposer using thiserror.
//!
//! The `Display` text of every variant is the message shown to the user, so
//! the entry point only has to print the error.

use std::path::PathBuf;

use thiserror::Error;

use crate::preflight::Tool;

/// Errors that end the commit workflow.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("{}", .0.not_installed_message())]
    MissingDependency(Tool),

    #[error("Error: The provided path is not a Git repository.")]
    NotARepository(PathBuf),

    #[error(
        "\nAn error occurred while running an external command:\nCommand: {command}\nError Message: {stderr}"
    )]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error(
        "\nAn error occurred while running an external command:\nCommand: {command}\nError Message: {source}"
    )]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Could not read confirmation: {0}")]
    ConfirmationFailed(String),
}
