//! gitcomposer - A CLI tool that drafts a commit message from staged changes.
//!
//! # Overview
//!
//! gitcomposer reads the staged diff of a repository with `git`, asks the
//! Gemini CLI for a conventional, imperative-mood commit message, shows the
//! suggestion and commits it once the user confirms.

pub mod config;
pub mod confirm;
pub mod error;
pub mod gemini;
pub mod git;
pub mod preflight;
pub mod process;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use confirm::{Confirmer, TerminalConfirmer};
pub use error::ComposerError;
pub use preflight::{Tool, ToolResolver, WhichResolver};
pub use process::{CommandRunner, Invocation, ProcessOutcome, SystemRunner};
pub use workflow::{Composer, Outcome};
