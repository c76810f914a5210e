//! Runtime configuration.

use std::path::PathBuf;

/// Validated settings for one run of the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute path of the target repository.
    pub path: PathBuf,
}

/// Parse the repository path argument.
///
/// The path must exist and be a directory; it is resolved to an absolute,
/// canonical path. Used as a clap `value_parser`.
pub fn parse_repo_path(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);

    if !path.exists() {
        return Err(format!("Directory '{}' does not exist.", raw));
    }
    if !path.is_dir() {
        return Err(format!("Directory '{}' is a file.", raw));
    }

    std::fs::canonicalize(&path).map_err(|e| format!("Could not resolve '{}': {}", raw, e))
}
