//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use git2::Repository;

use gitcomposer::{ComposerError, Confirmer, ToolResolver};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    ///
    /// The repository carries its own identity so `git commit` works without
    /// a global config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        Self { dir, repo }
    }

    /// Canonical path of the working tree.
    pub fn path(&self) -> PathBuf {
        fs::canonicalize(self.dir.path()).expect("Failed to canonicalize repo path")
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Install an executable hook script under `.git/hooks`.
    pub fn install_hook(&self, name: &str, body: &str) {
        let hooks = self.dir.path().join(".git").join("hooks");
        fs::create_dir_all(&hooks).expect("Failed to create hooks dir");
        write_script(&hooks.join(name), body);
    }

    /// Message of the HEAD commit, or None if nothing has been committed.
    pub fn head_message(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        let commit = head.peel_to_commit().ok()?;
        commit.message().map(String::from)
    }
}

/// Write an executable `/bin/sh` script at `path`.
pub fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    let mut perms = fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod script");
}

/// A directory holding a fake `gemini` executable.
pub struct FakeGemini {
    pub dir: tempfile::TempDir,
}

impl FakeGemini {
    /// Create a fake `gemini` whose body is the given shell script.
    ///
    /// The script receives `chat` as `$1` and the prompt as `$2`.
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        write_script(&dir.path().join("gemini"), body);
        Self { dir }
    }

    /// A fake that prints `message` on stdout.
    pub fn replying(message: &str) -> Self {
        Self::new(&format!("printf '%s\\n' '{}'", message))
    }

    pub fn bin_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn program(&self) -> PathBuf {
        self.dir.path().join("gemini")
    }

    pub fn resolver(&self) -> FixedResolver {
        FixedResolver(Some(self.program()))
    }
}

/// Resolver that always answers with the same path (or nothing).
pub struct FixedResolver(pub Option<PathBuf>);

impl ToolResolver for FixedResolver {
    fn resolve(&self, _binary: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Confirmer with a fixed answer.
pub struct Answer(pub bool);

impl Confirmer for Answer {
    fn confirm(&self, _prompt: &str) -> Result<bool, ComposerError> {
        Ok(self.0)
    }
}
