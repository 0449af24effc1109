//! Git operations on the game server repository
//!
//! This module handles:
//! - Discovering the repository that encloses a directory
//! - Detecting uncommitted changes to tracked files
//! - Staging files for the next commit
//!
//! Everything goes through libgit2, so no `git` executable is required.

use std::path::{Path, PathBuf};

use git2::{Repository, Status, StatusOptions};
use normpath::PathExt;

use crate::error::{self, InitError, Result};

/// Version control operations the setup needs
pub trait VersionControl {
    /// Whether any tracked file has staged or unstaged modifications.
    /// Untracked and ignored files never count.
    fn has_uncommitted_changes(&self) -> Result<bool>;

    /// Stage a file, given relative to the repository root
    fn stage(&self, path: &Path) -> Result<()>;
}

/// The git repository the setup runs in
pub struct GitRepository {
    repo: Repository,
    root: PathBuf,
}

impl GitRepository {
    /// Find the repository enclosing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|_| InitError::NotInGitRepository)?;
        let root = repo
            .workdir()
            .map(normalize_root)
            .ok_or(InitError::NotInGitRepository)?;
        Ok(Self { repo, root })
    }

    /// Top-level directory of the working tree
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Normalize a working directory path for symlinked temp dirs (macOS /var -> /private).
/// Falls back to the path as-is when normalization fails.
fn normalize_root(path: &Path) -> PathBuf {
    path.normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

impl VersionControl for GitRepository {
    fn has_uncommitted_changes(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| error::git::operation_failed(format!("status: {}", e.message())))?;

        Ok(statuses
            .iter()
            .any(|entry| entry.status() != Status::CURRENT))
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let display = path.display().to_string();
        let mut index = self
            .repo
            .index()
            .map_err(|e| error::git::stage_failed(&display, e.message()))?;
        // Other processes (the bundle installer) may have rewritten the index on disk
        index
            .read(true)
            .map_err(|e| error::git::stage_failed(&display, e.message()))?;
        index
            .add_path(path)
            .map_err(|e| error::git::stage_failed(&display, e.message()))?;
        index
            .write()
            .map_err(|e| error::git::stage_failed(&display, e.message()))
    }
}
