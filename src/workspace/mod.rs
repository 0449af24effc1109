//! Working context for a setup run
//!
//! The repository root and the clean/dirty state are determined once at
//! startup and handed to every step explicitly. The process working
//! directory is never changed.
//!
//! ## Repository Structure
//!
//! ```text
//! <root>/
//! ├── ranvier.json   # Server configuration, `bundles` is rewritten
//! ├── bundles/       # Bundle submodules created by the package manager
//! └── package.json   # Provides the `install-bundle` script
//! ```

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::git::VersionControl;

/// Where the setup runs and in what state the repository was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingContext {
    /// Top-level directory of the repository
    pub root: PathBuf,

    /// Whether tracked files had no uncommitted changes at startup
    pub clean: bool,
}

impl WorkingContext {
    pub fn new(root: impl Into<PathBuf>, clean: bool) -> Self {
        Self {
            root: root.into(),
            clean,
        }
    }

    /// Build the context by querying the repository once
    pub fn detect(root: &Path, vcs: &impl VersionControl) -> Result<Self> {
        let clean = !vcs.has_uncommitted_changes()?;
        Ok(Self::new(root, clean))
    }

    /// Absolute path of the server configuration file
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}
