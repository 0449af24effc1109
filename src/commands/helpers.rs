//! Command helper utilities

use std::path::PathBuf;

use crate::error::{InitError, Result};

/// Resolve the directory repository discovery starts from
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_start_dir(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| InitError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
