//! Error types and handling for init-bundles
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`git`]: Repository discovery, status and staging errors
//! - [`install`]: Package manager invocation errors
//! - [`config`]: `ranvier.json` errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod git;
pub mod install;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for init-bundles
#[derive(Error, Diagnostic, Debug)]
pub enum InitError {
    // Git errors
    #[error("Not in a git repository")]
    #[diagnostic(
        code(init_bundles::git::not_in_repo),
        help("Run init-bundles from inside the game server's git checkout.")
    )]
    NotInGitRepository,

    #[error(
        "You have uncommitted changes. For safety setup-bundles must be run on a clean repository."
    )]
    #[diagnostic(
        code(init_bundles::git::dirty_tree),
        help("Commit or stash your changes, then run init-bundles again.")
    )]
    DirtyWorkingTree,

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(init_bundles::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to stage '{path}': {reason}")]
    #[diagnostic(code(init_bundles::git::stage_failed))]
    GitStageFailed { path: String, reason: String },

    // Install errors
    #[error("Failed to install bundle '{bundle}': {reason}")]
    #[diagnostic(
        code(init_bundles::install::bundle_failed),
        help(
            "Bundles installed before this one were left in place. Fix the problem and clean up manually before running again."
        )
    )]
    BundleInstallFailed { bundle: String, reason: String },

    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(init_bundles::install::spawn_failed),
        help("Check that the package manager is installed and on PATH, or pass --package-manager")
    )]
    CommandSpawnFailed { program: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(init_bundles::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(init_bundles::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(init_bundles::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(init_bundles::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(init_bundles::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(init_bundles::fs::io_error))]
    IoError { message: String },
}

impl From<serde_json::Error> for InitError {
    fn from(err: serde_json::Error) -> Self {
        InitError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InitError>;
