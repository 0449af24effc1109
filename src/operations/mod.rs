//! Operations module for setting up bundles
//!
//! This module provides high-level operations that coordinate:
//! - SetupOperation: Confirm, install, enable and stage
//!
//! The operations coordinate with:
//! - Git: Clean check and staging (from git module)
//! - Package manager: Bundle installation (from package_manager module)
//! - Config: `ranvier.json` rewriting (from config module)
//! - UI: Prompt and progress reporting

pub mod setup;
