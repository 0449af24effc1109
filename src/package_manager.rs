//! Package manager invocation
//!
//! Bundles are materialized by the server's own `install-bundle` script, run
//! through the package manager: `npm run install-bundle <reference>`. That
//! script adds the bundle repository as a git submodule under `bundles/`.
//!
//! The script's stderr goes straight to the terminal, so clone progress and
//! warnings stay visible. Its stdout is only shown in verbose mode.

use std::process::{Command, Stdio};

use crate::bundles::BundleRef;
use crate::error::{self, Result};
use crate::workspace::WorkingContext;

/// Default package manager executable
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Name of the package script that installs a single bundle
const INSTALL_BUNDLE_SCRIPT: &str = "install-bundle";

/// Installs a single bundle into the repository
pub trait BundleInstaller {
    /// Install `bundle`, blocking until done
    fn install(&self, ctx: &WorkingContext, bundle: &BundleRef) -> Result<()>;
}

/// Runs the `install-bundle` script with an npm-compatible CLI
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
    verbose: bool,
}

impl PackageManager {
    pub fn new(program: impl Into<String>, verbose: bool) -> Self {
        Self {
            program: program.into(),
            verbose,
        }
    }

    /// Arguments passed to the package manager for one bundle
    fn install_args(bundle: &BundleRef) -> [&str; 3] {
        ["run", INSTALL_BUNDLE_SCRIPT, bundle.as_str()]
    }
}

impl BundleInstaller for PackageManager {
    fn install(&self, ctx: &WorkingContext, bundle: &BundleRef) -> Result<()> {
        let output = Command::new(&self.program)
            .args(Self::install_args(bundle))
            .current_dir(&ctx.root)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| error::install::spawn_failed(&self.program, e.to_string()))?;

        if self.verbose {
            let stdout = String::from_utf8_lossy(&output.stdout);
            for line in stdout.lines() {
                println!("    {line}");
            }
        }

        if !output.status.success() {
            return Err(error::install::bundle_failed(
                bundle.as_str(),
                output.status.to_string(),
            ));
        }

        Ok(())
    }
}
