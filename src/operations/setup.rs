//! Setup operation
//!
//! Confirms with the operator, installs every bundle in order, enables the
//! installed bundles in `ranvier.json` and stages that file. The steps run
//! strictly in sequence and nothing is retried: the first failure ends the
//! run and whatever was already installed stays on disk.

use std::path::Path;

use crate::bundles::BundleRef;
use crate::config::{CONFIG_FILE_NAME, ServerConfig};
use crate::error::{InitError, Result};
use crate::git::VersionControl;
use crate::package_manager::BundleInstaller;
use crate::progress::ProgressDisplay;
use crate::prompt::Confirmation;
use crate::workspace::WorkingContext;

/// Question asked before anything is touched
pub const CONFIRM_PROMPT: &str = "Do you want to install the example bundles? [Y/n]";

/// Configuration options for setup
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Bundles to install, in order
    pub bundles: Vec<BundleRef>,

    /// Print each bundle as it is installed instead of drawing a progress bar
    pub verbose: bool,
}

/// How a setup run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The operator answered `n`; nothing was changed
    Declined,
    Installed(SetupReport),
}

/// What a completed setup did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Bundles whose install script succeeded, in install order
    pub installed: Vec<BundleRef>,

    /// Short names written to `bundles` in `ranvier.json`
    pub enabled: Vec<String>,
}

/// High-level setup operation
pub struct SetupOperation<'a, V, B> {
    ctx: &'a WorkingContext,
    vcs: &'a V,
    installer: &'a B,
    options: SetupOptions,
}

impl<'a, V: VersionControl, B: BundleInstaller> SetupOperation<'a, V, B> {
    pub fn new(
        ctx: &'a WorkingContext,
        vcs: &'a V,
        installer: &'a B,
        options: SetupOptions,
    ) -> Self {
        Self {
            ctx,
            vcs,
            installer,
            options,
        }
    }

    /// Run the setup
    pub fn execute(&self, prompt: &mut impl Confirmation) -> Result<SetupOutcome> {
        if !prompt.confirm(CONFIRM_PROMPT) {
            return Ok(SetupOutcome::Declined);
        }

        if !self.ctx.clean {
            return Err(InitError::DirtyWorkingTree);
        }

        let installed = self.install_bundles()?;
        println!("Done.");

        println!("Enabling bundles...");
        let enabled = self.enable_bundles(&installed)?;
        println!("Done.");

        self.vcs.stage(Path::new(CONFIG_FILE_NAME))?;

        Ok(SetupOutcome::Installed(SetupReport { installed, enabled }))
    }

    /// Install each bundle, stopping at the first failure
    fn install_bundles(&self) -> Result<Vec<BundleRef>> {
        let total = self.options.bundles.len();
        let progress = if self.options.verbose {
            ProgressDisplay::hidden()
        } else {
            ProgressDisplay::new(total as u64)
        };

        let mut installed = Vec::with_capacity(total);
        for (i, bundle) in self.options.bundles.iter().enumerate() {
            progress.update_bundle(bundle.short_name(), i + 1, total);
            if self.options.verbose {
                println!("Installing {bundle}");
            }

            if let Err(e) = self.installer.install(self.ctx, bundle) {
                progress.abandon();
                return Err(e);
            }

            progress.inc_bundle();
            installed.push(bundle.clone());
        }
        progress.finish();

        Ok(installed)
    }

    /// Overwrite the enabled bundle list with the installed bundles
    fn enable_bundles(&self, installed: &[BundleRef]) -> Result<Vec<String>> {
        let path = self.ctx.config_path();
        let mut config = ServerConfig::load(&path)?;
        config.set_bundles(installed.iter().map(BundleRef::short_name));
        config.save(&path)?;
        Ok(config.bundles)
    }
}
