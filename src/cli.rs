//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::package_manager::DEFAULT_PACKAGE_MANAGER;

/// init-bundles - install the example bundles of a Ranvier game server
///
/// Adds every example bundle as a git submodule, enables them in ranvier.json
/// and stages the configuration change.
#[derive(Parser, Debug)]
#[command(
    name = "init-bundles",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the example bundles of a Ranvier game server",
    long_about = "Installs the example bundles as git submodules through the package manager's \
                  install-bundle script, enables them in ranvier.json and stages the change. \
                  Must be run on a repository without uncommitted changes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  init-bundles                            \x1b[90m# Ask, then install\x1b[0m\n   \
                  init-bundles --yes                      \x1b[90m# Install without asking\x1b[0m\n   \
                  init-bundles --package-manager pnpm     \x1b[90m# Use another package manager\x1b[0m\n"
)]
pub struct Cli {
    /// Directory inside the game server repository (defaults to current directory)
    #[arg(long, short = 'w', env = "INIT_BUNDLES_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Package manager used to run the install-bundle script
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "INIT_BUNDLES_PACKAGE_MANAGER",
        default_value = DEFAULT_PACKAGE_MANAGER
    )]
    pub package_manager: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
