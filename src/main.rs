//! init-bundles - example bundle setup for a Ranvier game server
//!
//! Run once inside a fresh checkout of the server repository: it installs the
//! example bundles as git submodules, enables them in `ranvier.json` and stages
//! the configuration change for the operator to commit.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod bundles;
mod cli;
mod commands;
mod config;
mod error;
mod git;
mod operations;
mod package_manager;
mod progress;
mod prompt;
mod workspace;

use cli::Cli;
use error::InitError;

fn report(err: &InitError) {
    eprintln!("{} {}", Style::new().for_stderr().red().bold().apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", Style::new().for_stderr().yellow().apply_to("help:"), help);
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::setup::run(cli) {
        report(&e);
        std::process::exit(1);
    }

    std::process::exit(0);
}
