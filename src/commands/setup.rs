//! Setup command implementation
//!
//! Wires the real collaborators (git repository, package manager, terminal
//! prompt) into the setup operation and prints the result for the operator.

use console::Style;

use crate::bundles::default_bundles;
use crate::cli::Cli;
use crate::commands::helpers::resolve_start_dir;
use crate::error::Result;
use crate::git::GitRepository;
use crate::operations::setup::{SetupOperation, SetupOptions, SetupOutcome, SetupReport};
use crate::package_manager::PackageManager;
use crate::prompt::{AssumeYes, TerminalPrompt};
use crate::workspace::WorkingContext;

/// Run the setup command
pub fn run(cli: Cli) -> Result<()> {
    let start = resolve_start_dir(cli.workspace)?;
    let repo = GitRepository::discover(&start)?;
    let ctx = WorkingContext::detect(repo.root(), &repo)?;

    if cli.verbose {
        println!("Repository root: {}", ctx.root.display());
    }

    let installer = PackageManager::new(cli.package_manager, cli.verbose);
    let options = SetupOptions {
        bundles: default_bundles(),
        verbose: cli.verbose,
    };
    let operation = SetupOperation::new(&ctx, &repo, &installer, options);

    let outcome = if cli.yes {
        operation.execute(&mut AssumeYes)?
    } else {
        operation.execute(&mut TerminalPrompt)?
    };

    match outcome {
        SetupOutcome::Declined => println!("Done."),
        SetupOutcome::Installed(report) => print_guidance(&report, cli.verbose),
    }

    Ok(())
}

fn print_guidance(report: &SetupReport, verbose: bool) {
    if verbose {
        println!("Enabled bundles: {}", report.enabled.join(", "));
    }

    let rule = "-".repeat(79);
    println!();
    println!("{rule}");
    println!(
        "Example bundles have been installed as submodules. It's recommended that you now\n\
         run the following commands:"
    );
    println!();
    println!(
        "  {}",
        Style::new()
            .bold()
            .cyan()
            .apply_to("git commit -m \"Install bundles\"")
    );
    println!();
    println!(
        "{} See https://gregstadermann.com for guides and API references",
        Style::new().bold().green().apply_to("You're all set!")
    );
}
