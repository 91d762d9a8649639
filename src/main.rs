//! archon-install - installs the archon executable
//!
//! Copies `archon` and `Archon.pdb` from the current directory into
//! `~/.local/bin` and makes `archon` executable by its owner.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod installer;
mod paths;

use cli::{Cli, Commands};
use commands::install::InstallOptions;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        None => commands::install::run(&InstallOptions {
            source: cli.source.as_deref(),
            dest: cli.dest.as_deref(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        Some(Commands::Version) => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
