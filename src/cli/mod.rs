//! CLI definitions using clap derive API
//!
//! Running with no arguments installs. Everything here is optional.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;

pub use completions::CompletionsArgs;

/// archon-install - installs archon into ~/.local/bin
///
/// Run from the directory containing `archon` and `Archon.pdb`.
#[derive(Parser, Debug)]
#[command(
    name = "archon-install",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install archon and its debug symbols into ~/.local/bin",
    long_about = "Copies archon and Archon.pdb from the current directory into ~/.local/bin \
                  and makes archon executable by its owner. The destination directory must \
                  already exist.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  archon-install                        \x1b[90m# Install from the current directory\x1b[0m\n   \
                  archon-install --dry-run              \x1b[90m# Show what would be done\x1b[0m\n   \
                  archon-install --dest /opt/archon/bin \x1b[90m# Install elsewhere\x1b[0m\n"
)]
pub struct Cli {
    /// Directory containing archon and Archon.pdb (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Install directory (defaults to ~/.local/bin; must already exist)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Show what would be installed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
