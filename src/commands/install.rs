//! Install command implementation
//!
//! The installation process:
//! 1. Resolve source directory (cwd) and destination (`~/.local/bin`)
//! 2. Copy `archon`
//! 3. Copy `Archon.pdb`
//! 4. Restrict `archon` to owner read/write/execute

use std::path::Path;

use console::Style;

use crate::error::Result;
use crate::installer::{ConsoleReporter, Installer};
use crate::paths::{self, InstallPaths};

/// Options for the install command
#[derive(Debug, Default, Clone)]
pub struct InstallOptions<'a> {
    pub source: Option<&'a Path>,
    pub dest: Option<&'a Path>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Run install command
pub fn run(options: &InstallOptions<'_>) -> Result<()> {
    let install_paths = InstallPaths::resolve(options.source, options.dest)?;
    let installer = Installer::new(install_paths).with_dry_run(options.dry_run);

    let home = dirs::home_dir();
    let dest_display = paths::display_path(installer.dest_dir(), home.as_deref());
    let reporter = ConsoleReporter::new(dest_display, options.verbose);

    let summary = installer.run(&reporter)?;

    if options.verbose && !options.dry_run {
        println!(
            "{} {} files, {} bytes",
            Style::new().green().bold().apply_to("Installed"),
            summary.installed.len(),
            summary.bytes_copied
        );
    }

    Ok(())
}
