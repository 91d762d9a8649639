//! Installation of the archon executable and its debug symbols
//!
//! This module handles:
//! - The fixed list of artifacts to install
//! - Building the ordered install plan (copy, copy, chmod)
//! - Executing the plan, reporting progress before each step
//!
//! There is no rollback: the first failing step aborts the rest and leaves
//! earlier copies in place.

pub mod file_ops;
pub mod reporter;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths::InstallPaths;

pub use reporter::{ConsoleReporter, Reporter};

/// A pre-built file shipped alongside the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    /// File name in both the source and destination directory
    pub file_name: &'static str,
    /// Short name used in progress output
    pub label: &'static str,
    /// Whether the installed copy gets owner execute permission
    pub executable: bool,
}

/// The executable
pub const EXECUTABLE: Artifact = Artifact {
    file_name: "archon",
    label: "executable",
    executable: true,
};

/// Its debug-symbol companion
pub const SYMBOLS: Artifact = Artifact {
    file_name: "Archon.pdb",
    label: "pdb",
    executable: false,
};

/// Artifacts in copy order
pub const ARTIFACTS: [Artifact; 2] = [EXECUTABLE, SYMBOLS];

/// A single install step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Copy {
        artifact: Artifact,
        from: PathBuf,
        to: PathBuf,
    },
    MakeExecutable {
        artifact: Artifact,
        path: PathBuf,
    },
}

impl Step {
    /// Human-readable progress line printed before the step runs
    pub fn describe(&self, dest_display: &str) -> String {
        match self {
            Step::Copy { artifact, .. } => {
                format!("Copying {} into {}", artifact.label, dest_display)
            }
            Step::MakeExecutable { artifact, .. } => {
                format!("Enabling {} to be run", artifact.file_name)
            }
        }
    }

    /// Source and target of the step, for verbose output
    pub fn detail(&self) -> String {
        match self {
            Step::Copy { from, to, .. } => format!("{} -> {}", from.display(), to.display()),
            Step::MakeExecutable { path, .. } => {
                format!("{} (mode {:o})", path.display(), file_ops::EXECUTABLE_MODE)
            }
        }
    }
}

/// Ordered steps of an install
pub type InstallPlan = Vec<Step>;

/// What a completed install produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    /// Destination paths written, in copy order
    pub installed: Vec<PathBuf>,
    /// Total bytes copied
    pub bytes_copied: u64,
}

/// Installs [`ARTIFACTS`] from a source directory into a destination directory
pub struct Installer {
    paths: InstallPaths,
    dry_run: bool,
}

impl Installer {
    pub fn new(paths: InstallPaths) -> Self {
        Self {
            paths,
            dry_run: false,
        }
    }

    /// Print the steps instead of running them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build the ordered steps. Performs no I/O.
    pub fn plan(&self) -> InstallPlan {
        let mut steps: InstallPlan = ARTIFACTS
            .iter()
            .map(|artifact| Step::Copy {
                artifact: *artifact,
                from: self.paths.source_dir.join(artifact.file_name),
                to: self.paths.dest_dir.join(artifact.file_name),
            })
            .collect();

        steps.extend(
            ARTIFACTS
                .iter()
                .filter(|artifact| artifact.executable)
                .map(|artifact| Step::MakeExecutable {
                    artifact: *artifact,
                    path: self.paths.dest_dir.join(artifact.file_name),
                }),
        );

        steps
    }

    /// Execute the plan in order, stopping at the first failure
    pub fn run(&self, reporter: &dyn Reporter) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();

        for step in self.plan() {
            reporter.step(&step, self.dry_run);
            if self.dry_run {
                continue;
            }

            match &step {
                Step::Copy { from, to, .. } => {
                    summary.bytes_copied += file_ops::copy_file(from, to)?;
                    summary.installed.push(to.clone());
                }
                Step::MakeExecutable { path, .. } => file_ops::make_executable(path)?,
            }
        }

        Ok(summary)
    }

    pub fn dest_dir(&self) -> &Path {
        &self.paths.dest_dir
    }
}
