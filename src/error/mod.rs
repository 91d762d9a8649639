//! Error types and handling for archon-install
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: copy and permission errors
//! - [`paths`]: directory resolution errors

pub mod fs;
pub mod paths;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for install operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // File system errors
    #[error("Source file not found: {path}: {source}")]
    #[diagnostic(
        code(archon_install::fs::source_not_found),
        help("Run the installer from the directory that contains archon and Archon.pdb")
    )]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read source file: {path}: {source}")]
    #[diagnostic(code(archon_install::fs::source_unreadable))]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write to destination: {path}: {source}")]
    #[diagnostic(
        code(archon_install::fs::destination_unavailable),
        help("The destination directory must already exist and be writable")
    )]
    DestinationUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot change permissions, file not found: {path}: {source}")]
    #[diagnostic(code(archon_install::fs::permission_target_missing))]
    PermissionTargetMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to change permissions: {path}: {source}")]
    #[diagnostic(code(archon_install::fs::permission_change_failed))]
    PermissionChangeFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Source and destination are the same file: {path}")]
    #[diagnostic(
        code(archon_install::fs::same_file),
        help("Install into a directory other than the one the files are copied from")
    )]
    SameFile { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(archon_install::fs::io_error))]
    IoError { message: String },

    // Path resolution errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(archon_install::paths::home_not_found),
        help("Set HOME or pass --dest explicitly")
    )]
    HomeDirNotFound,

    #[error("Could not read current directory: {source}")]
    #[diagnostic(code(archon_install::paths::cwd_unavailable))]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(archon_install::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
