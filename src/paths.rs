//! Install path resolution
//!
//! Resolves the three directories an install touches: the source directory
//! (where the pre-built files are), the user's home directory and the
//! destination directory under it.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result, paths as path_errors};

/// Destination directory relative to the user's home
pub const LOCAL_BIN_DIR: &str = ".local/bin";

/// Resolved source and destination directories for a single install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
}

impl InstallPaths {
    /// Resolve both directories, honouring optional overrides
    pub fn resolve(source: Option<&Path>, dest: Option<&Path>) -> Result<Self> {
        Ok(Self {
            source_dir: source_dir(source)?,
            dest_dir: dest_dir(dest)?,
        })
    }
}

/// Directory the pre-built files are copied from.
///
/// Defaults to the current working directory at invocation time.
pub fn source_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(path_errors::cwd_unavailable),
    }
}

/// The invoking user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(InstallError::HomeDirNotFound)
}

/// `~/.local/bin`
pub fn default_dest_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(LOCAL_BIN_DIR))
}

/// Directory the files are installed into.
///
/// The directory is never created here; a missing directory surfaces as an
/// error at the first copy.
pub fn dest_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_dest_dir(),
    }
}

/// Render a path for progress output, abbreviating the home prefix to `~`.
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home {
        if let Ok(rest) = path.strip_prefix(home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rest.to_string_lossy().replace('\\', "/"));
        }
    }
    path.display().to_string()
}
