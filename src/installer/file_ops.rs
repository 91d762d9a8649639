//! Basic file operations for installation
//!
//! This module handles low-level file operations:
//! - Byte copy of a single file, overwriting the destination (copy_file)
//! - Restricting a file to owner read/write/execute (make_executable)

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::error::{Result, fs as fs_errors};

/// Owner read, write and execute; no group or other bits
pub const EXECUTABLE_MODE: u32 = 0o700;

/// Whether `to` names the file already opened as `source`.
///
/// Device and inode are compared, so hard links and symlinks both count.
#[cfg(unix)]
fn same_file(source: &File, to: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (source.metadata(), fs::metadata(to)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(from: &Path, to: &Path) -> bool {
    match (fs::canonicalize(from), fs::canonicalize(to)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy the contents of `from` into `to`, replacing any existing file.
///
/// Only bytes are copied. A newly created destination gets the default mode,
/// an existing one keeps its mode. Returns the number of bytes written.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let mut reader = File::open(from).map_err(|e| match e.kind() {
        ErrorKind::NotFound => fs_errors::source_not_found(from.display().to_string(), e),
        _ => fs_errors::source_unreadable(from.display().to_string(), e),
    })?;

    let metadata = reader
        .metadata()
        .map_err(|e| fs_errors::source_unreadable(from.display().to_string(), e))?;
    if metadata.is_dir() {
        return Err(fs_errors::source_unreadable(
            from.display().to_string(),
            io::Error::new(ErrorKind::IsADirectory, "is a directory"),
        ));
    }

    // Truncating the destination would destroy the source
    #[cfg(unix)]
    let same = same_file(&reader, to);
    #[cfg(not(unix))]
    let same = same_file(from, to);
    if same {
        return Err(fs_errors::same_file(to.display().to_string()));
    }

    let mut writer = File::create(to)
        .map_err(|e| fs_errors::destination_unavailable(to.display().to_string(), e))?;

    let written = io::copy(&mut reader, &mut writer)?;
    writer.sync_all()?;
    Ok(written)
}

/// Set the permission bits of `path` to [`EXECUTABLE_MODE`].
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| permission_error(path, e))
}

/// Non-Unix platforms carry no mode bits; only check the target exists.
#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> Result<()> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|e| permission_error(path, e))
}

fn permission_error(path: &Path, e: io::Error) -> crate::error::InstallError {
    match e.kind() {
        ErrorKind::NotFound => fs_errors::permission_target_missing(path.display().to_string(), e),
        _ => fs_errors::permission_change_failed(path.display().to_string(), e),
    }
}
