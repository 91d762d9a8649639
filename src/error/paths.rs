//! Path resolution errors

use super::InstallError;

/// Creates a current directory unavailable error
pub fn cwd_unavailable(source: std::io::Error) -> InstallError {
    InstallError::CurrentDirUnavailable { source }
}
