//! File system errors

use super::InstallError;

/// Creates a source not found error
pub fn source_not_found(path: impl Into<String>, source: std::io::Error) -> InstallError {
    InstallError::SourceNotFound {
        path: path.into(),
        source,
    }
}

/// Creates a source unreadable error
pub fn source_unreadable(path: impl Into<String>, source: std::io::Error) -> InstallError {
    InstallError::SourceUnreadable {
        path: path.into(),
        source,
    }
}

/// Creates a destination unavailable error
pub fn destination_unavailable(path: impl Into<String>, source: std::io::Error) -> InstallError {
    InstallError::DestinationUnavailable {
        path: path.into(),
        source,
    }
}

/// Creates a permission target missing error
pub fn permission_target_missing(path: impl Into<String>, source: std::io::Error) -> InstallError {
    InstallError::PermissionTargetMissing {
        path: path.into(),
        source,
    }
}

/// Creates a permission change failed error
pub fn permission_change_failed(path: impl Into<String>, source: std::io::Error) -> InstallError {
    InstallError::PermissionChangeFailed {
        path: path.into(),
        source,
    }
}

/// Creates a same file error
pub fn same_file(path: impl Into<String>) -> InstallError {
    InstallError::SameFile { path: path.into() }
}
