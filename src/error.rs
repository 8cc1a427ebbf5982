use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("project root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("source directory missing: {0}")]
    SrcDirMissing(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan directory {path}: {message}")]
    DirScan { path: PathBuf, message: String },

    #[error("file is not valid UTF-8 text: {0}")]
    InvalidContentType(PathBuf),
}

impl CleanupError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CleanupError::RootNotFound(_) => "INVALID_PROJECT_PATH",
            CleanupError::RootNotADirectory(_) => "NOT_A_DIRECTORY",
            CleanupError::SrcDirMissing(_) => "SRC_DIR_MISSING",
            CleanupError::PermissionDenied(_) => "PERMISSION_DENIED",
            CleanupError::FileRead { .. } => "FILE_READ_ERROR",
            CleanupError::FileWrite { .. } => "FILE_WRITE_ERROR",
            CleanupError::DirScan { .. } => "DIR_SCAN_ERROR",
            CleanupError::InvalidContentType(_) => "INVALID_CONTENT_TYPE",
        }
    }

    /// Convert into the structured record carried in run statistics.
    pub fn record(&self) -> ErrorRecord {
        let details = match self {
            CleanupError::RootNotFound(path)
            | CleanupError::RootNotADirectory(path)
            | CleanupError::SrcDirMissing(path)
            | CleanupError::PermissionDenied(path)
            | CleanupError::InvalidContentType(path) => {
                json!({ "path": path.display().to_string() })
            }
            CleanupError::FileRead { path, source } | CleanupError::FileWrite { path, source } => {
                json!({
                    "path": path.display().to_string(),
                    "os": source.to_string(),
                })
            }
            CleanupError::DirScan { path, message } => {
                json!({
                    "path": path.display().to_string(),
                    "os": message,
                })
            }
        };

        ErrorRecord {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// One non-fatal error or warning accumulated during a run.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
}

/// Map an I/O error from reading `path` to the matching cleanup error.
///
/// Non-UTF-8 content surfaces from `read_to_string` as `InvalidData` and is
/// reported as an invalid content type, not a generic read failure.
pub fn read_error(path: &Path, err: std::io::Error) -> CleanupError {
    match err.kind() {
        std::io::ErrorKind::InvalidData => CleanupError::InvalidContentType(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CleanupError::PermissionDenied(path.to_path_buf()),
        _ => CleanupError::FileRead {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

pub fn write_error(path: &Path, err: std::io::Error) -> CleanupError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => CleanupError::PermissionDenied(path.to_path_buf()),
        _ => CleanupError::FileWrite {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

pub type Result<T> = std::result::Result<T, CleanupError>;
