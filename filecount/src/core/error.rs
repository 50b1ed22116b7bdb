// src/core/error.rs
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raised when the contents of a directory in the walked tree cannot be listed.
///
/// Every variant carries the path that failed so the diagnostic can name it.
#[derive(Debug, Error)]
pub enum FilesystemAccessError {
    /// The path does not exist, or was removed while the walk was running.
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The directory exists but cannot be read.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The path names something other than a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// A symbolic link leads back to one of its own ancestors.
    #[error(
        "Symbolic link loop: {} points back to {}",
        .path.display(),
        .ancestor.display()
    )]
    SymlinkLoop { path: PathBuf, ancestor: PathBuf },

    /// Any other I/O failure while listing a directory.
    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilesystemAccessError {
    /// Classifies an I/O error raised for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::SymlinkLoop { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

impl From<walkdir::Error> for FilesystemAccessError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();

        if let Some(ancestor) = err.loop_ancestor() {
            return Self::SymlinkLoop {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }

        match err.into_io_error() {
            Some(source) => Self::io(path, source),
            None => Self::Io {
                path,
                source: io::Error::other("directory traversal failed"),
            },
        }
    }
}
