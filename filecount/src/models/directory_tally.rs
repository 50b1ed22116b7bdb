// src/models/directory_tally.rs
use std::path::PathBuf;

/// Immediate counts for a single directory, not including anything deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTally {
    pub path: PathBuf,
    pub files: u64,
    pub subdirectories: u64,
}

impl DirectoryTally {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            files: 0,
            subdirectories: 0,
        }
    }
}
