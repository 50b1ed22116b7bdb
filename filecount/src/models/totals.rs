// src/models/totals.rs
use crate::models::DirectoryTally;

/// Running totals for one walk: files and directories below the root.
///
/// The root directory itself is never part of `directories`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub directories: u64,
}

impl Totals {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            directories: 0,
        }
    }

    #[inline]
    pub const fn add_file(&mut self) {
        self.files = self.files.saturating_add(1);
    }

    #[inline]
    pub const fn add_directory(&mut self) {
        self.directories = self.directories.saturating_add(1);
    }

    /// Adds the immediate counts of one directory.
    #[inline]
    pub const fn add_tally(&mut self, tally: &DirectoryTally) {
        self.files = self.files.saturating_add(tally.files);
        self.directories = self.directories.saturating_add(tally.subdirectories);
    }
}
