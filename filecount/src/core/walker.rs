// src/core/walker.rs
use log::{debug, info, trace, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::FilesystemAccessError;
use crate::models::{DirectoryTally, Totals};


/// Counts every file and every subdirectory below `root`.
///
/// Symbolic links to directories are followed and counted as directories.
/// Every other entry, dangling links included, counts as a file. The root
/// itself is not counted.
///
/// # Arguments
///
/// * `root` - The directory to walk
///
/// # Returns
///
/// * `Ok(Totals)` - The file and directory counts for the whole tree
///
/// # Errors
///
/// Returns a [`FilesystemAccessError`] and abandons the walk if:
/// * `root` does not exist or is not a directory
/// * Any directory in the tree cannot be listed
/// * A symbolic link points back to one of its ancestors
pub fn walk(root: &Path) -> Result<Totals, FilesystemAccessError> {
    let mut totals = Totals::new();
    walk_into(root, &mut totals)?;
    Ok(totals)
}

/// Walks `root` and adds its counts onto `totals`.
///
/// On error `totals` holds whatever was counted before the failure and
/// should be discarded.
///
/// # Errors
///
/// Same conditions as [`walk`].
#[inline]
pub fn walk_into(root: &Path, totals: &mut Totals) -> Result<(), FilesystemAccessError> {
    walk_with(root, totals, |_| {})
}

/// Walks `root`, adding onto `totals` and reporting the immediate counts of
/// every visited directory, root included, to `on_directory`.
///
/// A directory is reported once its whole subtree has been walked, so
/// children are reported before their parent.
///
/// # Errors
///
/// Same conditions as [`walk`]. Directories still open when the error hits
/// are not reported.
pub fn walk_with<F>(
    root: &Path,
    totals: &mut Totals,
    mut on_directory: F,
) -> Result<(), FilesystemAccessError>
where
    F: FnMut(&DirectoryTally),
{
    check_root(root)?;
    info!("Walking {}", root.display());

    // open[d] is the directory at depth d on the current path from the root
    let mut open = vec![DirectoryTally::new(root.to_path_buf())];

    for result in WalkDir::new(root).follow_links(true).min_depth(1) {
        let visit = classify(result)?;
        close_directories(&mut open, visit.depth(), &mut on_directory);

        let Some(parent) = open.last_mut() else {
            continue;
        };

        match visit {
            Visit::File { .. } => {
                parent.files = parent.files.saturating_add(1);
                totals.add_file();
            }
            Visit::Directory { path, .. } => {
                parent.subdirectories = parent.subdirectories.saturating_add(1);
                totals.add_directory();
                open.push(DirectoryTally::new(path));
            }
        }
    }

    close_directories(&mut open, 0, &mut on_directory);
    info!(
        "Finished {}: {} files, {} directories",
        root.display(),
        totals.files,
        totals.directories
    );
    Ok(())
}

enum Visit {
    File { depth: usize },
    Directory { depth: usize, path: PathBuf },
}

impl Visit {
    const fn depth(&self) -> usize {
        match self {
            Self::File { depth } | Self::Directory { depth, .. } => *depth,
        }
    }
}

fn check_root(root: &Path) -> Result<(), FilesystemAccessError> {
    let metadata = fs::metadata(root).map_err(|err| FilesystemAccessError::io(root, err))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(FilesystemAccessError::NotADirectory {
            path: root.to_path_buf(),
        })
    }
}

fn classify(result: walkdir::Result<DirEntry>) -> Result<Visit, FilesystemAccessError> {
    match result {
        Ok(entry) => {
            trace!("{}", entry.path().display());
            let depth = entry.depth();
            if entry.file_type().is_dir() {
                Ok(Visit::Directory {
                    depth,
                    path: entry.into_path(),
                })
            } else {
                Ok(Visit::File { depth })
            }
        }
        Err(err) if is_dangling_link(&err) => {
            warn!(
                "Counting dangling link {} as a file",
                err.path().unwrap_or(Path::new("")).display()
            );
            Ok(Visit::File { depth: err.depth() })
        }
        Err(err) => Err(err.into()),
    }
}

/// A link whose target is gone fails to resolve, but it is still an entry
/// of its parent directory.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err.loop_ancestor().is_none()
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && err.path().is_some_and(|path| {
            fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

/// Reports and drops every open directory at `depth` or deeper.
fn close_directories<F>(open: &mut Vec<DirectoryTally>, depth: usize, on_directory: &mut F)
where
    F: FnMut(&DirectoryTally),
{
    while open.len() > depth {
        let Some(tally) = open.pop() else {
            break;
        };
        debug!(
            "{}: {} files, {} subdirectories",
            tally.path.display(),
            tally.files,
            tally.subdirectories
        );
        on_directory(&tally);
    }
}
