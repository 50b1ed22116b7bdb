// src/utils.rs
use crate::models::Totals;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Reads one line and strips its terminator; any other whitespace is part
/// of the path.
///
/// The line is taken as raw bytes, so on unix a directory name that is not
/// valid UTF-8 still comes through intact.
///
/// Returns `Ok(None)` when the input is already exhausted.
///
/// # Errors
///
/// Propagates read failures from `input`. Off unix, a line that is not
/// valid UTF-8 is rejected with [`io::ErrorKind::InvalidData`].
pub fn read_root_path<R: BufRead>(input: &mut R) -> io::Result<Option<PathBuf>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    path_from_bytes(line).map(Some)
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> io::Result<PathBuf> {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt as _;

    Ok(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> io::Result<PathBuf> {
    String::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

#[must_use]
pub fn format_summary(root: &Path, totals: &Totals) -> String {
    format!(
        "{} {} fichiers et {} dossiers.",
        root.display(),
        totals.files,
        totals.directories
    )
}
