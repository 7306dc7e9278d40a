use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::error::TouchError;

/// Outcome of [`create_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
    New,
    AlreadyExists,
}

/// Exclusively create `path` as an empty file with mode `0644` (umask applies).
///
/// An existing file is left untouched and reported as
/// [`Created::AlreadyExists`]; re-running on the same path is a success.
/// The handle is closed before returning and nothing is ever written.
///
/// # Errors
/// [`TouchError::CreateFile`] for any failure other than "already exists".
pub fn create_file(path: &Path) -> Result<Created, TouchError> {
    let res = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o644)
        .open(path);

    match res {
        Ok(_file) => Ok(Created::New),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(Created::AlreadyExists),
        Err(source) => Err(TouchError::CreateFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
