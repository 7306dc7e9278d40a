use std::fs::{self, DirBuilder};
use std::io::ErrorKind;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

use crate::error::TouchError;

/// Create every missing ancestor directory of `path`.
///
/// Walks upward from the immediate parent until an existing directory is
/// found, then creates the missing ones root-to-leaf with mode `0777`
/// (the process umask applies).
///
/// # Returns
/// The directories that were created, in creation order. Empty when the
/// parent already exists or `path` has no directory component.
///
/// # Errors
/// - [`TouchError::Stat`] if an existence check fails for any reason other
///   than "not found". Nothing is created in that case.
/// - [`TouchError::CreateDir`] if a `mkdir` fails. Directories created
///   before the failure are left in place.
pub fn ensure_parents(path: &Path) -> Result<Vec<PathBuf>, TouchError> {
    let missing = missing_ancestors(path)?;

    let mut builder = DirBuilder::new();
    builder.mode(0o777);

    let mut created = Vec::with_capacity(missing.len());
    for dir in missing.into_iter().rev() {
        builder.create(&dir).map_err(|source| TouchError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        created.push(dir);
    }
    Ok(created)
}

/// Ancestors of `path` that do not exist yet, nearest first.
fn missing_ancestors(path: &Path) -> Result<Vec<PathBuf>, TouchError> {
    let mut missing = Vec::new();
    let mut cur = path.parent();

    while let Some(dir) = cur {
        // "" is the current directory, which always exists.
        if dir.as_os_str().is_empty() {
            break;
        }
        match fs::metadata(dir) {
            Ok(_) => break,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                missing.push(dir.to_path_buf());
                cur = dir.parent();
            }
            Err(source) => {
                return Err(TouchError::Stat {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        }
    }
    Ok(missing)
}
