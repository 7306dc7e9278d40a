use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::error::TouchError;

/// Upper bound on the resolved tool path, terminating NUL included.
pub const PATH_MAX: usize = libc::PATH_MAX as usize;

/// Ordered list of directories taken from a colon-separated search path.
///
/// Empty segments (`a::b`, leading or trailing `:`) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn parse(raw: &OsStr) -> Self {
        let dirs = raw
            .as_bytes()
            .split(|b| *b == b':')
            .filter(|seg| !seg.is_empty())
            .map(|seg| PathBuf::from(OsStr::from_bytes(seg)))
            .collect();
        SearchPath { dirs }
    }

    /// Read `PATH` once. Unset means an empty search list.
    pub fn from_env() -> Self {
        std::env::var_os("PATH")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

/// How strictly a directory entry has to match before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Match {
    /// Any entry with the right name, whatever its type.
    #[default]
    Name,
    /// A regular file (after following symlinks) with an execute bit set.
    Executable,
}

/// Locate `tool` by scanning `search` directory by directory.
///
/// Each directory is listed and its entries compared by name; the first
/// hit wins and is returned as `<dir>/<tool>`.
///
/// # Errors
/// - [`TouchError::OpenDir`] as soon as any directory cannot be listed.
///   Later directories are not tried.
/// - [`TouchError::PathTooLong`] if the joined path would not fit in [`PATH_MAX`].
/// - [`TouchError::ToolNotFound`] once every directory has been searched.
pub fn find_tool(tool: &str, search: &SearchPath, mode: Match) -> Result<PathBuf, TouchError> {
    for dir in search.dirs() {
        if !dir_has_entry(dir, tool)? {
            continue;
        }

        let len = dir.as_os_str().len() + 1 + tool.len() + 1;
        if len > PATH_MAX {
            return Err(TouchError::PathTooLong { len, max: PATH_MAX });
        }

        let mut joined = OsString::with_capacity(len);
        joined.push(dir.as_os_str());
        joined.push("/");
        joined.push(tool);
        let candidate = PathBuf::from(joined);

        if mode == Match::Executable && !is_executable_file(&candidate) {
            continue;
        }
        return Ok(candidate);
    }

    Err(TouchError::ToolNotFound {
        tool: tool.to_string(),
    })
}

fn dir_has_entry(dir: &Path, name: &str) -> Result<bool, TouchError> {
    let rd = fs::read_dir(dir).map_err(|source| TouchError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(rd.flatten().any(|ent| ent.file_name() == OsStr::new(name)))
}

fn is_executable_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
