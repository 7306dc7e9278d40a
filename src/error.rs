//! Error taxonomy for a single `git-touch` invocation.
//!
//! Every variant is fatal except the pre-existing file, which is not an
//! error at all (see [`crate::create::Created::AlreadyExists`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TouchError {
    /// The parent directory could not be checked for any reason other than "not found".
    #[error("couldn't check existence of parent directory {}: {source}", .path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("couldn't create parent directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("couldn't create file {}: {source}", .path.display())]
    CreateFile { path: PathBuf, source: io::Error },

    /// A search-path directory could not be listed. This aborts the whole search.
    #[error("cannot open directory {}: {source}", .path.display())]
    OpenDir { path: PathBuf, source: io::Error },

    #[error("couldn't find {tool} executable in path")]
    ToolNotFound { tool: String },

    #[error("resolved tool path needs {len} bytes, limit is {max}")]
    PathTooLong { len: usize, max: usize },

    #[error("couldn't execute {}: {source}", .path.display())]
    Exec { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl TouchError {
    /// Process exit status for this error.
    ///
    /// I/O failures surface their raw OS error code so callers see the same
    /// errno the failing system call reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            TouchError::Stat { source, .. }
            | TouchError::CreateDir { source, .. }
            | TouchError::CreateFile { source, .. }
            | TouchError::OpenDir { source, .. }
            | TouchError::Exec { source, .. } => os_code(source),
            TouchError::ToolNotFound { .. } => libc::ENOENT,
            TouchError::PathTooLong { .. } => libc::ERANGE,
            TouchError::Config { .. } => 1,
        }
    }
}

fn os_code(err: &io::Error) -> i32 {
    match err.raw_os_error() {
        Some(code) if code != 0 => code,
        _ => 1,
    }
}
