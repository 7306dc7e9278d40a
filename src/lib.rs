//! Crate entry point for **git-touch**.
//!
//! One invocation runs four steps in order, stopping at the first failure:
//! 1. create the missing parent directories of the target ([`parents`])
//! 2. create the target file unless it already exists ([`create`])
//! 3. locate the version-control tool in `PATH` ([`locate`])
//! 4. replace this process with `<tool> add <file>` ([`exec`])
//!
//! Directories created before a later failure are left in place.

mod config;
mod create;
mod error;
mod exec;
mod locate;
mod parents;
mod paths;
mod report;

pub use config::{Config, load_config};
pub use create::{Created, create_file};
pub use error::TouchError;
pub use exec::{add_command, exec_add};
pub use locate::{Match, PATH_MAX, SearchPath, find_tool};
pub use parents::ensure_parents;
pub use paths::config_path;
pub use report::Reporter;

use std::path::{Path, PathBuf};

/// Per-invocation switches coming from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub file: PathBuf,
    pub inherit_env: bool,
    pub require_executable: bool,
    pub verbose: bool,
}

/// CLI flags only ever tighten or widen what the config file says; they
/// never turn a setting off.
pub fn merge(mut cfg: Config, opts: &Options) -> Config {
    cfg.inherit_env |= opts.inherit_env;
    cfg.require_executable |= opts.require_executable;
    cfg
}

/// Run the filesystem steps and the tool lookup, without exec.
///
/// # Returns
/// The resolved tool path.
pub fn prepare(
    file: &Path,
    cfg: &Config,
    search: &SearchPath,
    out: &Reporter,
) -> Result<PathBuf, TouchError> {
    for dir in ensure_parents(file)? {
        out.detail(format!("created directory {}", dir.display()));
    }

    match create_file(file)? {
        Created::New => out.detail(format!("created {}", file.display())),
        Created::AlreadyExists => out.note("file exists, ignoring request to create"),
    }

    let tool = find_tool(&cfg.tool, search, cfg.match_mode())?;
    out.detail(format!("using {}", tool.display()));
    Ok(tool)
}

/// CLI command: create `opts.file` and hand it to `<tool> add`.
///
/// Only returns on failure; on success the process image is replaced.
pub fn cmd_touch(opts: &Options) -> Result<(), TouchError> {
    let out = Reporter::new(opts.verbose);
    let cfg_path = config_path();
    let cfg = merge(load_config(&cfg_path)?, opts);

    let search = SearchPath::from_env();
    let tool = prepare(&opts.file, &cfg, &search, &out)?;

    Err(exec_add(&tool, &opts.file, cfg.inherit_env))
}
