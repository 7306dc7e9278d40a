use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;

use crate::error::TouchError;

/// Build the `<tool> add <file>` command.
///
/// argv[0] is the resolved tool path. Unless `inherit_env` is set the
/// tool starts with an empty environment.
pub fn add_command(tool: &Path, file: &Path, inherit_env: bool) -> Command {
    let mut cmd = Command::new(tool);
    cmd.arg("add").arg(file);
    if !inherit_env {
        cmd.env_clear();
    }
    cmd
}

/// Replace the current process with `<tool> add <file>`.
///
/// Only returns if the exec itself failed.
pub fn exec_add(tool: &Path, file: &Path, inherit_env: bool) -> TouchError {
    let source = add_command(tool, file, inherit_env).exec();
    TouchError::Exec {
        path: tool.to_path_buf(),
        source,
    }
}
