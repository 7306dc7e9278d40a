use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::TouchError;
use crate::locate::Match;

/// Settings loaded from `config.toml`.
///
/// Every key is optional; a missing file means all defaults.
///
/// Example TOML:
/// ```toml
/// tool = "git"
/// inherit_env = true
/// require_executable = true
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Executable name looked up in `PATH`.
    pub tool: String,
    /// Hand the caller's environment to the tool instead of an empty one.
    pub inherit_env: bool,
    /// Only accept regular files with an execute bit during lookup.
    pub require_executable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tool: "git".to_string(),
            inherit_env: false,
            require_executable: false,
        }
    }
}

impl Config {
    pub fn match_mode(&self) -> Match {
        if self.require_executable {
            Match::Executable
        } else {
            Match::Name
        }
    }
}

/// Load `path`, falling back to [`Config::default`] when it does not exist.
///
/// # Errors
/// [`TouchError::Config`] if the file exists but cannot be read or parsed,
/// or names a tool that is empty or contains a `/`.
pub fn load_config(path: &Path) -> Result<Config, TouchError> {
    let txt = match fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(TouchError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    let cfg: Config = toml::from_str(&txt).map_err(|e| TouchError::Config {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    if cfg.tool.is_empty() || cfg.tool.contains('/') {
        return Err(TouchError::Config {
            path: path.to_path_buf(),
            reason: format!("tool must be a bare executable name, got {:?}", cfg.tool),
        });
    }
    Ok(cfg)
}
