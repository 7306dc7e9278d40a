use std::{env, path::PathBuf};

/// Location of the optional `config.toml`.
///
/// Resolution order:
/// 1. `$GIT_TOUCH_CONFIG`
/// 2. `$XDG_CONFIG_HOME/git-touch/config.toml`
/// 3. `$HOME/.config/git-touch/config.toml`
pub fn config_path() -> PathBuf {
    if let Some(p) = env::var_os("GIT_TOUCH_CONFIG").filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env::var_os("HOME").unwrap_or_default()).join(".config"));
    base.join("git-touch").join("config.toml")
}
