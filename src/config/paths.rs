use std::env;
use std::path::{Path, PathBuf};

/// Base directory named by `var`, or `$HOME` joined with `home_default`.
///
/// A blank variable counts as unset; without `$HOME` the fallback is relative
/// to the working directory.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
            home_default.iter().fold(home, |acc, seg| acc.join(seg))
        }
    }
}

/// Config directory: `$XDG_CONFIG_HOME/questlist`, else `$HOME/.config/questlist`.
///
/// Not created here; writers create it on demand.
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("questlist")
}

/// Logs directory under config (ensured to exist when possible).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default settings file, or `explicit` when given.
#[must_use]
pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| config_dir().join("settings.conf"), Path::to_path_buf)
}
