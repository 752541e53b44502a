use std::fs;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{ConfigChange, ConfigError, ConfigStore, Subscribers};
use crate::state::{CONFIG_GROUP, OptionKey};

/// Written when the settings file is missing or empty.
const SETTINGS_SKELETON: &str = "\
# Quest list settings.
#
# Lines are `group.key = value`. Booleans accept true/false, yes/no, on/off, 1/0.
# Remove a line to fall back to its default.
";

/// Value part of a settings line with any trailing `#` or `//` note cut off.
fn strip_inline_comment(s: &str) -> &str {
    let end = [s.find("//"), s.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(s.len());
    s[..end].trim()
}

/// What: Split a settings line into `(group, key, value)`.
///
/// Inputs:
/// - `line`: One raw line.
///
/// Output:
/// - `None` for blanks, comments and lines without `group.key = value` shape.
fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (lhs, rhs) = trimmed.split_once('=')?;
    let (group, key) = lhs.trim().split_once('.')?;
    Some((group.trim(), key.trim(), strip_inline_comment(rhs)))
}

/// Settings-file backed config store.
///
/// The file is re-read on every access so edits made by hand are picked up;
/// writes rewrite it in place preserving comments and unrelated lines.
#[derive(Debug)]
pub struct FileConfigStore {
    /// Backing `settings.conf`.
    path: PathBuf,
    /// Change listeners.
    subscribers: Subscribers,
}

impl FileConfigStore {
    /// Store backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            subscribers: Subscribers::default(),
        }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file lines, or the skeleton when the file is missing or empty.
    fn read_lines(&self) -> Result<Vec<String>, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if !content.trim().is_empty() => {
                Ok(content.lines().map(ToString::to_string).collect())
            }
            Ok(_) => Ok(SETTINGS_SKELETON.lines().map(ToString::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(SETTINGS_SKELETON.lines().map(ToString::to_string).collect())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write `lines` back, creating the parent directory if needed.
    fn write_lines(&self, lines: &[String]) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// What: Check that every known option line holds a boolean.
    ///
    /// Output:
    /// - `Ok(())`, or the first line holding a non-boolean `questtab` value.
    ///
    /// # Errors
    /// - `ConfigError::Io` when the file exists but cannot be read.
    /// - `ConfigError::Parse` naming the offending line.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (idx, line) in self.read_lines()?.iter().enumerate() {
            let Some((group, key, value)) = parse_line(line) else {
                continue;
            };
            if group != CONFIG_GROUP || OptionKey::from_config_key(key).is_none() {
                continue;
            }
            let lv = value.to_ascii_lowercase();
            if !matches!(
                lv.as_str(),
                "true" | "false" | "1" | "0" | "yes" | "no" | "on" | "off"
            ) {
                return Err(ConfigError::Parse {
                    line: idx + 1,
                    message: format!("{group}.{key} expects a boolean, got \"{value}\""),
                });
            }
        }
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        let lines = match self.read_lines() {
            Ok(lines) => lines,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "[Config] settings unreadable");
                return None;
            }
        };
        // Last occurrence wins, as with repeated keys in hand-edited files.
        lines
            .iter()
            .filter_map(|l| parse_line(l))
            .filter(|(g, k, _)| *g == group && *k == key)
            .map(|(_, _, v)| v.to_string())
            .last()
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut lines = self.read_lines()?;
        let mut replaced = false;
        for line in &mut lines {
            if let Some((g, k, _)) = parse_line(line)
                && g == group
                && k == key
            {
                *line = format!("{group}.{key} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{group}.{key} = {value}"));
        }
        self.write_lines(&lines)?;
        debug!(path = %self.path.display(), group, key, value, "[Config] Saved setting");
        self.subscribers.notify(&ConfigChange {
            group: group.to_string(),
            key: Some(key.to_string()),
        });
        Ok(())
    }

    fn reset(&mut self, group: &str) -> Result<(), ConfigError> {
        let lines: Vec<String> = self
            .read_lines()?
            .into_iter()
            .filter(|l| parse_line(l).is_none_or(|(g, _, _)| g != group))
            .collect();
        self.write_lines(&lines)?;
        debug!(path = %self.path.display(), group, "[Config] Reset group to defaults");
        self.subscribers.notify(&ConfigChange {
            group: group.to_string(),
            key: None,
        });
        Ok(())
    }

    fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ConfigChange> {
        self.subscribers.subscribe()
    }
}
