//! Loading of the JSON snapshots the CLI lays out.

use std::fmt;
use std::path::Path;

use questlist::catalog::PlayerSnapshot;
use questlist::surface::PanelSnapshot;

/// Error raised while reading a snapshot file.
#[derive(Debug)]
pub enum SnapshotError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not a valid snapshot.
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "invalid snapshot: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// What: Read a panel snapshot.
///
/// Inputs:
/// - `path`: JSON file with optional `free`, `members` and `miniquests` sections.
///
/// Output:
/// - Parsed snapshot.
///
/// # Errors
/// - `SnapshotError::Io` or `SnapshotError::Json`.
pub fn load_panel(path: &Path) -> Result<PanelSnapshot, SnapshotError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// What: Read a player snapshot.
///
/// # Errors
/// - `SnapshotError::Io` or `SnapshotError::Json`.
pub fn load_player(path: &Path) -> Result<PlayerSnapshot, SnapshotError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
