//! Config store abstraction and implementations.
//!
//! Options live in an external store keyed by `(group, key)`. Every write
//! is broadcast to subscribers so the runtime can schedule a reflow.

use std::collections::BTreeMap;
use std::fmt;

use tokio::sync::mpsc;
use tracing::debug;

mod file_store;
mod paths;

pub use file_store::FileConfigStore;
pub use paths::{config_dir, logs_dir, settings_path};

/// Notification emitted after a successful store write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigChange {
    /// Group that changed.
    pub group: String,
    /// Key that changed; `None` when the whole group was reset.
    pub key: Option<String>,
}

/// Error raised by a config store.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// A stored line could not be understood.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },
    /// The store refuses writes to this group.
    UnknownGroup(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::UnknownGroup(group) => write!(f, "unknown config group \"{group}\""),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } | Self::UnknownGroup(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Persistent key/value store for options.
pub trait ConfigStore {
    /// Stored value of `group.key`, if any.
    fn get(&self, group: &str, key: &str) -> Option<String>;

    /// What: Store `group.key = value` and notify subscribers.
    ///
    /// # Errors
    /// - Store specific; the caller decides whether to retry.
    fn set(&mut self, group: &str, key: &str, value: &str) -> Result<(), ConfigError>;

    /// What: Drop every key of `group` so readers fall back to defaults, then notify.
    ///
    /// # Errors
    /// - Store specific; the caller decides whether to retry.
    fn reset(&mut self, group: &str) -> Result<(), ConfigError>;

    /// Register for change notifications.
    fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ConfigChange>;
}

/// Fan-out of change notifications to every live subscriber.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    /// One sender per `subscribe` call.
    senders: Vec<mpsc::UnboundedSender<ConfigChange>>,
}

impl Subscribers {
    /// New receiver wired into the fan-out.
    pub(crate) fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ConfigChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        rx
    }

    /// Send to every subscriber, dropping those whose receiver is gone.
    pub(crate) fn notify(&mut self, change: &ConfigChange) {
        self.senders.retain(|tx| tx.send(change.clone()).is_ok());
        debug!(
            group = %change.group,
            key = ?change.key,
            subscribers = self.senders.len(),
            "[Config] Change broadcast"
        );
    }
}

/// In-process config store.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    /// Values keyed by `(group, key)`.
    values: BTreeMap<(String, String), String>,
    /// Change listeners.
    subscribers: Subscribers,
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.values
            .get(&(group.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        self.values
            .insert((group.to_string(), key.to_string()), value.to_string());
        self.subscribers.notify(&ConfigChange {
            group: group.to_string(),
            key: Some(key.to_string()),
        });
        Ok(())
    }

    fn reset(&mut self, group: &str) -> Result<(), ConfigError> {
        self.values.retain(|(g, _), _| g != group);
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
