//! Static quest catalog: label to metadata lookup.
//!
//! The built-in catalog is parsed once from embedded TOML. Custom catalogs
//! can be loaded from disk with the same format.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::{QuestDifficulty, QuestLength, SectionId};

mod requirement;

pub use requirement::{PlayerSnapshot, PlayerState, Requirement, Unrestricted, all_met};

/// Embedded catalog source.
const BUILTIN_CATALOG: &str = include_str!("quests.toml");

/// Metadata known about one quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Display name, identical to the host label.
    pub name: String,
    /// Section the quest belongs to; `None` for the unknown sentinel.
    #[serde(default)]
    pub section: Option<SectionId>,
    /// Length category.
    #[serde(default)]
    pub length: Option<QuestLength>,
    /// Difficulty category.
    #[serde(default)]
    pub difficulty: Option<QuestDifficulty>,
    /// Preconditions for starting the quest.
    #[serde(default)]
    pub requires: Vec<Requirement>,
}

impl ItemMetadata {
    /// What: Build the sentinel used for labels the catalog does not know.
    ///
    /// Output:
    /// - Record with no section, length, difficulty or requirements.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            name: String::new(),
            section: None,
            length: None,
            difficulty: None,
            requires: Vec::new(),
        }
    }

    /// Whether this is the unknown sentinel; loaded catalogs never hold blank names.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether `player` can start this quest. The sentinel is always eligible.
    #[must_use]
    pub fn is_eligible(&self, player: &dyn PlayerState) -> bool {
        all_met(&self.requires, player)
    }
}

/// Shared unknown sentinel.
static UNKNOWN: ItemMetadata = ItemMetadata::unknown();

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Catalog entries.
    #[serde(default)]
    quest: Vec<ItemMetadata>,
}

/// Error raised while loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file is not valid catalog TOML.
    Toml(toml::de::Error),
    /// Two entries share a name.
    Duplicate {
        /// The repeated name.
        name: String,
    },
    /// An entry has an empty name; empty names are reserved for unknown labels.
    EmptyName {
        /// 0-based position of the entry in the file.
        index: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Toml(err) => write!(f, "invalid catalog: {err}"),
            Self::Duplicate { name } => write!(f, "duplicate catalog entry \"{name}\""),
            Self::EmptyName { index } => write!(f, "catalog entry #{index} has an empty name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Duplicate { .. } | Self::EmptyName { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

/// Immutable label to metadata table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Entries keyed by display name.
    by_name: HashMap<String, ItemMetadata>,
}

impl Catalog {
    /// What: Parse a catalog from TOML text.
    ///
    /// Inputs:
    /// - `content`: TOML with one `[[quest]]` table per entry.
    ///
    /// Output:
    /// - The catalog, or an error on invalid TOML or a repeated name.
    ///
    /// # Errors
    /// - `CatalogError::Toml` when the text does not match the layout.
    /// - `CatalogError::Duplicate` when two entries share a name.
    /// - `CatalogError::EmptyName` when an entry has a blank name.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut by_name = HashMap::with_capacity(file.quest.len());
        for (index, entry) in file.quest.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if by_name.contains_key(&entry.name) {
                return Err(CatalogError::Duplicate { name: entry.name });
            }
            by_name.insert(entry.name.clone(), entry);
        }
        Ok(Self { by_name })
    }

    /// What: Load a catalog file from disk.
    ///
    /// Inputs:
    /// - `path`: Catalog TOML file.
    ///
    /// Output:
    /// - Parsed catalog.
    ///
    /// # Errors
    /// - `CatalogError::Io` when the file cannot be read; parse errors as in `from_toml_str`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), entries = catalog.len(), "[Catalog] Loaded catalog file");
        Ok(catalog)
    }

    /// What: Access the built-in catalog, parsing it on first use.
    ///
    /// Output:
    /// - Shared catalog; empty if the embedded data failed to parse.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| match Self::from_toml_str(BUILTIN_CATALOG) {
            Ok(c) => {
                debug!(entries = c.len(), "[Catalog] Built-in catalog ready");
                c
            }
            Err(e) => {
                warn!(error = %e, "[Catalog] Built-in catalog invalid; every label is unknown");
                Self::default()
            }
        })
    }

    /// What: Look up a label.
    ///
    /// Inputs:
    /// - `label`: Host label with any annotation already stripped.
    ///
    /// Output:
    /// - Matching metadata, or the unknown sentinel.
    #[must_use]
    pub fn lookup(&self, label: &str) -> &ItemMetadata {
        self.by_name.get(label).unwrap_or(&UNKNOWN)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
