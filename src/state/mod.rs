//! Quest list state: value types, options and the per-pass row arena.

pub mod options;
pub mod rows;
pub mod types;

pub use options::{CONFIG_GROUP, OptionKey, OptionState, parse_bool};
pub use rows::{QuestItem, Row, SectionRows};
pub use types::{ElementKind, QuestDifficulty, QuestLength, QuestStatus, SectionId};
