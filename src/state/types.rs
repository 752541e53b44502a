//! Core value types used by the quest list state.

use serde::{Deserialize, Serialize};

/// Host text colour of a completed quest row.
pub const COMPLETE_COLOR: u32 = 901_389;
/// Host text colour of a started but unfinished quest row.
pub const IN_PROGRESS_COLOR: u32 = 16_776_960;
/// Host text colour of a quest row that has not been started.
pub const NOT_STARTED_COLOR: u32 = 16_711_680;

/// Progress of a quest as shown by the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    /// Quest finished.
    Complete,
    /// Quest started.
    InProgress,
    /// Quest untouched.
    NotStarted,
}

impl QuestStatus {
    /// What: Derive a status from the host's row text colour.
    ///
    /// Inputs:
    /// - `color`: RGB colour reported by the host element.
    ///
    /// Output:
    /// - `Some(status)` for the three known colours; `None` otherwise.
    #[must_use]
    pub const fn from_text_color(color: u32) -> Option<Self> {
        match color {
            COMPLETE_COLOR => Some(Self::Complete),
            IN_PROGRESS_COLOR => Some(Self::InProgress),
            NOT_STARTED_COLOR => Some(Self::NotStarted),
            _ => None,
        }
    }

    /// Host text colour for this status.
    #[must_use]
    pub const fn text_color(self) -> u32 {
        match self {
            Self::Complete => COMPLETE_COLOR,
            Self::InProgress => IN_PROGRESS_COLOR,
            Self::NotStarted => NOT_STARTED_COLOR,
        }
    }
}

/// Quest length category. Declaration order is the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestLength {
    /// Short quest.
    Short,
    /// Medium quest.
    Medium,
    /// Long quest.
    Long,
    /// Very long quest.
    VeryLong,
}

impl QuestLength {
    /// What: Coloured one-letter prefix rendered in front of a quest label.
    ///
    /// Output:
    /// - Host markup such as `<col=DC10D>S</col> ` (note the trailing space).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Short => "<col=DC10D>S</col> ",
            Self::Medium => "<col=FFFF00>M</col> ",
            Self::Long => "<col=FF8C00>L</col> ",
            Self::VeryLong => "<col=FF0000>V</col> ",
        }
    }
}

/// Quest difficulty category. Declaration order is the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestDifficulty {
    /// Novice.
    Novice,
    /// Intermediate.
    Intermediate,
    /// Experienced.
    Experienced,
    /// Master.
    Master,
    /// Grandmaster.
    Grandmaster,
}

impl QuestDifficulty {
    /// What: Coloured one-letter prefix rendered in front of a quest label.
    ///
    /// Output:
    /// - Host markup such as `<col=FF8C00>M</col> ` (note the trailing space).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Novice => "<col=DC10D>N</col> ",
            Self::Intermediate => "<col=9ACD32>I</col> ",
            Self::Experienced => "<col=FFFF00>E</col> ",
            Self::Master => "<col=FF8C00>M</col> ",
            Self::Grandmaster => "<col=FF0000>G</col> ",
        }
    }
}

/// One of the three fixed groupings of the quest list.
///
/// Declaration order is the rendering order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Free-to-play quests.
    Free,
    /// Members quests.
    Members,
    /// Miniquests.
    Miniquests,
}

impl SectionId {
    /// All sections in rendering order.
    pub const ALL: [Self; 3] = [Self::Free, Self::Members, Self::Miniquests];

    /// Human readable section title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Free => "Free Quests",
            Self::Members => "Members' Quests",
            Self::Miniquests => "Miniquests",
        }
    }
}

/// Kind of a host element found among a section's children.
///
/// The host reuses one widget type for titles and list entries; the kind
/// tells them apart without inspecting names at every use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Section title row, never filtered or sorted.
    Header,
    /// Quest entry.
    #[default]
    Item,
}
