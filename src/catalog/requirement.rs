//! Quest requirements and the player state they are checked against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::QuestStatus;

/// Read access to the player facts a requirement can depend on.
pub trait PlayerState {
    /// Level in the named skill (case-insensitive); 1 when unknown.
    fn skill_level(&self, skill: &str) -> u32;
    /// Progress of the named quest, when the host knows it.
    fn quest_status(&self, quest: &str) -> Option<QuestStatus>;
    /// Total quest points.
    fn quest_points(&self) -> u32;
    /// Combat level.
    fn combat_level(&self) -> u32;
}

/// A single precondition for starting a quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    /// Minimum quest points.
    QuestPoints {
        /// Points needed.
        points: u32,
    },
    /// Minimum level in a skill.
    Skill {
        /// Skill name, e.g. `"Agility"`.
        skill: String,
        /// Level needed.
        level: u32,
    },
    /// Another quest must be complete.
    Quest {
        /// Name of the prerequisite quest.
        name: String,
    },
    /// Minimum combat level.
    CombatLevel {
        /// Level needed.
        level: u32,
    },
}

impl Requirement {
    /// Whether `player` satisfies this requirement.
    #[must_use]
    pub fn is_met(&self, player: &dyn PlayerState) -> bool {
        match self {
            Self::QuestPoints { points } => player.quest_points() >= *points,
            Self::Skill { skill, level } => player.skill_level(skill) >= *level,
            Self::Quest { name } => player.quest_status(name) == Some(QuestStatus::Complete),
            Self::CombatLevel { level } => player.combat_level() >= *level,
        }
    }
}

/// What: Evaluate a conjunction of requirements.
///
/// Inputs:
/// - `reqs`: Requirements of one quest.
/// - `player`: Player facts.
///
/// Output:
/// - `true` when every requirement is met (vacuously for an empty list).
#[must_use]
pub fn all_met(reqs: &[Requirement], player: &dyn PlayerState) -> bool {
    reqs.iter().all(|r| r.is_met(player))
}

/// Player state that satisfies every requirement.
///
/// Used when the host cannot provide player facts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrestricted;

impl PlayerState for Unrestricted {
    fn skill_level(&self, _skill: &str) -> u32 {
        u32::MAX
    }
    fn quest_status(&self, _quest: &str) -> Option<QuestStatus> {
        Some(QuestStatus::Complete)
    }
    fn quest_points(&self) -> u32 {
        u32::MAX
    }
    fn combat_level(&self) -> u32 {
        u32::MAX
    }
}

/// Serializable player facts, e.g. loaded from a JSON snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    /// Skill levels keyed by skill name.
    pub skills: HashMap<String, u32>,
    /// Quest progress keyed by quest name.
    pub quests: HashMap<String, QuestStatus>,
    /// Total quest points.
    pub quest_points: u32,
    /// Combat level.
    pub combat_level: u32,
}

impl PlayerState for PlayerSnapshot {
    fn skill_level(&self, skill: &str) -> u32 {
        self.skills
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(skill))
            .map_or(1, |(_, lvl)| *lvl)
    }
    fn quest_status(&self, quest: &str) -> Option<QuestStatus> {
        self.quests.get(quest).copied()
    }
    fn quest_points(&self) -> u32 {
        self.quest_points
    }
    fn combat_level(&self) -> u32 {
        self.combat_level
    }
}
