//! Display options driving filtering, sorting and annotation.

use tracing::debug;

use crate::config::{ConfigError, ConfigStore};

/// Config group holding every quest list option.
pub const CONFIG_GROUP: &str = "questtab";

/// Identifier of a single option in the `questtab` config group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Hide the free section.
    HideFree,
    /// Hide the members section.
    HideMembers,
    /// Hide the miniquests section.
    HideMiniquests,
    /// Hide completed quests.
    HideCompleted,
    /// Hide quests in progress.
    HideInProgress,
    /// Hide quests not yet started.
    HideNotStarted,
    /// Hide quests whose requirements are not met.
    HideCantDo,
    /// Prefix labels with a length code.
    ShowLength,
    /// Sort by length.
    SortLength,
    /// Prefix labels with a difficulty code.
    ShowDifficulty,
    /// Sort by difficulty.
    SortDifficulty,
    /// Contribute entries to the quest tab context menu.
    MenuOption,
}

impl OptionKey {
    /// Every key, in config file order.
    pub const ALL: [Self; 12] = [
        Self::HideFree,
        Self::HideMembers,
        Self::HideMiniquests,
        Self::HideCompleted,
        Self::HideInProgress,
        Self::HideNotStarted,
        Self::HideCantDo,
        Self::ShowLength,
        Self::SortLength,
        Self::ShowDifficulty,
        Self::SortDifficulty,
        Self::MenuOption,
    ];

    /// Key name used in the config store.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::HideFree => "hideFree",
            Self::HideMembers => "hideMembers",
            Self::HideMiniquests => "hideMiniquests",
            Self::HideCompleted => "hideCompleted",
            Self::HideInProgress => "hideInProgress",
            Self::HideNotStarted => "hideNotStarted",
            Self::HideCantDo => "hideCantDo",
            Self::ShowLength => "showLength",
            Self::SortLength => "sortLength",
            Self::ShowDifficulty => "showDifficulty",
            Self::SortDifficulty => "sortDifficulty",
            Self::MenuOption => "menuOption",
        }
    }

    /// Parse a key from its config name (exact match).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_config_key() == s)
    }

    /// Value the key takes when absent from the store.
    #[must_use]
    pub const fn default_value(self) -> bool {
        matches!(self, Self::MenuOption)
    }
}

/// What: Lenient boolean parse shared by every option read.
///
/// Inputs:
/// - `val`: Raw stored value.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` otherwise.
#[must_use]
pub fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// Snapshot of the quest list options.
///
/// Options are independent; every combination is valid input to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OptionState {
    /// Hide the free section.
    pub hide_free: bool,
    /// Hide the members section.
    pub hide_members: bool,
    /// Hide the miniquests section.
    pub hide_miniquests: bool,
    /// Hide completed quests.
    pub hide_completed: bool,
    /// Hide quests in progress.
    pub hide_in_progress: bool,
    /// Hide quests not yet started.
    pub hide_not_started: bool,
    /// Hide quests whose requirements are not met.
    pub hide_cant_do: bool,
    /// Prefix labels with a length code.
    pub show_length: bool,
    /// Sort by length.
    pub sort_length: bool,
    /// Prefix labels with a difficulty code.
    pub show_difficulty: bool,
    /// Sort by difficulty.
    pub sort_difficulty: bool,
    /// Contribute entries to the quest tab context menu.
    pub menu_option: bool,
}

impl Default for OptionState {
    fn default() -> Self {
        Self {
            hide_free: false,
            hide_members: false,
            hide_miniquests: false,
            hide_completed: false,
            hide_in_progress: false,
            hide_not_started: false,
            hide_cant_do: false,
            show_length: false,
            sort_length: false,
            show_difficulty: false,
            sort_difficulty: false,
            menu_option: true,
        }
    }
}

impl OptionState {
    /// Current value of one option.
    #[must_use]
    pub const fn get(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::HideFree => self.hide_free,
            OptionKey::HideMembers => self.hide_members,
            OptionKey::HideMiniquests => self.hide_miniquests,
            OptionKey::HideCompleted => self.hide_completed,
            OptionKey::HideInProgress => self.hide_in_progress,
            OptionKey::HideNotStarted => self.hide_not_started,
            OptionKey::HideCantDo => self.hide_cant_do,
            OptionKey::ShowLength => self.show_length,
            OptionKey::SortLength => self.sort_length,
            OptionKey::ShowDifficulty => self.show_difficulty,
            OptionKey::SortDifficulty => self.sort_difficulty,
            OptionKey::MenuOption => self.menu_option,
        }
    }

    /// Overwrite one option.
    pub fn set(&mut self, key: OptionKey, value: bool) {
        let slot = match key {
            OptionKey::HideFree => &mut self.hide_free,
            OptionKey::HideMembers => &mut self.hide_members,
            OptionKey::HideMiniquests => &mut self.hide_miniquests,
            OptionKey::HideCompleted => &mut self.hide_completed,
            OptionKey::HideInProgress => &mut self.hide_in_progress,
            OptionKey::HideNotStarted => &mut self.hide_not_started,
            OptionKey::HideCantDo => &mut self.hide_cant_do,
            OptionKey::ShowLength => &mut self.show_length,
            OptionKey::SortLength => &mut self.sort_length,
            OptionKey::ShowDifficulty => &mut self.show_difficulty,
            OptionKey::SortDifficulty => &mut self.sort_difficulty,
            OptionKey::MenuOption => &mut self.menu_option,
        };
        *slot = value;
    }

    /// What: Read the full option snapshot from a config store.
    ///
    /// Inputs:
    /// - `store`: Any config store holding the `questtab` group.
    ///
    /// Output:
    /// - Snapshot where absent keys take their defaults.
    #[must_use]
    pub fn load(store: &dyn ConfigStore) -> Self {
        let mut out = Self::default();
        for key in OptionKey::ALL {
            if let Some(raw) = store.get(CONFIG_GROUP, key.as_config_key()) {
                out.set(key, parse_bool(&raw));
            }
        }
        debug!(options = ?out, "[Config] Loaded quest list options");
        out
    }

    /// What: Persist one option to a config store.
    ///
    /// Inputs:
    /// - `store`: Destination store.
    /// - `key`: Option to write.
    /// - `value`: New value.
    ///
    /// Output:
    /// - `Ok(())` once the store accepted the write; the store's error otherwise.
    ///
    /// # Errors
    /// - Propagates the store's write failure.
    pub fn store(
        store: &mut dyn ConfigStore,
        key: OptionKey,
        value: bool,
    ) -> Result<(), ConfigError> {
        store.set(
            CONFIG_GROUP,
            key.as_config_key(),
            if value { "true" } else { "false" },
        )
    }
}
