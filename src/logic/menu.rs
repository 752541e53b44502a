//! Quest tab context-menu entries.

use tracing::{debug, info};

use crate::config::{ConfigError, ConfigStore};
use crate::state::{CONFIG_GROUP, OptionKey, OptionState};
use crate::surface::{MenuEntry, MenuSurface};

/// Label of the entry restoring every option to its default.
pub const RESET: &str = "Reset";

/// Toggle entries in menu order: option, label when it is off, label when it is on.
///
/// The label shown is always the action a click would take.
const TOGGLES: [(OptionKey, &str, &str); 11] = [
    (OptionKey::SortLength, "Sort by Length", "Unsort by Length"),
    (OptionKey::ShowLength, "Show Length", "Hide Length"),
    (OptionKey::SortDifficulty, "Sort by Difficulty", "Unsort by Difficulty"),
    (OptionKey::ShowDifficulty, "Show Difficulty", "Hide Difficulty"),
    (OptionKey::HideCantDo, "Hide Can't-Do", "Show Can't-Do"),
    (OptionKey::HideNotStarted, "Hide Not-Started", "Show Not-Started"),
    (OptionKey::HideInProgress, "Hide In-Progress", "Show In-Progress"),
    (OptionKey::HideCompleted, "Hide Complete", "Show Complete"),
    (OptionKey::HideMiniquests, "Hide Miniquests", "Show Miniquests"),
    (OptionKey::HideMembers, "Hide Members", "Show Members"),
    (OptionKey::HideFree, "Hide Free", "Show Free"),
];

/// What a contributed entry does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Restore every option to its default.
    Reset,
    /// Write one option.
    Set {
        /// Option to write.
        key: OptionKey,
        /// Value to write.
        value: bool,
    },
}

impl MenuAction {
    /// What: Label shown for this action.
    ///
    /// Output:
    /// - Menu text, or `None` for options that have no menu entry.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Reset => Some(RESET),
            Self::Set { key, value } => TOGGLES
                .iter()
                .find(|(k, _, _)| *k == key)
                // Setting to true is what the "off" label offers.
                .map(|(_, off, on)| if value { *off } else { *on }),
        }
    }

    /// What: Parse a clicked label back into an action.
    ///
    /// Inputs:
    /// - `label`: Menu option text.
    ///
    /// Output:
    /// - The action, or `None` for labels this module never contributes.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label == RESET {
            return Some(Self::Reset);
        }
        TOGGLES.iter().find_map(|(key, off, on)| {
            if label == *off {
                Some(Self::Set {
                    key: *key,
                    value: true,
                })
            } else if label == *on {
                Some(Self::Set {
                    key: *key,
                    value: false,
                })
            } else {
                None
            }
        })
    }

    /// What: Perform the action against the config store.
    ///
    /// Inputs:
    /// - `store`: Store owning the `questtab` group.
    ///
    /// Output:
    /// - `Ok(())` once written; the store emits the change notification.
    ///
    /// # Errors
    /// - The store's write error, passed through unretried.
    pub fn apply(self, store: &mut dyn ConfigStore) -> Result<(), ConfigError> {
        match self {
            Self::Reset => store.reset(CONFIG_GROUP),
            Self::Set { key, value } => OptionState::store(store, key, value),
        }
    }
}

/// What: Build the entries to offer for the current options.
///
/// Inputs:
/// - `options`: Current option snapshot.
///
/// Output:
/// - Reset followed by one toggle per option, each flipping its current value.
#[must_use]
pub fn build_entries(options: &OptionState) -> Vec<MenuAction> {
    let mut out = Vec::with_capacity(TOGGLES.len() + 1);
    out.push(MenuAction::Reset);
    for (key, _, _) in TOGGLES {
        out.push(MenuAction::Set {
            key,
            value: !options.get(key),
        });
    }
    out
}

/// What: Append the option entries to an open quest tab menu.
///
/// Inputs:
/// - `menu`: The host menu being built.
/// - `options`: Current option snapshot.
/// - `target`: Target text of the menu, copied onto each new entry.
///
/// Output:
/// - Number of entries inserted.
///
/// Details:
/// - Does nothing when the menu option is disabled.
/// - Labels already present in the menu are skipped, so repeated calls for the
///   same menu add nothing.
/// - Entries go right above the terminal "Cancel" slot, in build order.
pub fn contribute(menu: &mut dyn MenuSurface, options: &OptionState, target: &str) -> usize {
    if !options.menu_option {
        return 0;
    }
    let mut inserted = 0;
    for action in build_entries(options) {
        let Some(label) = action.label() else {
            continue;
        };
        if menu.entries().iter().any(|e| e.label == label) {
            continue;
        }
        menu.insert_before_last(MenuEntry {
            label: label.to_string(),
            target: target.to_string(),
            action: Some(action),
        });
        inserted += 1;
    }
    debug!(inserted, "[Menu] Contributed quest list entries");
    inserted
}

/// What: Handle a click on a menu entry by label.
///
/// Inputs:
/// - `label`: Clicked option text.
/// - `store`: Config store to write to.
///
/// Output:
/// - `Ok(Some(action))` when the label was ours and the write landed,
///   `Ok(None)` for foreign labels.
///
/// # Errors
/// - The store's write error.
pub fn invoke(label: &str, store: &mut dyn ConfigStore) -> Result<Option<MenuAction>, ConfigError> {
    let Some(action) = MenuAction::from_label(label) else {
        return Ok(None);
    };
    action.apply(store)?;
    info!(label, action = ?action, "[Menu] Applied quest list option");
    Ok(Some(action))
}
