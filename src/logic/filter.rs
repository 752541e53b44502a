use crate::state::{OptionKey, OptionState, QuestItem, QuestStatus, SectionId};

/// What: Option that hides a whole section.
///
/// Inputs:
/// - `section`: Section to look up.
///
/// Output:
/// - The `hide*` option for that section.
#[must_use]
pub const fn section_option(section: SectionId) -> OptionKey {
    match section {
        SectionId::Free => OptionKey::HideFree,
        SectionId::Members => OptionKey::HideMembers,
        SectionId::Miniquests => OptionKey::HideMiniquests,
    }
}

/// Whether `section` is hidden as a whole under `options`.
#[must_use]
pub const fn is_section_hidden(section: SectionId, options: &OptionState) -> bool {
    options.get(section_option(section))
}

/// What: Decide whether a single quest row is filtered out.
///
/// Inputs:
/// - `item`: Quest data for the row.
/// - `options`: Current option snapshot.
///
/// Output:
/// - `true` when the row must be hidden.
///
/// Details:
/// - Status rules only apply when a status could be derived from the row colour.
/// - The Can't-Do rule is checked regardless of the status outcome; either rule hides.
/// - Section-level hiding is handled by the caller before rows are built.
#[must_use]
pub const fn is_hidden(item: &QuestItem, options: &OptionState) -> bool {
    let by_status = match item.status {
        Some(QuestStatus::Complete) => options.hide_completed,
        Some(QuestStatus::InProgress) => options.hide_in_progress,
        Some(QuestStatus::NotStarted) => options.hide_not_started,
        None => false,
    };
    by_status || (options.hide_cant_do && !item.eligible)
}
