use crate::state::{OptionState, Row};

/// Ways the quest list can be ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortCriterion {
    /// Host order as read; already alphabetical.
    Alphabetical,
    /// Short first, very long last.
    Length,
    /// Novice first, grandmaster last.
    Difficulty,
}

/// What: Stable-sort rows by a single criterion.
///
/// Inputs:
/// - `rows`: Rows of one section, in their current order.
/// - `criterion`: Key to sort by.
///
/// Output:
/// - `rows` reordered in place; equal keys keep their relative order.
///
/// Details:
/// - `Alphabetical` sorts by the host child index rather than comparing text,
///   since the text may still carry prefixes from an earlier pass.
/// - Rows without the category (unknown quests) sort after every known row.
pub fn order(rows: &mut [Row], criterion: SortCriterion) {
    match criterion {
        SortCriterion::Alphabetical => rows.sort_by_key(|r| r.index),
        SortCriterion::Length => rows.sort_by_key(|r| (r.item.length.is_none(), r.item.length)),
        SortCriterion::Difficulty => {
            rows.sort_by_key(|r| (r.item.difficulty.is_none(), r.item.difficulty));
        }
    }
}

/// What: Apply the full sort policy for the current options.
///
/// Inputs:
/// - `rows`: Rows of one section.
/// - `options`: Current option snapshot.
///
/// Output:
/// - `rows` reordered in place.
///
/// Details:
/// - Alphabetical always runs first as the baseline, then Length, then Difficulty.
///   The last applied sort dominates, so with both enabled difficulty is the primary
///   key and length breaks ties.
pub fn sort_rows(rows: &mut [Row], options: &OptionState) {
    order(rows, SortCriterion::Alphabetical);
    if options.sort_length {
        order(rows, SortCriterion::Length);
    }
    if options.sort_difficulty {
        order(rows, SortCriterion::Difficulty);
    }
}
