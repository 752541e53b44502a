//! Per-pass row arena.
//!
//! Rows are rebuilt from the host elements on every reflow pass and never
//! carried over, so nothing here tracks identity across passes.

use super::types::{QuestDifficulty, QuestLength, QuestStatus, SectionId};

/// A quest as seen during one reflow pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestItem {
    /// Display label with any earlier annotation removed.
    pub label: String,
    /// Status derived from the row colour, when recognisable.
    pub status: Option<QuestStatus>,
    /// Length category; `None` for unknown quests.
    pub length: Option<QuestLength>,
    /// Difficulty category; `None` for unknown quests.
    pub difficulty: Option<QuestDifficulty>,
    /// Whether the player meets the quest's requirements.
    pub eligible: bool,
    /// Section the row was read from.
    pub section: SectionId,
    /// Whether the catalog knows this label.
    pub known: bool,
}

/// One row of the arena, addressed by `(section, index)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Position of the element among the section's host children.
    pub index: usize,
    /// Quest data for the row.
    pub item: QuestItem,
    /// Filtered out for this pass.
    pub hidden: bool,
    /// Section-relative vertical offset; `None` while hidden.
    pub offset: Option<i32>,
    /// Text to render, base label plus any prefixes.
    pub text: String,
}

impl Row {
    /// Fresh visible row without offset; text starts as the bare label.
    #[must_use]
    pub fn new(index: usize, item: QuestItem) -> Self {
        let text = item.label.clone();
        Self {
            index,
            item,
            hidden: false,
            offset: None,
            text,
        }
    }
}

/// Rows and header placement of one section for a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRows {
    /// Which section.
    pub id: SectionId,
    /// Section hidden as a whole (header and rows).
    pub hidden: bool,
    /// Header offset in the scrolling list; `None` while hidden.
    pub header_offset: Option<i32>,
    /// Rows in display order.
    pub rows: Vec<Row>,
}

impl SectionRows {
    /// Empty visible section.
    #[must_use]
    pub const fn new(id: SectionId) -> Self {
        Self {
            id,
            hidden: false,
            header_offset: None,
            rows: Vec::new(),
        }
    }

    /// Rows left visible after filtering.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| !r.hidden)
    }
}
