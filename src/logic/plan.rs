use crate::catalog::{Catalog, PlayerState};
use crate::logic::annotate::{annotate, strip_annotations};
use crate::logic::filter::{is_hidden, is_section_hidden};
use crate::logic::layout::reflow;
use crate::logic::sort::sort_rows;
use crate::state::{ElementKind, OptionState, QuestItem, QuestStatus, Row, SectionId, SectionRows};
use crate::surface::Element;

/// What: Turn a section's host children into a fresh row arena.
///
/// Inputs:
/// - `section`: Section the children belong to.
/// - `children`: Host elements in host order.
/// - `catalog`: Label lookup.
/// - `player`: Player facts for eligibility.
///
/// Output:
/// - Rows for every quest entry, keyed by child index; headers are skipped.
///
/// Details:
/// - Labels are looked up with earlier prefixes stripped.
/// - Unknown labels still produce a row, always eligible and without categories.
#[must_use]
pub fn build_section(
    section: SectionId,
    children: &[Element],
    catalog: &Catalog,
    player: &dyn PlayerState,
) -> SectionRows {
    let mut out = SectionRows::new(section);
    for (index, el) in children.iter().enumerate() {
        if el.kind == ElementKind::Header {
            continue;
        }
        let label = strip_annotations(&el.text);
        let meta = catalog.lookup(label);
        let item = QuestItem {
            label: label.to_string(),
            status: QuestStatus::from_text_color(el.text_color),
            length: meta.length,
            difficulty: meta.difficulty,
            eligible: meta.is_eligible(player),
            section,
            known: !meta.is_unknown(),
        };
        out.rows.push(Row::new(index, item));
    }
    out
}

/// Result of planning one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassPlan {
    /// Sections in rendering order.
    pub sections: Vec<SectionRows>,
    /// Total height of the scrolling list.
    pub height: i32,
}

impl PassPlan {
    /// Rows left visible across all sections.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| !s.hidden)
            .map(|s| s.visible_rows().count())
            .sum()
    }

    /// Planned section, if it was part of the pass.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionRows> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// What: Compute the complete layout for one pass.
///
/// Inputs:
/// - `sections`: Freshly built sections.
/// - `options`: Current option snapshot.
///
/// Output:
/// - Sections sorted, filtered, offset and annotated (rows in display order), plus
///   the list height.
///
/// Details:
/// - Hidden sections are neither sorted nor filtered and keep their host text.
/// - Every row of a visible section is re-annotated, hidden rows included.
#[must_use]
pub fn plan_pass(mut sections: Vec<SectionRows>, options: &OptionState) -> PassPlan {
    for section in &mut sections {
        if is_section_hidden(section.id, options) {
            continue;
        }
        sort_rows(&mut section.rows, options);
        for row in &mut section.rows {
            row.hidden = is_hidden(&row.item, options);
            row.text = annotate(&row.item.label, &row.item, options);
        }
    }
    let height = reflow(&mut sections, options);
    PassPlan { sections, height }
}
