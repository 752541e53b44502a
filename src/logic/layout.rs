use crate::logic::filter::is_section_hidden;
use crate::state::{OptionState, SectionId, SectionRows};

/// Height reserved for a section title.
pub const TITLE_SPACE: i32 = 20;
/// Height of one quest row.
pub const ITEM_SPACE: i32 = 15;
/// Gap above the first section.
pub const TOP_PADDING: i32 = 10;
/// Gap after the free section.
pub const BOTTOM_PADDING: i32 = 8;

/// What: Assign vertical offsets to section headers and visible rows.
///
/// Inputs:
/// - `sections`: Sections with rows already sorted and filtered.
/// - `options`: Current option snapshot (for section hiding).
///
/// Output:
/// - Offsets written into `sections`; returns the list's total height.
///
/// Details:
/// - Sections are laid out Free, Members, Miniquests regardless of input order.
/// - A hidden section is skipped entirely: header and rows hidden, cursor unchanged.
/// - Header offsets are absolute; row offsets are relative to their section and
///   start right below the title, stepping by `ITEM_SPACE`.
/// - Hidden rows take no slot; the next visible row closes the gap.
/// - Bottom padding follows the free section only, and only when it is shown.
pub fn reflow(sections: &mut [SectionRows], options: &OptionState) -> i32 {
    sections.sort_by_key(|s| s.id);
    let mut cursor = TOP_PADDING;
    for section in sections.iter_mut() {
        if is_section_hidden(section.id, options) {
            section.hidden = true;
            section.header_offset = None;
            for row in &mut section.rows {
                row.hidden = true;
                row.offset = None;
            }
            continue;
        }
        section.hidden = false;
        section.header_offset = Some(cursor);
        cursor += TITLE_SPACE;
        let mut local = TITLE_SPACE;
        for row in &mut section.rows {
            if row.hidden {
                row.offset = None;
                continue;
            }
            row.offset = Some(local);
            local += ITEM_SPACE;
            cursor += ITEM_SPACE;
        }
        if section.id == SectionId::Free {
            cursor += BOTTOM_PADDING;
        }
    }
    cursor
}
