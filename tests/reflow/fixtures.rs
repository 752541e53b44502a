//! Shared panel fixtures.

#![allow(dead_code)]

use questlist::state::SectionId;
use questlist::state::types::{COMPLETE_COLOR, IN_PROGRESS_COLOR, NOT_STARTED_COLOR};
use questlist::surface::{Element, MemoryPanel, PanelSnapshot, SectionSnapshot};

/// Section holding a title row followed by `items`.
pub fn section(title: &str, items: Vec<Element>) -> Option<SectionSnapshot> {
    let mut children = vec![Element::header(title)];
    children.extend(items);
    Some(SectionSnapshot {
        children,
        ..SectionSnapshot::default()
    })
}

/// Free section with three quests in reverse difficulty order; the other sections empty.
pub fn three_quest_panel() -> MemoryPanel {
    MemoryPanel::from_snapshot(PanelSnapshot {
        free: section(
            "Free Quests",
            vec![
                Element::item("Monkey Madness", NOT_STARTED_COLOR),
                Element::item("Dragon Slayer", IN_PROGRESS_COLOR),
                Element::item("Cook's Assistant", COMPLETE_COLOR),
            ],
        ),
        members: section("Members' Quests", Vec::new()),
        miniquests: section("Miniquests", Vec::new()),
    })
}

/// Panel with quests in every section.
pub fn full_panel() -> MemoryPanel {
    MemoryPanel::from_snapshot(PanelSnapshot {
        free: section(
            "Free Quests",
            vec![
                Element::item("Cook's Assistant", COMPLETE_COLOR),
                Element::item("Dragon Slayer", IN_PROGRESS_COLOR),
                Element::item("Goblin Diplomacy", NOT_STARTED_COLOR),
            ],
        ),
        members: section(
            "Members' Quests",
            vec![
                Element::item("Monkey Madness", NOT_STARTED_COLOR),
                Element::item("Dragon Slayer II", NOT_STARTED_COLOR),
            ],
        ),
        miniquests: section("Miniquests", vec![Element::item("Unlisted Errand", 0)]),
    })
}

/// Visible Free rows as `(offset, text)`.
pub fn free_rows(panel: &MemoryPanel) -> Vec<(i32, String)> {
    panel.visible_rows(SectionId::Free)
}
