use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Element, MenuEntry, MenuSurface, WidgetSurface};
use crate::state::SectionId;

/// Serializable state of one section container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSnapshot {
    /// Container hidden.
    pub hidden: bool,
    /// Container offset in the scrolling list.
    pub offset: i32,
    /// Children in host order.
    pub children: Vec<Element>,
}

/// Serializable panel, as loaded by the CLI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSnapshot {
    /// Free section; `None` while not yet built by the host.
    pub free: Option<SectionSnapshot>,
    /// Members section.
    pub members: Option<SectionSnapshot>,
    /// Miniquests section.
    pub miniquests: Option<SectionSnapshot>,
}

/// In-memory quest list panel.
///
/// `reinit_list` restores the visibility and offsets it was built with, the
/// way the host script rebuilds its list before every pass.
#[derive(Clone, Debug, Default)]
pub struct MemoryPanel {
    /// Pristine host state.
    natural: BTreeMap<SectionId, SectionSnapshot>,
    /// Live state mutated by the engine.
    live: BTreeMap<SectionId, SectionSnapshot>,
    /// Number of `reinit_list` calls.
    reinits: usize,
}

impl MemoryPanel {
    /// Panel from a snapshot; absent sections stay unavailable.
    #[must_use]
    pub fn from_snapshot(snapshot: PanelSnapshot) -> Self {
        let mut natural = BTreeMap::new();
        for (id, s) in [
            (SectionId::Free, snapshot.free),
            (SectionId::Members, snapshot.members),
            (SectionId::Miniquests, snapshot.miniquests),
        ] {
            if let Some(s) = s {
                natural.insert(id, s);
            }
        }
        Self {
            live: natural.clone(),
            natural,
            reinits: 0,
        }
    }

    /// Add or replace a section, both pristine and live.
    pub fn insert_section(&mut self, id: SectionId, section: SectionSnapshot) {
        self.natural.insert(id, section.clone());
        self.live.insert(id, section);
    }

    /// Live state of a section.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionSnapshot> {
        self.live.get(&id)
    }

    /// Live state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            free: self.live.get(&SectionId::Free).cloned(),
            members: self.live.get(&SectionId::Members).cloned(),
            miniquests: self.live.get(&SectionId::Miniquests).cloned(),
        }
    }

    /// How many times the engine asked for a list reset.
    #[must_use]
    pub const fn reinit_count(&self) -> usize {
        self.reinits
    }

    /// What: Visible quest rows of a section in on-screen order.
    ///
    /// Output:
    /// - `(offset, text)` pairs sorted by offset; empty when the section is hidden or absent.
    #[must_use]
    pub fn visible_rows(&self, id: SectionId) -> Vec<(i32, String)> {
        let Some(s) = self.live.get(&id) else {
            return Vec::new();
        };
        if s.hidden {
            return Vec::new();
        }
        let mut rows: Vec<(i32, String)> = s
            .children
            .iter()
            .filter(|e| !e.hidden && e.kind == crate::state::ElementKind::Item)
            .map(|e| (e.offset, e.text.clone()))
            .collect();
        rows.sort_by_key(|(offset, _)| *offset);
        rows
    }

    /// Mutable child, if present.
    fn child_mut(&mut self, section: SectionId, index: usize) -> Option<&mut Element> {
        self.live
            .get_mut(&section)
            .and_then(|s| s.children.get_mut(index))
    }
}

impl WidgetSurface for MemoryPanel {
    fn reinit_list(&mut self) {
        // Layout only; texts keep whatever the last pass rendered.
        for (id, natural) in &self.natural {
            let Some(live) = self.live.get_mut(id) else {
                continue;
            };
            live.hidden = natural.hidden;
            live.offset = natural.offset;
            for (l, n) in live.children.iter_mut().zip(&natural.children) {
                l.hidden = n.hidden;
                l.offset = n.offset;
            }
        }
        self.reinits += 1;
    }

    fn children(&self, section: SectionId) -> Option<Vec<Element>> {
        self.live.get(&section).map(|s| s.children.clone())
    }

    fn set_section_hidden(&mut self, section: SectionId, hidden: bool) {
        if let Some(s) = self.live.get_mut(&section) {
            s.hidden = hidden;
        }
    }

    fn set_section_offset(&mut self, section: SectionId, offset: i32) {
        if let Some(s) = self.live.get_mut(&section) {
            s.offset = offset;
        }
    }

    fn set_text(&mut self, section: SectionId, index: usize, text: &str) {
        if let Some(e) = self.child_mut(section, index) {
            text.clone_into(&mut e.text);
        }
    }

    fn set_hidden(&mut self, section: SectionId, index: usize, hidden: bool) {
        if let Some(e) = self.child_mut(section, index) {
            e.hidden = hidden;
        }
    }

    fn set_offset(&mut self, section: SectionId, index: usize, offset: i32) {
        if let Some(e) = self.child_mut(section, index) {
            e.offset = offset;
        }
    }
}

impl fmt::Display for MemoryPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in SectionId::ALL {
            match self.live.get(&id) {
                None => writeln!(f, "{} (not loaded)", id.title())?,
                Some(s) if s.hidden => writeln!(f, "{} (hidden)", id.title())?,
                Some(s) => {
                    writeln!(f, "[{:>4}] {}", s.offset, id.title())?;
                    for (offset, text) in self.visible_rows(id) {
                        writeln!(f, "    [{offset:>4}] {text}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// In-memory context menu.
#[derive(Clone, Debug)]
pub struct MemoryMenu {
    /// Entries, "Cancel" last.
    entries: Vec<MenuEntry>,
}

impl Default for MemoryMenu {
    fn default() -> Self {
        Self {
            entries: vec![MenuEntry::host("Cancel")],
        }
    }
}

impl MemoryMenu {
    /// Menu holding `entries` as given.
    #[must_use]
    pub const fn with_entries(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Entry labels in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

impl MenuSurface for MemoryMenu {
    fn entries(&self) -> Vec<MenuEntry> {
        self.entries.clone()
    }

    fn insert_before_last(&mut self, entry: MenuEntry) {
        let at = self.entries.len().saturating_sub(1);
        self.entries.insert(at, entry);
    }

    fn clear_contributed(&mut self) {
        self.entries.retain(|e| e.action.is_none());
    }
}
