//! Host-facing surfaces: the quest list widgets and the context menu.
//!
//! The engine only talks to the host through these traits. The in-memory
//! implementations back the CLI and the tests.

use serde::{Deserialize, Serialize};

use crate::logic::menu::MenuAction;
use crate::state::{ElementKind, SectionId};

mod memory;

pub use memory::{MemoryMenu, MemoryPanel, PanelSnapshot, SectionSnapshot};

/// Snapshot of one host element under a section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Title row or quest entry.
    pub kind: ElementKind,
    /// Rendered text.
    pub text: String,
    /// RGB text colour; encodes quest status for entries.
    pub text_color: u32,
    /// Currently hidden.
    pub hidden: bool,
    /// Section-relative vertical offset.
    pub offset: i32,
}

impl Element {
    /// Quest entry with the given text and colour.
    #[must_use]
    pub fn item(text: impl Into<String>, text_color: u32) -> Self {
        Self {
            kind: ElementKind::Item,
            text: text.into(),
            text_color,
            hidden: false,
            offset: 0,
        }
    }

    /// Title row.
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Header,
            text: text.into(),
            text_color: 0,
            hidden: false,
            offset: 0,
        }
    }
}

/// The host's quest list panel.
///
/// Every method must be called from the thread that owns the panel.
pub trait WidgetSurface {
    /// Ask the host to restore its natural list layout before a pass.
    fn reinit_list(&mut self);

    /// Children of a section in host order; `None` while the panel is still
    /// being constructed.
    fn children(&self, section: SectionId) -> Option<Vec<Element>>;

    /// Show or hide the section container.
    fn set_section_hidden(&mut self, section: SectionId, hidden: bool);

    /// Move the section container within the scrolling list.
    fn set_section_offset(&mut self, section: SectionId, offset: i32);

    /// Set the text of child `index`.
    fn set_text(&mut self, section: SectionId, index: usize, text: &str);

    /// Show or hide child `index`.
    fn set_hidden(&mut self, section: SectionId, index: usize, hidden: bool);

    /// Move child `index` within its section.
    fn set_offset(&mut self, section: SectionId, index: usize, offset: i32);
}

/// One context-menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Option text shown to the player.
    pub label: String,
    /// Target text of the menu the entry belongs to.
    pub target: String,
    /// Action run on click; `None` for host entries.
    pub action: Option<MenuAction>,
}

impl MenuEntry {
    /// Entry owned by the host (e.g. "Cancel").
    #[must_use]
    pub fn host(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: String::new(),
            action: None,
        }
    }
}

/// The host's currently open context menu.
pub trait MenuSurface {
    /// Current entries, the terminal "Cancel" slot last.
    fn entries(&self) -> Vec<MenuEntry>;

    /// Insert right before the last entry.
    fn insert_before_last(&mut self, entry: MenuEntry);

    /// Start a newly opened menu: drop entries contributed to an earlier one,
    /// keeping the host's own entries.
    fn clear_contributed(&mut self);
}
