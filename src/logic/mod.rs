//! Core non-UI logic split into modular submodules.

pub mod annotate;
pub mod filter;
pub mod layout;
pub mod menu;
pub mod plan;
pub mod sort;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use annotate::{annotate, strip_annotations};
pub use filter::{is_hidden, is_section_hidden};
pub use layout::{BOTTOM_PADDING, ITEM_SPACE, TITLE_SPACE, TOP_PADDING, reflow};
pub use menu::{MenuAction, build_entries, contribute, invoke};
pub use plan::{PassPlan, build_section, plan_pass};
pub use sort::{SortCriterion, order, sort_rows};
