use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{Catalog, PlayerState};
use crate::logic::{PassPlan, build_section, plan_pass};
use crate::state::{ElementKind, OptionState, SectionId, SectionRows};
use crate::surface::{Element, WidgetSurface};

/// Result of one reflow pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// Layout written to the panel.
    Applied {
        /// Quest rows left visible.
        visible_rows: usize,
        /// Total list height.
        height: i32,
    },
    /// A section was not available yet; nothing was written.
    Skipped {
        /// First section found missing.
        section: SectionId,
    },
}

/// Quest list filter/sort/layout engine.
///
/// Owns the per-section row arenas, rebuilt from scratch on every pass.
#[derive(Debug)]
pub struct QuestListEngine {
    /// Label lookup.
    catalog: Arc<Catalog>,
    /// Rows computed by the last applied pass.
    last: PassPlan,
    /// Passes that reached the panel.
    applied: usize,
}

impl Default for QuestListEngine {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin().clone()))
    }
}

impl QuestListEngine {
    /// Engine reading metadata from `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            last: PassPlan::default(),
            applied: 0,
        }
    }

    /// Catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rows of the last applied pass.
    #[must_use]
    pub const fn last_plan(&self) -> &PassPlan {
        &self.last
    }

    /// Number of passes written to a panel so far.
    #[must_use]
    pub const fn applied_passes(&self) -> usize {
        self.applied
    }

    /// What: Run one full reflow pass against the panel.
    ///
    /// Inputs:
    /// - `panel`: Host panel; only touched from the calling task.
    /// - `options`: Option snapshot taken at pass start.
    /// - `player`: Player facts for eligibility.
    ///
    /// Output:
    /// - `Applied` with counts, or `Skipped` when a section is not built yet.
    ///
    /// Details:
    /// - Asks the host to restore its natural layout first, so each pass starts
    ///   from the same state.
    /// - All three sections are read before anything is written; a missing one
    ///   aborts the pass with no further writes.
    pub fn reflow(
        &mut self,
        panel: &mut dyn WidgetSurface,
        options: &OptionState,
        player: &dyn PlayerState,
    ) -> ReflowOutcome {
        panel.reinit_list();

        let mut children: Vec<(SectionId, Vec<Element>)> = Vec::with_capacity(SectionId::ALL.len());
        for id in SectionId::ALL {
            let Some(c) = panel.children(id) else {
                debug!(section = ?id, "[Engine] Section not built yet; skipping pass");
                return ReflowOutcome::Skipped { section: id };
            };
            children.push((id, c));
        }

        let sections: Vec<SectionRows> = children
            .iter()
            .map(|(id, c)| build_section(*id, c, &self.catalog, player))
            .collect();
        let plan = plan_pass(sections, options);

        for section in &plan.sections {
            let c = children
                .iter()
                .find(|(id, _)| *id == section.id)
                .map_or(&[][..], |(_, c)| c.as_slice());
            commit(panel, section, c);
        }

        let outcome = ReflowOutcome::Applied {
            visible_rows: plan.visible_rows(),
            height: plan.height,
        };
        self.last = plan;
        self.applied += 1;
        info!(outcome = ?outcome, "[Engine] Reflow applied");
        outcome
    }
}

/// What: Write one planned section to the panel.
///
/// Inputs:
/// - `panel`: Destination.
/// - `section`: Planned rows.
/// - `children`: Host children read at pass start, for header indices.
///
/// Details:
/// - Hidden sections hide their container and every child, texts untouched.
fn commit(panel: &mut dyn WidgetSurface, section: &SectionRows, children: &[Element]) {
    let id = section.id;
    if section.hidden {
        panel.set_section_hidden(id, true);
        for index in 0..children.len() {
            panel.set_hidden(id, index, true);
        }
        return;
    }

    panel.set_section_hidden(id, false);
    if let Some(y) = section.header_offset {
        panel.set_section_offset(id, y);
    }
    for (index, el) in children.iter().enumerate() {
        if el.kind == ElementKind::Header {
            panel.set_hidden(id, index, false);
        }
    }
    for row in &section.rows {
        panel.set_hidden(id, row.index, row.hidden);
        panel.set_text(id, row.index, &row.text);
        if let Some(offset) = row.offset {
            panel.set_offset(id, row.index, offset);
        }
    }
}
