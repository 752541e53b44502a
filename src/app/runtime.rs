use tokio::select;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{PlayerState, Unrestricted};
use crate::config::{ConfigChange, ConfigError, ConfigStore};
use crate::logic::menu;
use crate::state::{CONFIG_GROUP, OptionState};
use crate::surface::{MenuSurface, WidgetSurface};

use super::engine::{QuestListEngine, ReflowOutcome};
use super::queue::{ReflowHandle, ReflowQueue, ReflowReason};

/// Notifications delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A config group changed in a store the runtime does not own.
    ConfigChanged {
        /// Group that changed.
        group: String,
    },
    /// The host finished building the quest list.
    PanelLoaded,
    /// The player clicked the quest tab.
    QuestTabClicked,
    /// A context menu is being built.
    MenuOpened {
        /// Menu target text.
        target: String,
        /// Whether it was opened on the quest tab.
        on_quest_tab: bool,
    },
    /// The player picked a menu entry.
    MenuEntryClicked {
        /// Entry label.
        label: String,
    },
}

/// Single-task owner of the engine, the host surfaces and the config store.
///
/// Every panel write happens on the task driving [`Runtime::run`].
pub struct Runtime<W, M, C> {
    /// Layout engine.
    engine: QuestListEngine,
    /// Quest list panel.
    panel: W,
    /// Context menu currently open; rebuilt on every `MenuOpened`.
    menu: M,
    /// Option storage.
    store: C,
    /// Player facts.
    player: Box<dyn PlayerState + Send>,
    /// Change notifications from `store`.
    config_rx: mpsc::UnboundedReceiver<ConfigChange>,
    /// Pending-pass flag and wake channel.
    queue: ReflowQueue,
    /// Handle used for the runtime's own requests.
    handle: ReflowHandle,
}

impl<W, M, C> Runtime<W, M, C>
where
    W: WidgetSurface,
    M: MenuSurface,
    C: ConfigStore,
{
    /// What: Wire a runtime around the host surfaces.
    ///
    /// Inputs:
    /// - `engine`: Layout engine.
    /// - `panel`, `menu`: Host surfaces.
    /// - `store`: Config store; subscribed to immediately.
    ///
    /// Output:
    /// - Runtime with unrestricted player facts.
    pub fn new(engine: QuestListEngine, panel: W, menu: M, mut store: C) -> Self {
        let config_rx = store.subscribe();
        let (handle, queue) = ReflowQueue::channel();
        Self {
            engine,
            panel,
            menu,
            store,
            player: Box::new(Unrestricted),
            config_rx,
            queue,
            handle,
        }
    }

    /// Replace the player facts used for eligibility.
    #[must_use]
    pub fn with_player(mut self, player: impl PlayerState + Send + 'static) -> Self {
        self.player = Box::new(player);
        self
    }

    /// Handle for requesting passes from other tasks.
    #[must_use]
    pub fn reflow_handle(&self) -> ReflowHandle {
        self.handle.clone()
    }

    /// Layout engine.
    #[must_use]
    pub const fn engine(&self) -> &QuestListEngine {
        &self.engine
    }

    /// Quest list panel.
    #[must_use]
    pub const fn panel(&self) -> &W {
        &self.panel
    }

    /// Context menu.
    #[must_use]
    pub const fn menu(&self) -> &M {
        &self.menu
    }

    /// Config store.
    #[must_use]
    pub const fn store(&self) -> &C {
        &self.store
    }

    /// Current options as stored.
    #[must_use]
    pub fn options(&self) -> OptionState {
        OptionState::load(&self.store)
    }

    /// What: React to one host event.
    ///
    /// Inputs:
    /// - `event`: Notification from the host.
    ///
    /// Output:
    /// - `Ok(())` once handled; reflows are queued, never run inline.
    ///
    /// # Errors
    /// - A failed config write from a menu click; the option is left as it was.
    pub fn handle_event(&mut self, event: HostEvent) -> Result<(), ConfigError> {
        match event {
            HostEvent::ConfigChanged { group } => {
                if group == CONFIG_GROUP {
                    self.handle.request(ReflowReason::ConfigChanged);
                }
            }
            HostEvent::PanelLoaded => {
                self.handle.request(ReflowReason::PanelLoaded);
            }
            HostEvent::QuestTabClicked => {
                self.handle.request(ReflowReason::QuestTabClicked);
            }
            HostEvent::MenuOpened {
                target,
                on_quest_tab,
            } => {
                self.menu.clear_contributed();
                if on_quest_tab {
                    let options = self.options();
                    menu::contribute(&mut self.menu, &options, &target);
                }
            }
            HostEvent::MenuEntryClicked { label } => {
                if let Some(action) = menu::invoke(&label, &mut self.store)? {
                    debug!(action = ?action, "[Runtime] Menu entry handled");
                }
            }
        }
        Ok(())
    }

    /// What: Apply a change notification from the owned store.
    fn on_config_change(&self, change: &ConfigChange) {
        if change.group == CONFIG_GROUP {
            self.handle.request(ReflowReason::ConfigChanged);
        }
    }

    /// What: Run one pass with a fresh option snapshot.
    ///
    /// Output:
    /// - The engine's outcome.
    pub fn run_pass(&mut self, reason: ReflowReason) -> ReflowOutcome {
        let options = self.options();
        let outcome = self
            .engine
            .reflow(&mut self.panel, &options, self.player.as_ref());
        debug!(reason = ?reason, outcome = ?outcome, "[Runtime] Pass finished");
        outcome
    }

    /// What: Drive the runtime until the host event stream closes.
    ///
    /// Inputs:
    /// - `events`: Host notifications.
    ///
    /// Output:
    /// - The runtime, so callers can inspect the final panel and store.
    ///
    /// Details:
    /// - Host events are handled before queued passes, so a burst of events
    ///   collapses into a single pass.
    /// - On shutdown, outstanding config changes and a pending pass still run.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<HostEvent>) -> Self {
        info!("[Runtime] Quest list runtime started");
        loop {
            select! {
                biased;
                ev = events.recv() => {
                    let Some(ev) = ev else { break };
                    if let Err(e) = self.handle_event(ev) {
                        warn!(error = %e, "[Runtime] Failed to apply menu option");
                    }
                }
                Some(change) = self.config_rx.recv() => {
                    self.on_config_change(&change);
                }
                Some(reason) = self.queue.next() => {
                    self.run_pass(reason);
                }
            }
        }
        while let Ok(change) = self.config_rx.try_recv() {
            self.on_config_change(&change);
        }
        if let Some(reason) = self.queue.try_next() {
            self.run_pass(reason);
        }
        info!(
            passes = self.engine.applied_passes(),
            "[Runtime] Quest list runtime stopped"
        );
        self
    }
}
