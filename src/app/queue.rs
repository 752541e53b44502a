use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tracing::trace;

/// Why a pass was requested; only used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReflowReason {
    /// An option in the `questtab` group changed.
    ConfigChanged,
    /// The host finished building the quest list.
    PanelLoaded,
    /// The player clicked the quest tab.
    QuestTabClicked,
}

/// Cloneable handle for requesting a reflow from any task or thread.
#[derive(Clone, Debug)]
pub struct ReflowHandle {
    /// Wakes the runtime.
    tx: mpsc::UnboundedSender<ReflowReason>,
    /// Set while a pass is queued but not yet started.
    pending: Arc<AtomicBool>,
}

impl ReflowHandle {
    /// What: Request a pass on the runtime task.
    ///
    /// Inputs:
    /// - `reason`: Trigger, for logs.
    ///
    /// Output:
    /// - `true` when a new pass was queued, `false` when one was already pending
    ///   or the runtime is gone.
    ///
    /// Details:
    /// - Requests made while a pass is running queue exactly one more pass.
    pub fn request(&self, reason: ReflowReason) -> bool {
        if self.pending.swap(true, Ordering::AcqRel) {
            trace!(reason = ?reason, "[Reflow] Coalesced into pending pass");
            return false;
        }
        self.tx.send(reason).is_ok()
    }

    /// Whether a pass is queued and not yet started.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Receiving end owned by the runtime task.
#[derive(Debug)]
pub struct ReflowQueue {
    /// Wake-ups, at most one outstanding.
    rx: mpsc::UnboundedReceiver<ReflowReason>,
    /// Shared with every handle.
    pending: Arc<AtomicBool>,
}

impl ReflowQueue {
    /// Connected handle and queue.
    #[must_use]
    pub fn channel() -> (ReflowHandle, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let pending = Arc::new(AtomicBool::new(false));
        (
            ReflowHandle {
                tx,
                pending: Arc::clone(&pending),
            },
            Self { rx, pending },
        )
    }

    /// What: Wait for the next pass to run.
    ///
    /// Output:
    /// - The reason of the first request since the previous pass, or `None`
    ///   once every handle is dropped.
    ///
    /// Details:
    /// - Clears the pending flag before returning, so requests made during the
    ///   pass schedule a fresh one.
    pub async fn next(&mut self) -> Option<ReflowReason> {
        let reason = self.rx.recv().await?;
        self.pending.store(false, Ordering::Release);
        Some(reason)
    }

    /// Non-blocking variant of [`Self::next`].
    pub fn try_next(&mut self) -> Option<ReflowReason> {
        let reason = self.rx.try_recv().ok()?;
        self.pending.store(false, Ordering::Release);
        Some(reason)
    }
}
