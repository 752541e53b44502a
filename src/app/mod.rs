//! Quest list runtime: the reflow engine, its pass queue and the host event loop.
//!
//! All panel writes happen on the single task driving [`Runtime::run`]; other
//! tasks only request passes through a [`ReflowHandle`].

mod engine;
mod queue;
mod runtime;

pub use engine::{QuestListEngine, ReflowOutcome};
pub use queue::{ReflowHandle, ReflowQueue, ReflowReason};
pub use runtime::{HostEvent, Runtime};
