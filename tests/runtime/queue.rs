//! Pass scheduling through the async runtime.

use std::time::Duration;

use tokio::sync::mpsc;

use questlist::app::{HostEvent, QuestListEngine, ReflowReason, Runtime};
use questlist::config::{ConfigStore, MemoryConfigStore};
use questlist::surface::MemoryMenu;

use crate::fixtures::three_quest_panel;

fn runtime() -> Runtime<questlist::surface::MemoryPanel, MemoryMenu, MemoryConfigStore> {
    Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        MemoryConfigStore::default(),
    )
}

#[tokio::test]
/// What: A burst of triggers collapses into a single pass
///
/// - Input: PanelLoaded, QuestTabClicked, two questtab changes and a foreign change, queued up front
/// - Output: Exactly one pass applied
async fn burst_collapses_into_one_pass() {
    let rt = runtime();
    let handle = rt.reflow_handle();
    let (tx, rx) = mpsc::unbounded_channel();
    for ev in [
        HostEvent::PanelLoaded,
        HostEvent::QuestTabClicked,
        HostEvent::ConfigChanged {
            group: "questtab".to_string(),
        },
        HostEvent::ConfigChanged {
            group: "questtab".to_string(),
        },
        HostEvent::ConfigChanged {
            group: "chat".to_string(),
        },
    ] {
        tx.send(ev).expect("runtime receiver alive");
    }
    assert!(handle.request(ReflowReason::QuestTabClicked));
    drop(tx);
    let rt = rt.run(rx).await;
    assert_eq!(rt.engine().applied_passes(), 1);
    assert!(!handle.is_pending());
}

#[tokio::test]
/// What: Foreign config groups never schedule a pass
///
/// - Input: Only a change to another group
/// - Output: Zero passes; panel untouched
async fn foreign_group_is_ignored() {
    let rt = runtime();
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(HostEvent::ConfigChanged {
        group: "chat".to_string(),
    })
    .expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    assert_eq!(rt.engine().applied_passes(), 0);
    assert_eq!(rt.panel().reinit_count(), 0);
}

#[tokio::test]
/// What: Triggers separated by a finished pass each get their own pass
///
/// - Input: PanelLoaded, a pause, QuestTabClicked, a pause, end of stream
/// - Output: Two passes
async fn spaced_triggers_run_separately() {
    let rt = runtime();
    let (tx, rx) = mpsc::unbounded_channel();
    let host = async move {
        tx.send(HostEvent::PanelLoaded).expect("runtime receiver alive");
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(HostEvent::QuestTabClicked)
            .expect("runtime receiver alive");
        tokio::time::sleep(Duration::from_millis(20)).await;
    };
    let (rt, ()) = tokio::join!(rt.run(rx), host);
    assert_eq!(rt.engine().applied_passes(), 2);
}

#[tokio::test]
/// What: A menu click reaches the store and its change notice schedules the pass
///
/// - Input: Store seeded with hideCompleted, then a "Show Length" click
/// - Output: One pass; both options visible through the runtime
async fn store_writes_trigger_pass() {
    let mut store = MemoryConfigStore::default();
    store
        .set("questtab", "hideCompleted", "true")
        .expect("memory store write");
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        store,
    );
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(HostEvent::MenuEntryClicked {
        label: "Show Length".to_string(),
    })
    .expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    assert_eq!(rt.engine().applied_passes(), 1);
    assert!(rt.options().hide_completed);
    assert!(rt.options().show_length);
}
