//! Menu contribution and clicks through the runtime and a settings file.

use tokio::sync::mpsc;

use questlist::app::{HostEvent, QuestListEngine, Runtime};
use questlist::config::{ConfigError, ConfigStore, FileConfigStore, MemoryConfigStore};
use questlist::state::SectionId;
use questlist::surface::MemoryMenu;

use crate::fixtures::{free_rows, three_quest_panel};

fn open_quest_menu() -> HostEvent {
    HostEvent::MenuOpened {
        target: "Quest List".to_string(),
        on_quest_tab: true,
    }
}

#[tokio::test]
/// What: Each quest tab open offers one set of entries above Cancel
///
/// - Input: An open elsewhere, then two opens on the quest tab
/// - Output: Twelve contributed entries plus Cancel, no repeats
async fn menu_entries_contributed_once() {
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        MemoryConfigStore::default(),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(HostEvent::MenuOpened {
        target: "Bank".to_string(),
        on_quest_tab: false,
    })
    .expect("runtime receiver alive");
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    let labels = rt.menu().labels();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0], "Reset");
    assert_eq!(labels[12], "Cancel");
    assert_eq!(rt.engine().applied_passes(), 0);
}

#[tokio::test]
/// What: Reopening after a toggle offers only the verb for the new state
///
/// - Input: Open on the quest tab, click "Hide Free", open again
/// - Output: "Show Free" offered, "Hide Free" gone, still thirteen entries
async fn reopen_after_toggle_offers_current_verb() {
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        MemoryConfigStore::default(),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    tx.send(HostEvent::MenuEntryClicked {
        label: "Hide Free".to_string(),
    })
    .expect("runtime receiver alive");
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    let labels = rt.menu().labels();
    assert!(labels.contains(&"Show Free"));
    assert!(!labels.contains(&"Hide Free"));
    assert_eq!(labels.len(), 13);
    assert_eq!(labels.last(), Some(&"Cancel"));
    assert!(rt.options().hide_free);
}

#[tokio::test]
/// What: Opening a menu elsewhere leaves none of the quest tab entries behind
///
/// - Input: Open on the quest tab, then open on another target
/// - Output: Only Cancel
async fn open_elsewhere_drops_entries() {
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        MemoryConfigStore::default(),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    tx.send(HostEvent::MenuOpened {
        target: "Bank".to_string(),
        on_quest_tab: false,
    })
    .expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    assert_eq!(rt.menu().labels(), vec!["Cancel"]);
}

#[tokio::test]
/// What: Turning the menu option off suppresses the entries
///
/// - Input: Store with menuOption=false; MenuOpened on the quest tab
/// - Output: Only Cancel
async fn menu_option_off_adds_nothing() {
    let mut store = MemoryConfigStore::default();
    store
        .set("questtab", "menuOption", "false")
        .expect("memory store write");
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        store,
    );
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(open_quest_menu()).expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;
    assert_eq!(rt.menu().labels(), vec!["Cancel"]);
}

#[tokio::test]
/// What: Clicks persist to the settings file and drive the next layout
///
/// - Input: File store in a temp dir; PanelLoaded then "Hide Complete" and "Show Difficulty"
/// - Output: File holds both keys; Cook's Assistant hidden; remaining rows prefixed
async fn clicks_persist_to_settings_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("questlist").join("settings.conf");
    let rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        FileConfigStore::open(&path),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    for label in ["Hide Complete", "Show Difficulty"] {
        tx.send(open_quest_menu()).expect("runtime receiver alive");
        tx.send(HostEvent::MenuEntryClicked {
            label: label.to_string(),
        })
        .expect("runtime receiver alive");
    }
    tx.send(HostEvent::PanelLoaded)
        .expect("runtime receiver alive");
    drop(tx);
    let rt = rt.run(rx).await;

    let content = std::fs::read_to_string(&path).expect("settings written");
    assert!(content.contains("questtab.hideCompleted = true"));
    assert!(content.contains("questtab.showDifficulty = true"));
    assert!(content.starts_with('#'));
    assert_eq!(
        free_rows(rt.panel()),
        vec![
            (20, "<col=FF8C00>M</col> Monkey Madness".to_string()),
            (35, "<col=FFFF00>E</col> Dragon Slayer".to_string()),
        ]
    );
    assert!(rt.panel().section(SectionId::Members).is_some());

    let reopened = FileConfigStore::open(&path);
    assert_eq!(
        reopened.get("questtab", "hideCompleted").as_deref(),
        Some("true")
    );
}

#[tokio::test]
/// What: A failing store write surfaces to the caller and leaves options alone
///
/// - Input: Settings path nested under a regular file
/// - Output: `ConfigError::Io` from the click; options still default
async fn failed_write_is_reported() {
    let blocker = tempfile::NamedTempFile::new().expect("temp file");
    let path = blocker.path().join("settings.conf");
    let mut rt = Runtime::new(
        QuestListEngine::default(),
        three_quest_panel(),
        MemoryMenu::default(),
        FileConfigStore::open(path),
    );
    let err = rt
        .handle_event(HostEvent::MenuEntryClicked {
            label: "Hide Free".to_string(),
        })
        .expect_err("write under a file must fail");
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(!rt.options().hide_free);
}
