//! End-to-end layout scenarios for three well-known quests.

use questlist::app::{QuestListEngine, ReflowOutcome};
use questlist::catalog::Unrestricted;
use questlist::config::MemoryConfigStore;
use questlist::logic::menu::invoke;
use questlist::state::{OptionState, SectionId};

use crate::fixtures::{free_rows, three_quest_panel};

fn by_difficulty() -> OptionState {
    OptionState {
        sort_difficulty: true,
        show_difficulty: true,
        ..OptionState::default()
    }
}

#[test]
/// What: Difficulty sort orders ascending and prefixes every label
///
/// - Input: Monkey Madness, Dragon Slayer, Cook's Assistant; sortDifficulty and showDifficulty
/// - Output: Cook's Assistant, Dragon Slayer, Monkey Madness at 20, 35, 50 with N/E/M prefixes
fn difficulty_sort_and_prefix() {
    let mut engine = QuestListEngine::default();
    let mut panel = three_quest_panel();
    let outcome = engine.reflow(&mut panel, &by_difficulty(), &Unrestricted);
    assert_eq!(
        outcome,
        ReflowOutcome::Applied {
            visible_rows: 3,
            height: 123,
        }
    );
    assert_eq!(
        free_rows(&panel),
        vec![
            (20, "<col=DC10D>N</col> Cook's Assistant".to_string()),
            (35, "<col=FFFF00>E</col> Dragon Slayer".to_string()),
            (50, "<col=FF8C00>M</col> Monkey Madness".to_string()),
        ]
    );
    let free = panel.section(SectionId::Free).expect("free section");
    assert_eq!(free.offset, 10);
    assert!(!free.children[0].hidden);
}

#[test]
/// What: Hiding completed quests closes the gap
///
/// - Input: Same quests and options plus hideCompleted
/// - Output: Cook's Assistant hidden; the other two at 20 and 35
fn hide_completed_closes_gap() {
    let mut engine = QuestListEngine::default();
    let mut panel = three_quest_panel();
    let options = OptionState {
        hide_completed: true,
        ..by_difficulty()
    };
    engine.reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(
        free_rows(&panel),
        vec![
            (20, "<col=FFFF00>E</col> Dragon Slayer".to_string()),
            (35, "<col=FF8C00>M</col> Monkey Madness".to_string()),
        ]
    );
    let free = panel.section(SectionId::Free).expect("free section");
    let cooks = free
        .children
        .iter()
        .find(|c| c.text.ends_with("Cook's Assistant"))
        .expect("cook's assistant row");
    assert!(cooks.hidden);
}

#[test]
/// What: Reset brings back the baseline layout
///
/// - Input: Options set through menu clicks, a pass, then "Reset" and another pass
/// - Output: Same rows as a fresh panel laid out with defaults: host order, no prefixes
fn reset_restores_baseline() {
    let mut baseline_panel = three_quest_panel();
    QuestListEngine::default().reflow(
        &mut baseline_panel,
        &OptionState::default(),
        &Unrestricted,
    );
    let baseline = free_rows(&baseline_panel);
    assert_eq!(
        baseline,
        vec![
            (20, "Monkey Madness".to_string()),
            (35, "Dragon Slayer".to_string()),
            (50, "Cook's Assistant".to_string()),
        ]
    );

    let mut store = MemoryConfigStore::default();
    let mut engine = QuestListEngine::default();
    let mut panel = three_quest_panel();
    for label in ["Sort by Difficulty", "Show Difficulty", "Show Length", "Hide Complete"] {
        invoke(label, &mut store).expect("write option");
    }
    engine.reflow(&mut panel, &OptionState::load(&store), &Unrestricted);
    assert_ne!(free_rows(&panel), baseline);

    invoke("Reset", &mut store).expect("reset");
    let options = OptionState::load(&store);
    assert_eq!(options, OptionState::default());
    engine.reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(free_rows(&panel), baseline);
}
