//! Pass-level properties: idempotence, aborts, section hiding and eligibility.

use questlist::app::{QuestListEngine, ReflowOutcome};
use questlist::catalog::{PlayerSnapshot, Unrestricted};
use questlist::state::{OptionState, SectionId};
use questlist::state::types::COMPLETE_COLOR;
use questlist::surface::{Element, MemoryPanel, PanelSnapshot};

use crate::fixtures::{free_rows, full_panel, section, three_quest_panel};

#[test]
/// What: Running the same pass twice changes nothing
///
/// - Input: Both prefixes and both sorts enabled; two passes
/// - Output: Identical panel snapshots, no doubled prefixes
fn repeated_passes_are_idempotent() {
    let mut engine = QuestListEngine::default();
    let mut panel = full_panel();
    let options = OptionState {
        show_length: true,
        show_difficulty: true,
        sort_length: true,
        sort_difficulty: true,
        ..OptionState::default()
    };
    engine.reflow(&mut panel, &options, &Unrestricted);
    let first = panel.snapshot();
    engine.reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(panel.snapshot(), first);
    assert_eq!(engine.applied_passes(), 2);
    assert_eq!(panel.reinit_count(), 2);
    let rows = free_rows(&panel);
    assert_eq!(rows[0].1.matches("</col>").count(), 2);
}

#[test]
/// What: A panel without every section is left untouched
///
/// - Input: Free and Members only; length prefixes on
/// - Output: Skipped naming Miniquests; snapshot equal to the input
fn incomplete_panel_is_not_written() {
    let before = PanelSnapshot {
        free: section(
            "Free Quests",
            vec![Element::item("Cook's Assistant", COMPLETE_COLOR)],
        ),
        members: section("Members' Quests", Vec::new()),
        miniquests: None,
    };
    let mut panel = MemoryPanel::from_snapshot(before.clone());
    let options = OptionState {
        show_length: true,
        ..OptionState::default()
    };
    let outcome = QuestListEngine::default().reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(
        outcome,
        ReflowOutcome::Skipped {
            section: SectionId::Miniquests
        }
    );
    assert_eq!(panel.snapshot(), before);
}

#[test]
/// What: A hidden Free section moves the next section to the top
///
/// - Input: Full panel with hideFree
/// - Output: Members header at 10 with rows at 20 and 35; Miniquests header at 60
fn hidden_section_collapses() {
    let mut engine = QuestListEngine::default();
    let mut panel = full_panel();
    let options = OptionState {
        hide_free: true,
        ..OptionState::default()
    };
    let outcome = engine.reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(
        outcome,
        ReflowOutcome::Applied {
            visible_rows: 3,
            height: 95,
        }
    );
    assert!(free_rows(&panel).is_empty());
    let members = panel.section(SectionId::Members).expect("members");
    assert_eq!(members.offset, 10);
    assert_eq!(
        panel
            .visible_rows(SectionId::Members)
            .into_iter()
            .map(|(offset, _)| offset)
            .collect::<Vec<_>>(),
        vec![20, 35]
    );
    let mini = panel.section(SectionId::Miniquests).expect("miniquests");
    assert_eq!(mini.offset, 60);
}

#[test]
/// What: Status rules never hide a row without a known status
///
/// - Input: Every status hidden; a miniquest with an unrecognised colour
/// - Output: Only that miniquest stays visible
fn unknown_status_survives_status_rules() {
    let mut engine = QuestListEngine::default();
    let mut panel = full_panel();
    let options = OptionState {
        hide_completed: true,
        hide_in_progress: true,
        hide_not_started: true,
        ..OptionState::default()
    };
    engine.reflow(&mut panel, &options, &Unrestricted);
    assert!(free_rows(&panel).is_empty());
    assert!(panel.visible_rows(SectionId::Members).is_empty());
    assert_eq!(
        panel.visible_rows(SectionId::Miniquests),
        vec![(20, "Unlisted Errand".to_string())]
    );
}

#[test]
/// What: Length sort is stable and unknown quests stay visible
///
/// - Input: Full panel with sortLength and showLength
/// - Output: Short quests first in host order, then the long one
fn length_sort_is_stable() {
    let mut engine = QuestListEngine::default();
    let mut panel = full_panel();
    let options = OptionState {
        sort_length: true,
        show_length: true,
        ..OptionState::default()
    };
    engine.reflow(&mut panel, &options, &Unrestricted);
    assert_eq!(
        free_rows(&panel),
        vec![
            (20, "<col=DC10D>S</col> Cook's Assistant".to_string()),
            (35, "<col=DC10D>S</col> Goblin Diplomacy".to_string()),
            (50, "<col=FF8C00>L</col> Dragon Slayer".to_string()),
        ]
    );
    assert_eq!(
        panel.visible_rows(SectionId::Miniquests),
        vec![(20, "Unlisted Errand".to_string())]
    );
}

#[test]
/// What: Can't-Do hides quests whose requirements the player misses
///
/// - Input: Player with 10 quest points and nothing completed; hideCantDo
/// - Output: Cook's Assistant only; Dragon Slayer and Monkey Madness hidden
fn cant_do_uses_player_state() {
    let mut engine = QuestListEngine::default();
    let mut panel = three_quest_panel();
    let player = PlayerSnapshot {
        quest_points: 10,
        ..PlayerSnapshot::default()
    };
    let options = OptionState {
        hide_cant_do: true,
        ..OptionState::default()
    };
    engine.reflow(&mut panel, &options, &player);
    assert_eq!(
        free_rows(&panel),
        vec![(20, "Cook's Assistant".to_string())]
    );
    let plan = engine.last_plan();
    let free = plan.section(SectionId::Free).expect("free planned");
    assert_eq!(free.rows.iter().filter(|r| r.hidden).count(), 2);
}
