//! Dialogue domain: unit tests for conversation state and script parsing.

use super::loader::{fallback_registry, parse_script_file};
use super::resources::{ActiveDialogue, DialogueScript, DialogueState};

fn script() -> DialogueScript {
    DialogueScript {
        id: "keeper_greeting".to_string(),
        lines: vec![
            "Hello, wanderer.".to_string(),
            "Mind the ceiling.".to_string(),
        ],
        unlock_on_end: Some("gravity".to_string()),
    }
}

#[test]
fn test_active_dialogue_walks_lines_in_order() {
    let mut active = ActiveDialogue::from_script(&script());
    assert_eq!(active.line_index, 0);
    assert_eq!(active.typewriter.visible_len(), "Hello, wanderer.".len());

    assert!(active.advance_line());
    assert_eq!(active.line_index, 1);
    // The reveal restarts on each new line.
    assert_eq!(active.typewriter.revealed(), 0);

    assert!(!active.advance_line());
    assert_eq!(active.line_index, 1);
}

#[test]
fn test_dialogue_state_reports_activity() {
    let mut state = DialogueState::default();
    assert!(!state.has_active_dialogue());

    state.active = Some(ActiveDialogue::from_script(&script()));
    assert!(state.has_active_dialogue());

    state.active = None;
    assert!(!state.has_active_dialogue());
}

#[test]
fn test_empty_script_yields_empty_reveal() {
    let empty = DialogueScript {
        id: "empty".to_string(),
        lines: Vec::new(),
        unlock_on_end: None,
    };
    let active = ActiveDialogue::from_script(&empty);
    assert_eq!(active.typewriter.visible_len(), 0);
    assert!(active.typewriter.is_complete());
}

#[test]
fn test_parse_script_file_ron() {
    let source = r#"
        ScriptFile(
            scripts: [
                DialogueScript(
                    id: "shrine_gravity",
                    lines: [
                        "The world turns over for you now.",
                        "Hold <icon=select> to choose a gift.",
                    ],
                    unlock_on_end: "gravity",
                ),
            ],
        )
    "#;

    let scripts = parse_script_file(source).expect("valid script file");
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].id, "shrine_gravity");
    assert_eq!(scripts[0].lines.len(), 2);
    // Implicit Some is enabled for optional fields.
    assert_eq!(scripts[0].unlock_on_end.as_deref(), Some("gravity"));
}

#[test]
fn test_fallback_registry_is_usable() {
    let registry = fallback_registry();
    assert!(!registry.scripts.is_empty());
    for script in registry.scripts.values() {
        assert!(!script.lines.is_empty());
    }
}
