//! E2E tests for the unsaved-changes quit guard

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use rem::config::Config;

const WARNING: &str = "WARNING!!! File has unsaved changes. Press Ctrl-Q 1 more times to quit.";

fn quit(harness: &mut EditorTestHarness) {
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
}

#[test]
fn test_clean_document_quits_immediately() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    quit(&mut harness);
    assert!(harness.should_quit());
    // the screen is cleared on the way out
    let frame = String::from_utf8_lossy(harness.editor().terminal().last_frame()).into_owned();
    assert!(frame.contains("\x1b[2J"));
}

#[test]
fn test_dirty_document_needs_second_press() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.type_text("x").unwrap();

    quit(&mut harness);
    assert!(!harness.should_quit());
    assert_eq!(harness.status_text().as_deref(), Some(WARNING));
    harness.assert_screen_contains(WARNING);

    quit(&mut harness);
    assert!(harness.should_quit());
}

#[test]
fn test_other_key_resets_quit_counter() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.type_text("x").unwrap();

    quit(&mut harness);
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    quit(&mut harness);
    assert!(!harness.should_quit());

    quit(&mut harness);
    assert!(harness.should_quit());
}

#[test]
fn test_quit_times_from_config() {
    let mut config = Config::default();
    config.editor.quit_times = 0;
    let mut harness = EditorTestHarness::with_config(80, 10, config).unwrap();
    harness.type_text("x").unwrap();
    quit(&mut harness);
    assert!(harness.should_quit());

    let mut config = Config::default();
    config.editor.quit_times = 3;
    let mut harness = EditorTestHarness::with_config(80, 10, config).unwrap();
    harness.type_text("x").unwrap();
    quit(&mut harness);
    assert_eq!(
        harness.status_text().as_deref(),
        Some("WARNING!!! File has unsaved changes. Press Ctrl-Q 3 more times to quit.")
    );
    quit(&mut harness);
    quit(&mut harness);
    assert!(!harness.should_quit());
    quit(&mut harness);
    assert!(harness.should_quit());
}

#[test]
fn test_saved_document_quits_immediately() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a.txt");

    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.open_file(&file_path).unwrap();
    harness.type_text("x").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    quit(&mut harness);
    assert!(harness.should_quit());
}
